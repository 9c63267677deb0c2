//! JSON-backed configuration store
//!
//! One JSON document per application, reconciled against a caller-supplied
//! default schema on every read and replaced wholesale on every write. There
//! is no caching layer and no locking: every get/set is a blocking full
//! read-modify-write on the calling thread, and concurrent writers race with
//! last-writer-wins. Callers that need concurrent safety must serialize
//! access externally.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use tracing::{info, warn};

use crate::app::AppInfo;
use crate::config::log::{Level, LogFile};
use crate::config::reconcile::reconcile;
use crate::error::Error;
use crate::paths::PathSet;
use crate::version::AppVersion;

/// Handle over an initialized per-app configuration directory.
///
/// A store only exists after [`ConfigStore::initialize`] has succeeded, so
/// reads and writes can never run against un-created directories or an
/// un-truncated log.
#[derive(Debug)]
pub struct ConfigStore {
    paths: PathSet,
    defaults: Map<String, Value>,
    log: LogFile,
}

impl ConfigStore {
    /// Create all directories and files needed for config, logging and data
    /// storage, then open the store.
    ///
    /// Idempotent across runs: the config file is seeded with the default
    /// schema only when absent, never overwritten. The log file is truncated
    /// on every call, then receives two lines reporting the application
    /// name/version and the host platform. `create_lib_dir` additionally
    /// creates the per-app library directory.
    pub fn initialize(
        app: &AppInfo,
        defaults: Map<String, Value>,
        create_lib_dir: bool,
    ) -> Result<Self, Error> {
        Self::initialize_with_paths(app, PathSet::resolve(app), defaults, create_lib_dir)
    }

    /// Like [`initialize`](Self::initialize), with an explicit path set
    /// instead of platform resolution. Useful for tests and embedding.
    pub fn initialize_with_paths(
        app: &AppInfo,
        paths: PathSet,
        defaults: Map<String, Value>,
        create_lib_dir: bool,
    ) -> Result<Self, Error> {
        fs::create_dir_all(&paths.config_dir).map_err(|source| Error::CreateDir {
            path: paths.config_dir.clone(),
            source,
        })?;
        if create_lib_dir {
            fs::create_dir_all(&paths.lib_dir).map_err(|source| Error::CreateDir {
                path: paths.lib_dir.clone(),
                source,
            })?;
        }

        let log = LogFile::new(paths.log_file.clone());
        log.truncate().map_err(|source| Error::Write {
            path: paths.log_file.clone(),
            source,
        })?;

        let version = match AppVersion::load(&paths) {
            Ok(version) => version.to_string(),
            Err(e) => {
                warn!(error = %e, "could not read application version");
                "unknown".to_string()
            }
        };
        log.append(Level::Info, &format!("{} - Version {}", app.name(), version));
        log.append(
            Level::Info,
            &format!(
                "Running on {} {}",
                std::env::consts::OS,
                std::env::consts::ARCH
            ),
        );

        let store = Self {
            paths,
            defaults,
            log,
        };
        if !store.paths.config_file.exists() {
            store.overwrite(&store.defaults)?;
            info!(path = %store.paths.config_file.display(), "created default config file");
        }
        Ok(store)
    }

    /// Read the reconciled record and return the value for `key`.
    ///
    /// A corrupt on-disk document is recovered locally: a diagnostic goes to
    /// the application log and the in-memory defaults serve this call; the
    /// corrupt file stays on disk untouched until the next `set` replaces it.
    pub fn get(&self, key: &str) -> Result<Value, Error> {
        let record = self.read_reconciled()?;
        record
            .get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Update one key and replace the whole document on disk.
    ///
    /// A value that cannot be represented as JSON is recovered locally: a
    /// diagnostic goes to the application log and the write is skipped,
    /// leaving the on-disk file unchanged.
    pub fn set<T: Serialize>(&self, key: &str, value: T) -> Result<(), Error> {
        let mut record = self.read_reconciled()?;
        let value = match serde_json::to_value(value) {
            Ok(value) => value,
            Err(e) => {
                self.log.append(
                    Level::Error,
                    &format!("Failed to encode configuration value for {key:?}: {e}"),
                );
                return Ok(());
            }
        };
        record.insert(key.to_string(), value);
        self.overwrite(&record)
    }

    /// Append a line to the application log. Never fails the caller.
    pub fn log(&self, message: &str, level: Level) {
        self.log.append(level, message);
    }

    /// Handle for detached tasks that need to keep logging.
    pub fn logger(&self) -> &LogFile {
        &self.log
    }

    pub fn paths(&self) -> &PathSet {
        &self.paths
    }

    fn read_reconciled(&self) -> Result<Map<String, Value>, Error> {
        let text =
            fs::read_to_string(&self.paths.config_file).map_err(|source| Error::Read {
                path: self.paths.config_file.clone(),
                source,
            })?;
        let record = match serde_json::from_str::<Map<String, Value>>(&text) {
            Ok(record) => record,
            Err(e) => {
                self.log.append(
                    Level::Error,
                    &format!("Failed to decode configuration file: {e}"),
                );
                self.log
                    .append(Level::Info, "Serving default configuration instead");
                self.defaults.clone()
            }
        };
        Ok(reconcile(record, &self.defaults))
    }

    fn overwrite(&self, record: &Map<String, Value>) -> Result<(), Error> {
        let text = match serde_json::to_string(record) {
            Ok(text) => text,
            Err(e) => {
                self.log
                    .append(Level::Error, &format!("Failed to encode configuration: {e}"));
                return Ok(());
            }
        };
        fs::write(&self.paths.config_file, text).map_err(|source| Error::Write {
            path: self.paths.config_file.clone(),
            source,
        })
    }
}
