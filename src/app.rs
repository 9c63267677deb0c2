//! Application identity
//!
//! Every path-dependent component in this crate is constructed from an
//! [`AppInfo`], so the "identity must be established before first use"
//! contract is enforced by the type system instead of process-global state:
//! there is no way to resolve paths or open a config store without a
//! validated identity in hand.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Immutable application identity: name plus root location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    name: String,
    root: PathBuf,
    packaged: bool,
}

impl AppInfo {
    /// Validate and build an identity.
    ///
    /// `root` is the directory holding the application's assets (styles,
    /// icons, langs, licenses, version.txt). The name scopes the per-user
    /// config and data directories, so it must be usable as a directory name.
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Result<Self, Error> {
        let name = name.into();
        let root = root.into();
        if name.is_empty() {
            return Err(Error::Misconfigured(
                "application name must not be empty".to_string(),
            ));
        }
        if name.contains(['/', '\\']) {
            return Err(Error::Misconfigured(format!(
                "application name {name:?} must be filesystem-safe"
            )));
        }
        if root.as_os_str().is_empty() {
            return Err(Error::Misconfigured(
                "application root location must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name,
            root,
            packaged: false,
        })
    }

    /// Mark the identity as running from a packaged (frozen) binary.
    ///
    /// Packaged layouts record a root location one directory deeper than the
    /// actual distribution folder, so path resolution climbs one extra level.
    pub fn packaged(mut self, packaged: bool) -> Self {
        self.packaged = packaged;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_packaged(&self) -> bool {
        self.packaged
    }
}
