//! Append-only application log
//!
//! One file per application, truncated once at initialization and appended
//! to for the rest of the process lifetime. Appends are best-effort by
//! contract: a failed write is swallowed, never surfaced to the caller.

use chrono::Local;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Severity written into the bracketed level field of each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        })
    }
}

/// Cheap, cloneable handle over the application log file.
///
/// Clones share the same path, so detached background tasks can keep logging
/// after the caller has moved on.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty the log. Called once per initialization.
    pub(crate) fn truncate(&self) -> io::Result<()> {
        fs::write(&self.path, "")
    }

    /// Append one `[<timestamp>] [<LEVEL>] <message>` line.
    pub fn append(&self, level: Level, message: &str) {
        let stamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
        let line = format!("[{stamp}] [{level}] {message}\n");
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(e) = written {
            debug!(path = %self.path.display(), error = %e, "failed to append to application log");
        }
    }

    /// Adapter that feeds an `io::Write` sink into the log, one line per
    /// write. Useful for redirecting output streams of embedded tooling.
    pub fn writer(&self, level: Level) -> LogWriter {
        LogWriter {
            log: self.clone(),
            level,
        }
    }
}

/// `io::Write` adapter returned by [`LogFile::writer`].
#[derive(Debug)]
pub struct LogWriter {
    log: LogFile,
    level: Level,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let trimmed = text.trim_end_matches(['\r', '\n']);
        if !trimmed.is_empty() {
            self.log.append(self.level, trimmed);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
