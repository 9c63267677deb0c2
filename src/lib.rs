#![forbid(unsafe_code)]

//! Utility layer for Qt/PyQt desktop application projects.
//!
//! Standardizes per-app config/log/data paths, provides a JSON-backed
//! configuration store with default-schema reconciliation and an append-only
//! diagnostic log, discovers bundled styles and license metadata, and opens
//! URLs/files with the OS default handler from detached background threads.
//! The companion binary wraps the external Qt build tooling (UI compilation,
//! resources, translations, packaging) for a host application package.
//!
//! ```no_run
//! use pyqt_forge::{AppInfo, ConfigStore};
//! use serde_json::{Map, json};
//!
//! # fn main() -> Result<(), pyqt_forge::Error> {
//! let mut defaults = Map::new();
//! defaults.insert("theme".to_string(), json!("dark"));
//! defaults.insert("volume".to_string(), json!(50));
//!
//! let app = AppInfo::new("Notepad", "/opt/notepad")?;
//! let store = ConfigStore::initialize(&app, defaults, false)?;
//! store.set("volume", 80)?;
//! assert_eq!(store.get("volume")?, json!(80));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
mod fsutil;
pub mod launch;
pub mod licenses;
pub mod paths;
pub mod styles;
pub mod tools;
pub mod version;

pub use app::AppInfo;
pub use config::{ConfigStore, Level, LogFile, LogWriter, reconcile};
pub use error::Error;
pub use launch::{open_file, open_url};
pub use licenses::{License, find_licenses};
pub use paths::PathSet;
pub use styles::{Style, find_styles};
pub use version::AppVersion;
