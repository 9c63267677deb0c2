//! Platform path resolution
//!
//! [`PathSet::resolve`] is a pure function of identity + OS family: nothing
//! is created on disk here. Directory creation is the config store's job at
//! initialization.

use std::path::{Path, PathBuf};

use crate::app::AppInfo;
use crate::constants::{assets, config};

/// Every directory and file derived from an application identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    /// Package root: the supplied root location (its parent when packaged).
    pub root: PathBuf,
    pub version_file: PathBuf,
    pub styles_dir: PathBuf,
    pub icons_dir: PathBuf,
    pub langs_dir: PathBuf,
    pub licenses_dir: PathBuf,
    /// Per-app directory under the platform config location.
    pub config_dir: PathBuf,
    pub config_file: PathBuf,
    pub log_file: PathBuf,
    /// Optional library/cache directory for generated or downloaded files
    /// that should stay out of a possibly-synced config folder.
    pub lib_dir: PathBuf,
}

impl PathSet {
    pub fn resolve(app: &AppInfo) -> Self {
        let root = package_root(app.root(), app.is_packaged());
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app.name());
        Self {
            version_file: root.join(assets::VERSION_FILE),
            styles_dir: root.join(assets::STYLES_DIR),
            icons_dir: root.join(assets::ICONS_DIR),
            langs_dir: root.join(assets::LANGS_DIR),
            licenses_dir: root.join(assets::LICENSES_DIR),
            config_file: config_dir.join(config::CONFIG_FILENAME),
            log_file: config_dir.join(config::LOG_FILENAME),
            lib_dir: lib_dir(app.name()),
            config_dir,
            root,
        }
    }
}

fn package_root(root: &Path, packaged: bool) -> PathBuf {
    if packaged {
        // Packaged builds nest the recorded root one level deeper than the
        // distribution folder.
        match root.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    } else {
        root.to_path_buf()
    }
}

/// Library directory naming differs by OS family: a named subdirectory under
/// local app data on Windows, a dotted hidden directory under home elsewhere.
fn lib_dir(name: &str) -> PathBuf {
    if cfg!(windows) {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(name)
            .join(config::LIB_DIR_NAME)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!(".{name}"))
            .join(config::LIB_DIR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppInfo {
        AppInfo::new("Notepad", "/opt/notepad").unwrap()
    }

    #[test]
    fn test_resolution_is_deterministic() {
        assert_eq!(PathSet::resolve(&app()), PathSet::resolve(&app()));
    }

    #[test]
    fn test_asset_dirs_are_siblings_under_root() {
        let paths = PathSet::resolve(&app());
        assert_eq!(paths.root, PathBuf::from("/opt/notepad"));
        assert_eq!(paths.version_file, PathBuf::from("/opt/notepad/version.txt"));
        assert_eq!(paths.styles_dir, PathBuf::from("/opt/notepad/styles"));
        assert_eq!(paths.icons_dir, PathBuf::from("/opt/notepad/icons"));
        assert_eq!(paths.langs_dir, PathBuf::from("/opt/notepad/langs"));
        assert_eq!(paths.licenses_dir, PathBuf::from("/opt/notepad/licenses"));
    }

    #[test]
    fn test_packaged_root_climbs_one_level() {
        let packaged = AppInfo::new("Notepad", "/opt/notepad.dist/notepad")
            .unwrap()
            .packaged(true);
        let paths = PathSet::resolve(&packaged);
        assert_eq!(paths.root, PathBuf::from("/opt/notepad.dist"));
        assert_eq!(paths.styles_dir, PathBuf::from("/opt/notepad.dist/styles"));
    }

    #[test]
    fn test_packaged_root_without_parent_falls_back_to_cwd() {
        let packaged = AppInfo::new("Notepad", "notepad").unwrap().packaged(true);
        let paths = PathSet::resolve(&packaged);
        assert_eq!(paths.root, PathBuf::from("."));
    }

    #[test]
    fn test_config_files_live_in_named_config_dir() {
        let paths = PathSet::resolve(&app());
        assert!(paths.config_dir.ends_with("Notepad"));
        assert_eq!(paths.config_file, paths.config_dir.join("config.json"));
        assert_eq!(paths.log_file, paths.config_dir.join("latest.log"));
    }

    #[cfg(unix)]
    #[test]
    fn test_lib_dir_is_hidden_under_home_on_unix() {
        let paths = PathSet::resolve(&app());
        assert!(paths.lib_dir.ends_with(".Notepad/lib"));
    }
}
