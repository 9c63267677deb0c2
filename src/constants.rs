//! Application-wide constants
//!
//! Single source of truth for file names, directory layout markers, and
//! external tool names used throughout the crate.

/// Per-app configuration directory layout
pub mod config {
    /// JSON configuration document, one per application
    pub const CONFIG_FILENAME: &str = "config.json";

    /// Append-only diagnostic log, truncated at every process start
    pub const LOG_FILENAME: &str = "latest.log";

    /// Library/cache directory name under the per-app data location
    pub const LIB_DIR_NAME: &str = "lib";
}

/// Asset layout inside the host application package
pub mod assets {
    /// Single line, dotted integer version
    pub const VERSION_FILE: &str = "version.txt";

    /// Two-level stylesheet tree: `styles/<group>/<theme>/stylesheet.qss`
    pub const STYLES_DIR: &str = "styles";

    /// Icon sources plus the compiled resource module
    pub const ICONS_DIR: &str = "icons";

    /// Qt Designer UI definitions
    pub const UI_DIR: &str = "ui";

    /// Translation sources (`.ts`) and compiled catalogs (`.qm`)
    pub const LANGS_DIR: &str = "langs";

    /// License descriptors (`*.json`) plus referenced content files
    pub const LICENSES_DIR: &str = "licenses";

    /// Stylesheet file expected inside every theme directory
    pub const STYLESHEET_FILENAME: &str = "stylesheet.qss";

    /// Theme entries with this marker in their name are build caches, not themes
    pub const CACHE_MARKER: &str = "cache";

    /// Icon resource collection compiled by `rcc`
    pub const ICONS_QRC: &str = "icons.qrc";

    /// Output module produced from the icon resource collection
    pub const ICONS_RESOURCE: &str = "resource.py";
}

/// External executables invoked by the CLI
pub mod tools {
    /// UI compiler (`.ui` definitions to Python modules)
    pub const UIC: &str = "pyuic6";

    /// Qt resource compiler
    pub const RCC: &str = "rcc";

    /// Translation source updater
    pub const LUPDATE: &str = "lupdate";

    /// Translation catalog compiler
    pub const LRELEASE: &str = "lrelease";

    /// Standalone-binary packager
    pub const PACKAGER: &str = "nuitka";
}
