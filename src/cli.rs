//! CLI surface
//!
//! Wraps the external Qt build tooling for a host application package:
//! UI compilation, icon resource compilation, translation maintenance, and
//! standalone-binary packaging. Exit-code contract: 0 on success, non-zero
//! on uncaught failure.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app::AppInfo;
use crate::constants::{assets, tools};
use crate::fsutil;
use crate::paths::PathSet;
use crate::tools::{find_executable, run_tool};
use crate::version::AppVersion;

#[derive(Debug, Parser)]
#[command(name = "pyqt-forge")]
#[command(version)]
#[command(about = "Utility commands for PyQt application packages", long_about = None)]
pub struct Cli {
    /// Path to the main application package.
    pub package: PathBuf,

    /// Compile all ui/*.ui files in the package to _ui.py modules.
    #[arg(long)]
    pub compile_ui: bool,

    /// Compile the icons/icons.qrc file to a resource.py module.
    #[arg(long)]
    pub compile_icons: bool,

    /// Update all langs/*.ts files from the .ui and source files.
    #[arg(long)]
    pub update_langs: bool,

    /// Additional source files to include in the lupdate command.
    #[arg(long = "lupdate-file", value_name = "FILE")]
    pub lupdate_files: Vec<PathBuf>,

    /// Compile all langs/*.ts files to .qm files.
    #[arg(long)]
    pub compile_langs: bool,

    /// Build the Linux binary with the external packager.
    #[arg(long)]
    pub build_linux: bool,

    /// Build the Windows executable with the external packager.
    #[arg(long)]
    pub build_windows: bool,

    /// Build the macOS binary with the external packager.
    #[arg(long)]
    pub build_macos: bool,

    /// Product name for packaged builds.
    #[arg(long = "build-product-name", value_name = "NAME")]
    pub product_name: Option<String>,

    /// Icon for the packaged binary (.png on Linux/macOS, .ico on Windows).
    #[arg(long = "build-icon", value_name = "PATH")]
    pub icon_path: Option<PathBuf>,

    /// Extra data directory for packaged builds, as source=dest.
    #[arg(long = "build-data-dir", value_name = "SRC=DEST")]
    pub data_dirs: Vec<String>,

    /// Extra data file for packaged builds, as source=dest.
    #[arg(long = "build-data-file", value_name = "SRC=DEST")]
    pub data_files: Vec<String>,
}

#[derive(Debug, Clone, Copy)]
enum BuildTarget {
    Linux,
    Windows,
    MacOs,
}

pub fn run(cli: Cli) -> Result<()> {
    let package = cli
        .package
        .canonicalize()
        .with_context(|| format!("package path {} does not exist", cli.package.display()))?;
    let app = AppInfo::new("PyQt-Forge", &package)?;
    let paths = PathSet::resolve(&app);

    let mut acted = false;
    if cli.compile_ui {
        acted = true;
        compile_ui(&package)?;
    }
    if cli.compile_icons {
        acted = true;
        compile_icons(&package)?;
    }
    if cli.update_langs {
        acted = true;
        update_langs(&package, &cli.lupdate_files)?;
    }
    if cli.compile_langs {
        acted = true;
        compile_langs(&package)?;
    }

    let targets = [
        (cli.build_linux, BuildTarget::Linux),
        (cli.build_windows, BuildTarget::Windows),
        (cli.build_macos, BuildTarget::MacOs),
    ];
    for (requested, target) in targets {
        if requested {
            acted = true;
            build(&package, &paths, target, &cli)?;
        }
    }

    if !acted {
        warn!("no actions requested; see --help for available flags");
    }
    Ok(())
}

fn compile_ui(package: &Path) -> Result<()> {
    let uic = find_executable(tools::UIC)?;
    let ui_files = fsutil::files_under_named_dirs(package, assets::UI_DIR, "ui")
        .with_context(|| format!("failed to scan {} for ui files", package.display()))?;
    if ui_files.is_empty() {
        warn!(package = %package.display(), "no .ui files found");
    }
    for ui_file in &ui_files {
        let stem = ui_file.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        let out = ui_file.with_file_name(format!("{stem}_ui.py"));
        let status = run_tool(
            &uic,
            &[
                ui_file.display().to_string(),
                "-o".to_string(),
                out.display().to_string(),
            ],
        )?;
        if !status.success() {
            bail!("ui compiler failed for {}", ui_file.display());
        }
        info!(input = %ui_file.display(), output = %out.display(), "compiled ui definition");
    }
    Ok(())
}

fn compile_icons(package: &Path) -> Result<()> {
    let rcc = find_executable(tools::RCC)?;
    let qrc = package.join(assets::ICONS_DIR).join(assets::ICONS_QRC);
    let out = package.join(assets::ICONS_DIR).join(assets::ICONS_RESOURCE);
    let status = run_tool(
        &rcc,
        &[
            "--generator".to_string(),
            "python".to_string(),
            qrc.display().to_string(),
            "-o".to_string(),
            out.display().to_string(),
        ],
    )?;
    if !status.success() {
        bail!("resource compiler failed for {}", qrc.display());
    }
    // The generator still emits PyQt5 imports; rewrite them for PyQt6.
    let text =
        fs::read_to_string(&out).with_context(|| format!("failed to read {}", out.display()))?;
    fs::write(&out, text.replace("PyQt5", "PyQt6"))
        .with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}

fn update_langs(package: &Path, extra_files: &[PathBuf]) -> Result<()> {
    let lupdate = find_executable(tools::LUPDATE)?;
    let ui_dir = package.join(assets::UI_DIR);
    for ts_file in ts_files(package)? {
        let mut args = vec!["-tr-function-alias".to_string(), "translate=tr".to_string()];
        args.extend(extra_files.iter().map(|file| file.display().to_string()));
        args.push(ui_dir.display().to_string());
        args.push("-ts".to_string());
        args.push(ts_file.display().to_string());
        args.push("-no-obsolete".to_string());
        args.push("-source-language".to_string());
        args.push("en_US".to_string());
        let status = run_tool(&lupdate, &args)?;
        if !status.success() {
            bail!("translation update failed for {}", ts_file.display());
        }
    }
    Ok(())
}

fn compile_langs(package: &Path) -> Result<()> {
    let lrelease = find_executable(tools::LRELEASE)?;
    for ts_file in ts_files(package)? {
        let status = run_tool(&lrelease, &[ts_file.display().to_string()])?;
        if !status.success() {
            bail!("translation compile failed for {}", ts_file.display());
        }
    }
    Ok(())
}

fn ts_files(package: &Path) -> Result<Vec<PathBuf>> {
    fsutil::files_under_named_dirs(package, assets::LANGS_DIR, "ts")
        .with_context(|| format!("failed to scan {} for translation files", package.display()))
}

fn build(package: &Path, paths: &PathSet, target: BuildTarget, cli: &Cli) -> Result<()> {
    let packager = find_executable(tools::PACKAGER)?;
    let mut args = base_packager_args(package, paths)?;
    if let Some(name) = &cli.product_name {
        args.push(format!("--product-name={name}"));
    }
    for dir in &cli.data_dirs {
        args.push(format!("--include-data-dir={dir}"));
    }
    for file in &cli.data_files {
        args.push(format!("--include-data-file={file}"));
    }
    match target {
        BuildTarget::Linux => {
            if let Some(icon) = &cli.icon_path {
                args.push(format!("--linux-icon={}", icon.display()));
            }
        }
        BuildTarget::Windows => {
            args.push("--windows-console-mode=attach".to_string());
            if let Some(icon) = &cli.icon_path {
                args.push(format!("--windows-icon-from-ico={}", icon.display()));
            }
        }
        BuildTarget::MacOs => {
            if let Some(name) = &cli.product_name {
                args.push(format!("--macos-app-name={name}"));
            }
            if let Some(icon) = &cli.icon_path {
                args.push(format!("--macos-app-icon={}", icon.display()));
            }
        }
    }
    let status = run_tool(&packager, &args)?;
    if !status.success() {
        bail!("packager failed for {target:?} build");
    }
    Ok(())
}

fn base_packager_args(package: &Path, paths: &PathSet) -> Result<Vec<String>> {
    let package_name = package
        .file_name()
        .and_then(|name| name.to_str())
        .context("package path has no usable directory name")?;
    let mut args = vec![
        "--standalone".to_string(),
        "--onefile".to_string(),
        "--python-flag=no_asserts".to_string(),
        "--python-flag=no_docstrings".to_string(),
        "--python-flag=-m".to_string(),
        format!("--main={package_name}"),
        "--prefer-source-code".to_string(),
        "--output-dir=build/".to_string(),
        "--enable-plugin=pyqt6".to_string(),
    ];

    let ui_dir = package.join(assets::UI_DIR);
    let asset_dirs: [(&Path, &str); 5] = [
        (&paths.styles_dir, assets::STYLES_DIR),
        (&paths.icons_dir, assets::ICONS_DIR),
        (&paths.langs_dir, assets::LANGS_DIR),
        (&ui_dir, assets::UI_DIR),
        (&paths.licenses_dir, assets::LICENSES_DIR),
    ];
    for (dir, dest) in asset_dirs {
        if dir.exists() {
            args.push(format!("--include-data-dir={}={}", dir.display(), dest));
        }
    }

    if paths.version_file.exists() {
        let version = AppVersion::load(paths)?;
        args.push(format!(
            "--include-data-file={}={}",
            paths.version_file.display(),
            assets::VERSION_FILE
        ));
        args.push(format!("--product-version={version}"));
        args.push(format!("--file-version={version}"));
    }
    Ok(args)
}
