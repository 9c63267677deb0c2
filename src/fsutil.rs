//! Small filesystem helpers shared by the asset locators and the CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Directory entries sorted by name, for stable scan order across platforms.
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let read = fs::read_dir(dir).map_err(|source| Error::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut paths = Vec::new();
    for entry in read {
        let entry = entry.map_err(|source| Error::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

/// File name as an owned string, lossy for non-UTF-8 names.
pub(crate) fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Files with extension `ext` directly under any directory named `dir_name`
/// anywhere below `root` (the `**/<dir_name>/*.<ext>` pattern), sorted.
pub(crate) fn files_under_named_dirs(
    root: &Path,
    dir_name: &str,
    ext: &str,
) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    collect(root, dir_name, ext, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect(dir: &Path, dir_name: &str, ext: &str, found: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_dir() {
            continue;
        }
        if file_name_string(&path) == dir_name {
            for child in fs::read_dir(&path)? {
                let child = child?.path();
                if child.is_file() && child.extension().and_then(|e| e.to_str()) == Some(ext) {
                    found.push(child);
                }
            }
        }
        collect(&path, dir_name, ext, found)?;
    }
    Ok(())
}
