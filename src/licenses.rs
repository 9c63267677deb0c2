//! License metadata discovery
//!
//! Scans `licenses/*.json` descriptors and loads the referenced content
//! files for display.

use serde::Deserialize;
use std::fs;

use crate::error::Error;
use crate::fsutil::sorted_entries;
use crate::paths::PathSet;

/// One third-party license ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct License {
    pub name: String,
    pub content: String,
    pub link: String,
}

/// On-disk descriptor: `{"name": ..., "content_file": ..., "link": ...}`.
#[derive(Debug, Deserialize)]
struct LicenseMeta {
    name: String,
    content_file: String,
    #[serde(default)]
    link: String,
}

/// Find all licenses in the licenses directory, sorted by name ascending.
///
/// A descriptor missing `name` or `content_file` aborts the scan: that is a
/// packaging defect, not a runtime condition to tolerate.
pub fn find_licenses(paths: &PathSet) -> Result<Vec<License>, Error> {
    let mut licenses = Vec::new();
    for item in sorted_entries(&paths.licenses_dir)? {
        if !item.is_file() || item.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let text = fs::read_to_string(&item).map_err(|source| Error::Read {
            path: item.clone(),
            source,
        })?;
        let meta: LicenseMeta = serde_json::from_str(&text).map_err(|source| Error::LicenseMeta {
            path: item.clone(),
            source,
        })?;
        let content_path = paths.licenses_dir.join(&meta.content_file);
        let content = fs::read_to_string(&content_path).map_err(|source| Error::Read {
            path: content_path,
            source,
        })?;
        licenses.push(License {
            name: meta.name,
            content,
            link: meta.link,
        });
    }
    licenses.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(licenses)
}
