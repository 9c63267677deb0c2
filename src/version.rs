//! Application version
//!
//! Read from the package's `version.txt`: a single line of dotted integers.

use std::fmt;
use std::fs;
use std::str::FromStr;

use crate::error::Error;
use crate::paths::PathSet;

/// Dotted integer version, e.g. `1.4.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppVersion {
    raw: String,
    parts: Vec<u32>,
}

impl AppVersion {
    /// Read and parse `version.txt` from the package root.
    pub fn load(paths: &PathSet) -> Result<Self, Error> {
        let raw = fs::read_to_string(&paths.version_file).map_err(|source| Error::Read {
            path: paths.version_file.clone(),
            source,
        })?;
        raw.trim().parse()
    }

    /// Numeric components, most significant first.
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for AppVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = s
            .split('.')
            .map(str::parse)
            .collect::<Result<Vec<u32>, _>>()
            .map_err(|_| Error::Version { raw: s.to_string() })?;
        Ok(Self {
            raw: s.to_string(),
            parts,
        })
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_integers() {
        let version: AppVersion = "1.4.0".parse().unwrap();
        assert_eq!(version.parts(), &[1, 4, 0]);
        assert_eq!(version.as_str(), "1.4.0");
        assert_eq!(version.to_string(), "1.4.0");
    }

    #[test]
    fn test_parse_single_component() {
        let version: AppVersion = "7".parse().unwrap();
        assert_eq!(version.parts(), &[7]);
    }

    #[test]
    fn test_reject_non_numeric_component() {
        let err = "1.x.0".parse::<AppVersion>().unwrap_err();
        assert!(matches!(err, Error::Version { .. }));
    }

    #[test]
    fn test_reject_empty_string() {
        assert!("".parse::<AppVersion>().is_err());
    }

    #[test]
    fn test_reject_trailing_dot() {
        assert!("1.2.".parse::<AppVersion>().is_err());
    }
}
