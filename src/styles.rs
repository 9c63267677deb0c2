//! Stylesheet discovery
//!
//! Turns the fixed `styles/<group>/<theme>/stylesheet.qss` layout into named
//! records grouped by top-level category.

use std::collections::BTreeMap;
use std::fs;

use crate::constants::assets;
use crate::error::Error;
use crate::fsutil::{file_name_string, sorted_entries};
use crate::paths::PathSet;

/// A named stylesheet ready to hand to the widget toolkit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    pub name: String,
    pub stylesheet: String,
}

/// Recursively find all styles in the styles directory.
///
/// Groups and themes are visited in name order; plain files and entries with
/// `cache` in their name are skipped. The display name is the title-cased
/// group followed by the title-cased theme with dashes turned into spaces.
pub fn find_styles(paths: &PathSet) -> Result<BTreeMap<String, Vec<Style>>, Error> {
    let mut styles = BTreeMap::new();
    for group in sorted_entries(&paths.styles_dir)? {
        if !group.is_dir() {
            continue;
        }
        let group_name = file_name_string(&group);
        let mut group_styles = Vec::new();
        for theme in sorted_entries(&group)? {
            let theme_name = file_name_string(&theme);
            if theme.is_file() || theme_name.contains(assets::CACHE_MARKER) {
                continue;
            }
            let sheet_path = theme.join(assets::STYLESHEET_FILENAME);
            let stylesheet = fs::read_to_string(&sheet_path).map_err(|source| Error::Read {
                path: sheet_path,
                source,
            })?;
            group_styles.push(Style {
                name: format!(
                    "{} {}",
                    title_case(&group_name),
                    title_case(&theme_name.replace('-', " "))
                ),
                stylesheet,
            });
        }
        styles.insert(group_name, group_styles);
    }
    Ok(styles)
}

/// Uppercase the first letter of every word, lowercase the rest.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("material"), "Material");
    }

    #[test]
    fn test_title_case_multiple_words() {
        assert_eq!(title_case("dark blue"), "Dark Blue");
    }

    #[test]
    fn test_title_case_normalizes_upper() {
        assert_eq!(title_case("DARK blue"), "Dark Blue");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
