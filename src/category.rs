//! Category registry.
//!
//! Maps the closed set of supported listing categories to the page they live
//! on and the label shown in the feed title. Adding a category means adding a
//! [`Category`] variant, its key, and its [`CategoryConfig`]; the pipeline does
//! not change.
//!
//! | Key | Label | Path |
//! |-----|-------|------|
//! | `tzgg` | 通知公告 (notices and announcements) | `tzgg/` |

use crate::error::FeedError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a category's listing lives and how it is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Path relative to the agency's listing base URL.
    pub relative_path: &'static str,
    /// Human-readable label appended to the feed title.
    pub label: &'static str,
}

const TZGG: CategoryConfig = CategoryConfig {
    relative_path: "tzgg/",
    label: "通知公告",
};

/// A supported listing category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// 通知公告: notices and announcements.
    Tzgg,
}

impl Category {
    /// Every supported category, in documentation order.
    pub const ALL: &'static [Category] = &[Category::Tzgg];

    /// The key callers use to select this category.
    pub fn key(self) -> &'static str {
        match self {
            Category::Tzgg => "tzgg",
        }
    }

    /// Registry entry for this category.
    ///
    /// # Returns
    ///
    /// The `'static` page path and label; every variant has exactly one.
    pub fn config(self) -> &'static CategoryConfig {
        match self {
            Category::Tzgg => &TZGG,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = FeedError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.key() == key)
            .ok_or_else(|| FeedError::InvalidCategory {
                key: key.to_string(),
                valid: valid_keys(),
            })
    }
}

/// Look up a caller-supplied key.
///
/// Pure; never touches the network. Unknown keys produce
/// [`FeedError::InvalidCategory`].
pub fn resolve(key: &str) -> Result<(Category, &'static CategoryConfig), FeedError> {
    let category: Category = key.parse()?;
    Ok((category, category.config()))
}

/// Comma-separated list of valid keys, for error messages.
pub fn valid_keys() -> String {
    Category::ALL
        .iter()
        .map(|category| category.key())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_tzgg() {
        let (category, config) = resolve("tzgg").unwrap();
        assert_eq!(category, Category::Tzgg);
        assert_eq!(config.relative_path, "tzgg/");
        assert_eq!(config.label, "通知公告");
    }

    #[test]
    fn test_resolve_unknown_key() {
        let err = resolve("bogus").unwrap_err();
        match err {
            FeedError::InvalidCategory { key, valid } => {
                assert_eq!(key, "bogus");
                assert_eq!(valid, "tzgg");
            }
            other => panic!("expected InvalidCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert!(resolve("TZGG").is_err());
        assert!(resolve("").is_err());
    }

    #[test]
    fn test_registry_has_no_duplicates() {
        let keys: HashSet<_> = Category::ALL.iter().map(|c| c.key()).collect();
        let paths: HashSet<_> = Category::ALL
            .iter()
            .map(|c| c.config().relative_path)
            .collect();
        assert_eq!(keys.len(), Category::ALL.len());
        assert_eq!(paths.len(), Category::ALL.len());
    }

    #[test]
    fn test_every_key_round_trips() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), *category);
            assert_eq!(category.to_string(), category.key());
        }
    }

    #[test]
    fn test_category_serializes_as_key() {
        let json = serde_json::to_string(&Category::Tzgg).unwrap();
        assert_eq!(json, "\"tzgg\"");
    }
}
