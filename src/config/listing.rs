//! Listing configuration for scan results.
//!
//! This module defines the sorting criteria and the options that decide how
//! scanned project files are ordered and reduced before display.

use clap::ValueEnum;

/// Enumeration of supported sorting criteria for scan output.
///
/// Each variant has a natural default direction:
/// - `Name`: alphabetical by base, then extension, then version
/// - `Version`: highest version first
/// - `Path`: lexical path order
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum SortCriteria {
    /// Sort by base name (case-insensitive), extension and version
    Name,

    /// Sort by version number (highest first by default)
    Version,

    /// Sort by full file path
    Path,
}

/// Configuration for how scan results are listed.
#[derive(Clone, Debug, Default)]
pub struct ListingOptions {
    /// The sorting criterion to apply, or `None` to preserve scan order
    pub criteria: Option<SortCriteria>,

    /// Whether to reverse the sort order
    pub reverse: bool,

    /// Whether to keep only the latest version of each file per directory
    pub latest: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_criteria_from_str() {
        assert_eq!(
            SortCriteria::from_str("name", true),
            Ok(SortCriteria::Name)
        );
        assert_eq!(
            SortCriteria::from_str("VERSION", true),
            Ok(SortCriteria::Version)
        );
        assert_eq!(
            SortCriteria::from_str("path", false),
            Ok(SortCriteria::Path)
        );
        assert!(SortCriteria::from_str("size", true).is_err());
    }

    #[test]
    fn test_listing_options_default() {
        let opts = ListingOptions::default();

        assert!(opts.criteria.is_none());
        assert!(!opts.reverse);
        assert!(!opts.latest);
    }
}
