//! Collection management for parsed project files.
//!
//! This module provides the `HipFiles` struct which wraps a list of parsed
//! project files and offers the operations the CLI needs on top of the raw
//! parser output: picking the latest version of each file and printing a
//! human-readable summary.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use colored::Colorize;

use super::HipFile;

/// An ordered collection of project files.
#[derive(Clone, Debug, Default)]
pub struct HipFiles(Vec<HipFile>);

impl From<Vec<HipFile>> for HipFiles {
    fn from(files: Vec<HipFile>) -> Self {
        Self(files)
    }
}

impl IntoIterator for HipFiles {
    type Item = HipFile;
    type IntoIter = std::vec::IntoIter<HipFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl HipFiles {
    /// Keep only the highest version of each `(base, extension)` pair.
    ///
    /// Entries are returned in the order their `(base, extension)` pair
    /// first appears in the collection.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hipver::hip::{HipFiles, parse_all};
    /// let files: HipFiles = parse_all("a_001.hip,a_003.hip,a_002.hip").into();
    /// assert_eq!(files.latest().as_slice()[0].version, 3);
    /// ```
    #[must_use]
    pub fn latest(&self) -> Self {
        let mut latest: Vec<HipFile> = Vec::new();
        let mut positions: HashMap<(&str, &str), usize> = HashMap::new();

        for hip in &self.0 {
            match positions.entry((hip.base.as_str(), hip.extension.as_str())) {
                Entry::Occupied(slot) => {
                    let existing = &mut latest[*slot.get()];
                    existing.version = existing.version.max(hip.version);
                }
                Entry::Vacant(slot) => {
                    slot.insert(latest.len());
                    latest.push(hip.clone());
                }
            }
        }

        Self(latest)
    }

    /// Borrow the files as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[HipFile] {
        &self.0
    }

    /// Consume the collection and return the underlying vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<HipFile> {
        self.0
    }

    /// Number of files in the collection.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Print every file with its parsed parts, followed by a count.
    pub fn print_summary(&self) {
        for hip in &self.0 {
            println!(
                "  {} {}",
                hip.full_name().bold(),
                format!(
                    "(base: \"{}\", version: {}, ext: {})",
                    hip.base, hip.version, hip.extension
                )
                .bright_black()
            );
        }

        println!(
            "\n{} {}",
            "📁 Project files:".bold(),
            self.0.len().to_string().bright_white()
        );
    }
}
