//! Core project file data structure.
//!
//! A project file name follows the `{base}_{version:03}.{extension}` convention,
//! e.g. `shot01_007.hip`. This module defines the parsed record and the
//! operations that render it back and move it to the next version.

use std::fmt::{Display, Formatter, Result};

use serde::{Serialize, Serializer, ser::SerializeStruct};

use super::HipFileError;

/// Version assigned when a record is built without an explicit version.
pub const DEFAULT_VERSION: u32 = 1;

/// A parsed, versioned project file name.
///
/// Records are normally produced by the parser from a raw filename. They are
/// plain values: bumping the version either mutates the record in place
/// ([`HipFile::inc_version`]) or produces a bumped copy
/// ([`HipFile::next_version`]).
///
/// Equality is defined on the rendered name, so two records are equal exactly
/// when [`HipFile::full_name`] returns the same text for both. Extensions are
/// compared as written: `shot_001.hip` and `shot_001.HIP` are different files.
#[derive(Clone, Debug)]
pub struct HipFile {
    /// Name prefix before the trailing `_version` segment
    ///
    /// May itself contain `_` or `.` characters; only the last `_` token of
    /// the stem is treated as the version.
    pub base: String,

    /// File suffix without the leading dot (`hip`, `hipnc`, ...)
    pub extension: String,

    /// Version number, rendered zero-padded to three digits
    pub version: u32,
}

impl HipFile {
    /// Create a record at the default version ([`DEFAULT_VERSION`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use hipver::hip::HipFile;
    /// let hip = HipFile::new("shot01", "hip");
    /// assert_eq!(hip.full_name(), "shot01_001.hip");
    /// ```
    #[must_use]
    pub fn new(base: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::with_version(base, extension, DEFAULT_VERSION)
    }

    /// Create a record with an explicit version.
    #[must_use]
    pub fn with_version(
        base: impl Into<String>,
        extension: impl Into<String>,
        version: u32,
    ) -> Self {
        Self {
            base: base.into(),
            extension: extension.into(),
            version,
        }
    }

    /// Render the record as `{base}_{version:03}.{extension}`.
    ///
    /// Versions above 999 are written in full, never truncated.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.to_string()
    }

    /// Increase the version by one and return the new version number.
    ///
    /// # Errors
    ///
    /// Returns [`HipFileError::VersionOverflow`] when the version is already
    /// `u32::MAX`. The record is left untouched in that case.
    pub fn inc_version(&mut self) -> std::result::Result<u32, HipFileError> {
        self.version = self
            .version
            .checked_add(1)
            .ok_or_else(|| HipFileError::VersionOverflow {
                name: self.full_name(),
            })?;

        Ok(self.version)
    }

    /// Return a copy bumped to the next version, along with that version number.
    ///
    /// # Errors
    ///
    /// Returns [`HipFileError::VersionOverflow`] when the version is already
    /// `u32::MAX`.
    pub fn next_version(&self) -> std::result::Result<(Self, u32), HipFileError> {
        let mut next = self.clone();
        let version = next.inc_version()?;
        Ok((next, version))
    }
}

impl Display for HipFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}_{:03}.{}", self.base, self.version, self.extension)
    }
}

impl PartialEq for HipFile {
    fn eq(&self, other: &Self) -> bool {
        self.full_name() == other.full_name()
    }
}

impl Eq for HipFile {}

impl Serialize for HipFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HipFile", 4)?;
        state.serialize_field("base", &self.base)?;
        state.serialize_field("extension", &self.extension)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("full_name", &self.full_name())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to create a test `HipFile`
    fn create_test_hip(base: &str, version: u32, extension: &str) -> HipFile {
        HipFile::with_version(base, extension, version)
    }

    #[test]
    fn test_new_defaults_to_version_one() {
        let hip = HipFile::new("shot01", "hip");

        assert_eq!(hip.base, "shot01");
        assert_eq!(hip.extension, "hip");
        assert_eq!(hip.version, DEFAULT_VERSION);
        assert_eq!(hip.version, 1);
    }

    #[test]
    fn test_full_name_pads_version() {
        let hip = create_test_hip("shot01", 7, "hip");
        assert_eq!(hip.full_name(), "shot01_007.hip");

        let hip = create_test_hip("fx_smoke", 42, "hipnc");
        assert_eq!(hip.full_name(), "fx_smoke_042.hipnc");

        let hip = create_test_hip("x", 0, "hip");
        assert_eq!(hip.full_name(), "x_000.hip");
    }

    #[test]
    fn test_full_name_does_not_truncate_large_versions() {
        let hip = create_test_hip("shot", 1234, "hip");
        assert_eq!(hip.full_name(), "shot_1234.hip");
    }

    #[test]
    fn test_display_matches_full_name() {
        let hip = create_test_hip("layout.v2", 3, "hipnc");
        assert_eq!(format!("{hip}"), hip.full_name());
        assert_eq!(format!("{hip}"), "layout.v2_003.hipnc");
    }

    #[test]
    fn test_inc_version_mutates_and_returns_new_version() {
        let mut hip = create_test_hip("x", 1, "hip");

        assert_eq!(hip.inc_version(), Ok(2));
        assert_eq!(hip.version, 2);
        assert_eq!(hip.full_name(), "x_002.hip");

        assert_eq!(hip.inc_version(), Ok(3));
        assert_eq!(hip.version, 3);
    }

    #[test]
    fn test_inc_version_overflow_leaves_record_unchanged() {
        let mut hip = create_test_hip("x", u32::MAX, "hip");

        let result = hip.inc_version();

        assert!(matches!(result, Err(HipFileError::VersionOverflow { .. })));
        assert_eq!(hip.version, u32::MAX);
    }

    #[test]
    fn test_next_version_leaves_original_untouched() {
        let hip = create_test_hip("x", 1, "hip");

        let (next, version) = hip.next_version().unwrap();

        assert_eq!(version, 2);
        assert_eq!(next.version, 2);
        assert_eq!(next.base, "x");
        assert_eq!(next.extension, "hip");
        assert_eq!(hip.version, 1);
    }

    #[test]
    fn test_equality_follows_rendered_name() {
        let a = create_test_hip("shot", 7, "hip");
        let b = create_test_hip("shot", 7, "hip");
        let other_version = create_test_hip("shot", 8, "hip");
        let other_case = create_test_hip("shot", 7, "HIP");
        let other_base = create_test_hip("Shot", 7, "hip");

        assert_eq!(a, b);
        assert_ne!(a, other_version);
        assert_ne!(a, other_case);
        assert_ne!(a, other_base);

        for (p, q) in [(&a, &b), (&a, &other_version), (&a, &other_case)] {
            assert_eq!(p == q, p.full_name() == q.full_name());
        }
    }

    #[test]
    fn test_serialize_includes_full_name() {
        let hip = create_test_hip("shot01", 7, "hip");

        let value = serde_json::to_value(&hip).unwrap();

        assert_eq!(value["base"], "shot01");
        assert_eq!(value["extension"], "hip");
        assert_eq!(value["version"], 7);
        assert_eq!(value["full_name"], "shot01_007.hip");
    }

    #[test]
    fn test_clone() {
        let original = create_test_hip("orig", 5, "hipnc");
        let cloned = original.clone();

        assert_eq!(original.base, cloned.base);
        assert_eq!(original.extension, cloned.extension);
        assert_eq!(original.version, cloned.version);
    }
}
