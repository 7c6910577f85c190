//! Project file name parsing.
//!
//! The parser takes a comma-separated list of filenames and extracts a
//! [`HipFile`] record from every entry whose extension is a recognised
//! project extension.
//!
//! # Candidate rules
//!
//! 1. The list is split on `,`; each candidate is trimmed and empty
//!    candidates are ignored.
//! 2. The extension is the text after the *last* `.`. Everything before it
//!    is the stem, inner dots included: `a.b_003.hip` has stem `a.b_003`.
//!    A candidate without a `.` has no extension.
//! 3. Candidates whose extension is not recognised are skipped silently.
//! 4. The stem is split on its *last* `_`. The trailing token must be a
//!    non-empty run of ASCII digits that fits in a `u32`; the prefix is the
//!    base. A stem without any `_` is unversioned: the whole stem is the base
//!    and the version is [`DEFAULT_VERSION`].
//!
//! Unversioned names are deliberately treated as the first version of a file
//! named by the whole stem: `b.hip` parses to base `b` at version 1 and
//! renders as `b_001.hip`, rather than to an empty base at version 0. A bare
//! `.hip` follows the same rule and parses to an empty base at version 1.

use serde::Serialize;

use super::{DEFAULT_VERSION, HipFile, HipFileError};
use crate::config::ExtensionSet;

/// Separator between filenames in a list.
pub const LIST_SEPARATOR: char = ',';

/// Separator between the stem and the extension.
const EXTENSION_SEPARATOR: char = '.';

/// Separator between the base and the version.
const VERSION_SEPARATOR: char = '_';

/// A candidate with a recognised extension that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RejectedCandidate {
    /// The candidate as it appeared in the list (trimmed)
    pub candidate: String,

    /// Why it was rejected
    pub reason: String,
}

/// Full outcome of parsing a list: the records plus the rejected candidates.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ParseReport {
    /// Parsed project files, in input order
    pub files: Vec<HipFile>,

    /// Candidates with a recognised extension but a malformed version
    pub rejected: Vec<RejectedCandidate>,
}

/// Parser for versioned project file names.
#[derive(Clone, Debug, Default)]
pub struct HipFileParser {
    extensions: ExtensionSet,
}

impl HipFileParser {
    /// Create a parser recognising the given extensions.
    #[must_use]
    pub const fn new(extensions: ExtensionSet) -> Self {
        Self { extensions }
    }

    /// The extensions this parser treats as project files.
    #[must_use]
    pub const fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    /// Parse a single filename.
    ///
    /// # Returns
    ///
    /// - `None` if the name does not carry a recognised extension
    /// - `Some(Ok(HipFile))` for a well-formed project file name
    /// - `Some(Err(HipFileError::MalformedVersion))` if the version token is invalid
    ///
    /// # Examples
    ///
    /// ```
    /// # use hipver::hip::HipFileParser;
    /// let parser = HipFileParser::default();
    /// let hip = parser.parse_name("shot01_007.hip").unwrap().unwrap();
    /// assert_eq!(hip.version, 7);
    /// assert!(parser.parse_name("notes.txt").is_none());
    /// ```
    #[must_use]
    pub fn parse_name(&self, candidate: &str) -> Option<Result<HipFile, HipFileError>> {
        let (stem, extension) = candidate.rsplit_once(EXTENSION_SEPARATOR)?;

        if !self.extensions.contains(extension) {
            return None;
        }

        let Some((base, token)) = stem.rsplit_once(VERSION_SEPARATOR) else {
            return Some(Ok(HipFile::with_version(stem, extension, DEFAULT_VERSION)));
        };

        Some(
            parse_version(token)
                .map(|version| HipFile::with_version(base, extension, version))
                .ok_or_else(|| HipFileError::MalformedVersion {
                    candidate: candidate.to_string(),
                    token: token.to_string(),
                }),
        )
    }

    /// Return the first project file in a comma-separated list.
    ///
    /// The first candidate with a recognised extension decides the outcome:
    /// later candidates are not consulted, even if that first one has a
    /// malformed version.
    ///
    /// # Errors
    ///
    /// - [`HipFileError::NotFound`] if no candidate has a recognised extension
    /// - [`HipFileError::MalformedVersion`] if the first match has an invalid version
    pub fn parse_first(&self, text: &str) -> Result<HipFile, HipFileError> {
        candidates(text)
            .find_map(|candidate| self.parse_name(candidate))
            .unwrap_or_else(|| {
                Err(HipFileError::NotFound {
                    text: text.to_string(),
                })
            })
    }

    /// Return every project file in a comma-separated list, in input order.
    ///
    /// Never fails: an empty vector means nothing matched, and candidates
    /// with malformed versions are left out. Use [`Self::parse_report`] to
    /// see those.
    #[must_use]
    pub fn parse_all(&self, text: &str) -> Vec<HipFile> {
        self.parse_report(text).files
    }

    /// Parse every candidate, keeping track of the rejected ones.
    #[must_use]
    pub fn parse_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();

        for candidate in candidates(text) {
            match self.parse_name(candidate) {
                Some(Ok(hip)) => report.files.push(hip),
                Some(Err(err)) => report.rejected.push(RejectedCandidate {
                    candidate: candidate.to_string(),
                    reason: err.to_string(),
                }),
                None => {}
            }
        }

        report
    }
}

/// [`HipFileParser::parse_first`] with the default extensions.
///
/// # Errors
///
/// See [`HipFileParser::parse_first`].
pub fn parse_first(text: &str) -> Result<HipFile, HipFileError> {
    HipFileParser::default().parse_first(text)
}

/// [`HipFileParser::parse_all`] with the default extensions.
#[must_use]
pub fn parse_all(text: &str) -> Vec<HipFile> {
    HipFileParser::default().parse_all(text)
}

/// Split a list into trimmed, non-empty candidates.
fn candidates(text: &str) -> impl Iterator<Item = &str> {
    text.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
}

/// Parse a version token made only of ASCII digits.
fn parse_version(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
