//! The set of file extensions recognised as project files.

use std::fmt::{Display, Formatter, Result};

use crate::hip::HipFileError;

/// Extensions recognised when no other set is configured.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["hip", "hipnc"];

/// An ordered, de-duplicated set of project file extensions.
///
/// Entries are stored without their leading dot and are matched
/// case-sensitively: `hip` does not match `HIP`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
    /// Build a set from user-supplied extensions.
    ///
    /// Surrounding whitespace and one leading `.` are stripped from each
    /// entry and blank entries are dropped. When nothing usable remains, the
    /// default set is returned.
    ///
    /// # Errors
    ///
    /// Returns [`HipFileError::InvalidExtension`] for an entry that still
    /// contains `.`, `,` or whitespace. The parser takes the extension after
    /// the last dot of a single list entry, so such an entry could never match.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hipver::config::ExtensionSet;
    /// let set = ExtensionSet::new([".hip", "hiplc", ""]).unwrap();
    /// assert!(set.contains("hip"));
    /// assert!(set.contains("hiplc"));
    /// assert!(ExtensionSet::new(["bgeo.sc"]).is_err());
    /// ```
    pub fn new<I, S>(extensions: I) -> std::result::Result<Self, HipFileError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();

        for ext in extensions {
            let ext = ext.as_ref().trim();
            let ext = ext.strip_prefix('.').unwrap_or(ext);

            if ext.is_empty() || normalized.iter().any(|e| e == ext) {
                continue;
            }

            if ext.contains(['.', ',']) || ext.contains(char::is_whitespace) {
                return Err(HipFileError::InvalidExtension {
                    extension: ext.to_string(),
                });
            }

            normalized.push(ext.to_string());
        }

        if normalized.is_empty() {
            return Ok(Self::default());
        }

        Ok(Self(normalized))
    }

    /// Check whether `extension` (without dot) is a project file extension.
    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.0.iter().any(|e| e == extension)
    }

    /// The recognised extensions, in configuration order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self(DEFAULT_EXTENSIONS.iter().map(ToString::to_string).collect())
    }
}

impl Display for ExtensionSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0.join(", "))
    }
}
