//! Errors produced while parsing and versioning project files.

use thiserror::Error;

/// Failure modes of the project file parser and of version bumps.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HipFileError {
    /// No candidate in the list carried a recognised project extension.
    #[error("No houdini project found in this file list: {text}")]
    NotFound { text: String },

    /// The trailing `_` token of a matched stem is not a valid version number.
    #[error("Malformed version {token:?} in project file name {candidate:?}")]
    MalformedVersion { candidate: String, token: String },

    /// A configured extension contains `.`, `,` or whitespace and could never match.
    #[error("Invalid project file extension {extension:?}: extensions cannot contain '.', ',' or whitespace")]
    InvalidExtension { extension: String },

    /// The version cannot be incremented any further.
    #[error("Version of {name} cannot be incremented past {max}", max = u32::MAX)]
    VersionOverflow { name: String },
}
