//! Project file parsing and versioning.
//!
//! This module contains the data structures and logic for recognising
//! versioned project file names (`{base}_{version:03}.{ext}`), extracting
//! their parts, rendering them back, and moving them to the next version.
//!
//! ## Main Parts
//!
//! - [`HipFile`] - A parsed project file name
//! - [`HipFileParser`] - Extracts records from comma-separated filename lists
//! - [`HipFiles`] - A collection of parsed files with batch operations
//! - [`HipFileError`] - Parse and version-bump failures

pub mod error;
pub mod hip_file;
pub mod hip_files;
pub mod parser;

pub use error::HipFileError;
pub use hip_file::{DEFAULT_VERSION, HipFile};
pub use hip_files::HipFiles;
pub use parser::{HipFileParser, ParseReport, RejectedCandidate, parse_all, parse_first};
