//! # hipver
//!
//! Parse, compare and bump versioned Houdini project file names.
//!
//! Project files follow the `{base}_{version:03}.{ext}` convention, for
//! example `shot01_007.hip`. This crate extracts the base, version and
//! extension from comma-separated filename lists, renders records back to
//! names, moves them to the next version, and finds them on disk.
//!
//! ```
//! use hipver::hip::{parse_all, parse_first};
//!
//! let hip = parse_first("notes.txt,shot01_007.hip").unwrap();
//! assert_eq!(hip.full_name(), "shot01_007.hip");
//!
//! let all = parse_all("a.txt,b.hip,c.hipnc");
//! assert_eq!(all.len(), 2);
//! ```

pub mod config;
pub mod filtering;
pub mod hip;
pub mod output;
pub mod scanner;

pub use config::{ExtensionSet, FileConfig, ListingOptions, ScanOptions, SortCriteria};
pub use hip::{HipFile, HipFileError, HipFileParser, HipFiles};
