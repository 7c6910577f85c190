//! Structured JSON output for scripting and piping.
//!
//! When the `--json` flag is passed, these structures are serialized to
//! stdout as a single JSON object, replacing all human-readable output.

use serde::Serialize;

use crate::hip::{HipFile, ParseReport, RejectedCandidate};
use crate::scanner::ScannedHipFile;

/// Output of `first`.
#[derive(Debug, Serialize)]
pub struct JsonFirst<'a> {
    /// The first project file of the list
    pub file: &'a HipFile,
}

/// Output of `all`.
#[derive(Debug, Serialize)]
pub struct JsonAll<'a> {
    /// Number of parsed files
    pub count: usize,

    /// Parsed files in input order
    pub files: &'a [HipFile],

    /// Candidates with a project extension but a malformed version
    pub rejected: &'a [RejectedCandidate],
}

impl<'a> JsonAll<'a> {
    /// Build the output from a parse report.
    #[must_use]
    pub fn from_report(report: &'a ParseReport) -> Self {
        Self {
            count: report.files.len(),
            files: report.files.as_slice(),
            rejected: report.rejected.as_slice(),
        }
    }
}

/// Output of `bump`.
#[derive(Debug, Serialize)]
pub struct JsonBump<'a> {
    /// The project file as found in the list
    pub current: &'a HipFile,

    /// The same file at the next version
    pub next: &'a HipFile,

    /// The new version number
    pub version: u32,
}

/// Output of `compare`.
#[derive(Debug, Serialize)]
pub struct JsonCompare<'a> {
    /// Whether both names render identically
    #[serde(rename = "match")]
    pub matches: bool,

    /// Left-hand file
    pub left: &'a HipFile,

    /// Right-hand file
    pub right: &'a HipFile,
}

/// Output of `scan`.
#[derive(Debug, Serialize)]
pub struct JsonScan<'a> {
    /// Number of files listed
    pub count: usize,

    /// Files found on disk, after sorting and filtering
    pub files: Vec<JsonScanEntry<'a>>,
}

/// A single file in the `scan` output.
#[derive(Debug, Serialize)]
pub struct JsonScanEntry<'a> {
    /// Full path of the file
    pub path: String,

    /// Parsed file name
    #[serde(flatten)]
    pub hip: &'a HipFile,
}

impl<'a> JsonScan<'a> {
    /// Build the output from scan results.
    #[must_use]
    pub fn from_scanned(files: &'a [ScannedHipFile]) -> Self {
        Self {
            count: files.len(),
            files: files
                .iter()
                .map(|f| JsonScanEntry {
                    path: f.path.display().to_string(),
                    hip: &f.hip,
                })
                .collect(),
        }
    }
}
