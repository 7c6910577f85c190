//! Scanning configuration for directory traversal.
//!
//! This module defines the options that control how directories are walked
//! when looking for project files on disk.

use std::path::PathBuf;

/// Configuration for directory scanning behavior.
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Whether to show verbose output including scan errors
    pub verbose: bool,

    /// Number of threads to use for scanning (0 = default)
    pub threads: usize,

    /// List of directory names to skip during scanning
    pub skip: Vec<PathBuf>,

    /// Maximum directory depth to scan (None = unlimited)
    pub max_depth: Option<usize>,
}
