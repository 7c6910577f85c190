//! Directory scanning for project files.
//!
//! This module walks directory trees and runs every file name through the
//! project file parser. File names are parsed in parallel; errors are
//! collected and only printed in verbose mode.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::ScanOptions,
    hip::{HipFile, HipFileParser},
};

/// Directory names that never contain working project files.
///
/// Houdini writes autosaves and numbered backups into `backup/`.
const EXCLUDED_DIRS: [&str; 1] = ["backup"];

/// A project file found on disk.
#[derive(Clone, Debug, Serialize)]
pub struct ScannedHipFile {
    /// Full path to the file
    pub path: PathBuf,

    /// Parsed file name
    pub hip: HipFile,
}

impl ScannedHipFile {
    /// Directory containing the file.
    #[must_use]
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Directory scanner for project files.
#[derive(Debug)]
pub struct Scanner {
    /// Configuration options for scanning behavior
    scan_options: ScanOptions,

    /// Parser deciding which file names are project files
    parser: HipFileParser,

    /// When `true`, suppresses progress spinner output (used by `--json` mode).
    quiet: bool,
}

impl Scanner {
    /// Create a new scanner with the specified options.
    #[must_use]
    pub const fn new(scan_options: ScanOptions, parser: HipFileParser) -> Self {
        Self {
            scan_options,
            parser,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Scan a directory tree for project files.
    ///
    /// Results come back in walk order (entries within a directory sorted by
    /// file name), which keeps the output stable between runs.
    ///
    /// Unreadable entries and files with a recognised extension but a
    /// malformed version are skipped; in verbose mode they are printed to
    /// stderr once the scan completes.
    pub fn scan_directory(&self, root: &Path) -> Vec<ScannedHipFile> {
        let errors = Arc::new(Mutex::new(Vec::<String>::new()));
        let progress = self.progress_bar();

        let mut walker = WalkDir::new(root).sort_by_file_name();
        if let Some(depth) = self.scan_options.max_depth {
            walker = walker.max_depth(depth);
        }

        let entries: Vec<DirEntry> = walker
            .into_iter()
            .filter_entry(|entry| self.should_scan_entry(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    self.record_error(&errors, format!("Error walking directory: {e}"));
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .collect();

        let found_count = AtomicUsize::new(0);

        let found: Vec<ScannedHipFile> = entries
            .into_par_iter()
            .filter_map(|entry| {
                let result = self.detect_hip_file(&entry, &errors);
                if result.is_some() {
                    let n = found_count.fetch_add(1, Ordering::Relaxed) + 1;
                    progress.set_message(format!("Scanning... {n} found"));
                }
                result
            })
            .collect();

        progress.finish_with_message("✅ Directory scan complete");

        if self.scan_options.verbose
            && let Ok(errors) = errors.lock()
        {
            for error in errors.iter() {
                eprintln!("{}", error.red());
            }
        }

        found
    }

    /// Scan several roots and concatenate the results in root order.
    ///
    /// Nested or repeated roots would reach the same file more than once;
    /// each file is reported only the first time it is seen. Paths are
    /// compared canonicalised when possible, as given otherwise.
    pub fn scan_directories(&self, roots: &[PathBuf]) -> Vec<ScannedHipFile> {
        let mut seen = HashSet::new();

        roots
            .iter()
            .flat_map(|root| self.scan_directory(root))
            .filter(|found| {
                let key = fs::canonicalize(&found.path).unwrap_or_else(|_| found.path.clone());
                seen.insert(key)
            })
            .collect()
    }

    fn progress_bar(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Scanning...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Parse a file entry's name as a project file.
    fn detect_hip_file(
        &self,
        entry: &DirEntry,
        errors: &Arc<Mutex<Vec<String>>>,
    ) -> Option<ScannedHipFile> {
        let Some(name) = entry.file_name().to_str() else {
            self.record_error(
                errors,
                format!("Skipping non UTF-8 file name: {}", entry.path().display()),
            );
            return None;
        };

        match self.parser.parse_name(name)? {
            Ok(hip) => Some(ScannedHipFile {
                path: entry.path().to_path_buf(),
                hip,
            }),
            Err(e) => {
                self.record_error(errors, format!("{}: {e}", entry.path().display()));
                None
            }
        }
    }

    fn record_error(&self, errors: &Arc<Mutex<Vec<String>>>, message: String) {
        if self.scan_options.verbose
            && let Ok(mut errors) = errors.lock()
        {
            errors.push(message);
        }
    }

    /// Determine if a directory entry should be walked into.
    ///
    /// The root itself is always scanned. Below it, hidden entries, Houdini
    /// `backup/` directories and anything named in the skip list are left out.
    fn should_scan_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return true;
        }

        let Some(name) = entry.file_name().to_str() else {
            return true;
        };

        if name.starts_with('.') {
            return false;
        }

        if entry.file_type().is_dir() && EXCLUDED_DIRS.contains(&name) {
            return false;
        }

        !self.is_in_skip_list(name)
    }

    fn is_in_skip_list(&self, name: &str) -> bool {
        self.scan_options
            .skip
            .iter()
            .any(|skip| skip.to_string_lossy() == name)
    }
}
