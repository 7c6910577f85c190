//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use hipver::config::file::{FileConfig, expand_tilde};
use hipver::config::{ExtensionSet, ListingOptions, ScanOptions, SortCriteria};
use hipver::hip::HipFileError;

/// Command-line arguments for the `scan` subcommand.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// One or more directories to search for project files
    ///
    /// Defaults to the `dirs` entry of the config file, then to the
    /// current directory.
    #[arg(num_args = 0..)]
    dirs: Vec<PathBuf>,

    /// Sort the listed files by the given criterion
    ///
    /// Supported values: name (base, extension, version), version (highest
    /// first), path (lexical). Use --reverse to flip the order.
    #[arg(long, value_enum)]
    sort: Option<SortCriteria>,

    /// Reverse the sort order
    #[arg(long)]
    reverse: bool,

    /// Only list the latest version of each file in each directory
    #[arg(short = 'l', long)]
    latest: bool,

    /// The number of threads to use for parsing file names
    ///
    /// A value of 0 uses the default number of threads (typically the number of CPU cores).
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Show access errors and malformed project file names found while scanning
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Directory names to skip during scanning
    ///
    /// Can be specified multiple times.
    #[arg(long, action = clap::ArgAction::Append)]
    skip: Vec<PathBuf>,

    /// Maximum directory depth to scan
    ///
    /// A value of 1 scans only the immediate children of each root directory.
    #[arg(long)]
    max_depth: Option<usize>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the first project file in a comma-separated list
    First {
        /// Comma-separated file names (read from stdin when omitted)
        list: Option<String>,
    },

    /// Print every project file in a comma-separated list
    All {
        /// Comma-separated file names (read from stdin when omitted)
        list: Option<String>,

        /// Also report names with a project extension but a malformed version
        #[arg(short = 'v', long)]
        verbose: bool,

        /// Only print the latest version of each file
        #[arg(short = 'l', long)]
        latest: bool,
    },

    /// Print the next version of the first project file in a list
    Bump {
        /// Comma-separated file names (read from stdin when omitted)
        list: Option<String>,
    },

    /// Check whether two file names describe the same project file version
    Compare {
        /// First file name
        left: String,

        /// Second file name
        right: String,
    },

    /// Find project files on disk
    Scan(ScanArgs),

    /// Inspect or initialise the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration (file values + defaults for unset keys)
    Show,
    /// Write a default config.toml if none exists yet
    Init,
    /// Print the path to the config file
    Path,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "hipver")]
#[command(about = "Parse, compare, bump and find versioned Houdini project files")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress spinner,
    /// warnings) is suppressed and a single JSON document is printed to stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Extension recognised as a project file (repeatable, comma-separated)
    ///
    /// Replaces the configured extension set for this run. A leading dot
    /// is accepted: `--ext .hiplc` and `--ext hiplc` are the same, and
    /// `--ext hip,hiplc` is the same as `--ext hip --ext hiplc`.
    #[arg(
        short = 'e',
        long = "ext",
        global = true,
        value_delimiter = ',',
        action = clap::ArgAction::Append
    )]
    extensions: Vec<String>,
}

impl Cli {
    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Resolve the recognised extensions.
    ///
    /// Priority: `--ext` arguments > config file `extensions` > defaults.
    ///
    /// # Errors
    ///
    /// Returns [`HipFileError::InvalidExtension`] for an extension that
    /// could never match a file name.
    pub fn extension_set(&self, config: &FileConfig) -> Result<ExtensionSet, HipFileError> {
        if self.extensions.is_empty() {
            config.extension_set()
        } else {
            ExtensionSet::new(&self.extensions)
        }
    }
}

impl ScanArgs {
    /// Resolve the directories to scan.
    ///
    /// Priority: CLI arguments > config file `dirs` > current directory (`.`).
    /// Tilde expansion is applied to paths originating from the config file.
    #[must_use]
    pub fn directories(&self, config: &FileConfig) -> Vec<PathBuf> {
        if !self.dirs.is_empty() {
            return self.dirs.clone();
        }

        if let Some(ref dirs) = config.dirs
            && !dirs.is_empty()
        {
            return dirs.iter().map(|d| expand_tilde(d)).collect();
        }

        vec![PathBuf::from(".")]
    }

    /// Extract scanning options from CLI args and config file.
    ///
    /// - **threads**: CLI > config > `0` (default)
    /// - **verbose**: CLI flag `||` config value `||` `false`
    /// - **skip**: merged from both sources (config values first, then CLI)
    /// - **`max_depth`**: CLI > config > unlimited
    #[must_use]
    pub fn scan_options(&self, config: &FileConfig) -> ScanOptions {
        let mut skip = config.scanning.skip.clone().unwrap_or_default();
        skip.extend(self.skip.clone());

        ScanOptions {
            verbose: self.verbose || config.scanning.verbose.unwrap_or(false),
            threads: self.threads.or(config.scanning.threads).unwrap_or(0),
            skip,
            max_depth: self.max_depth.or(config.scanning.max_depth),
        }
    }

    /// Extract listing options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (scan order, all versions).
    #[must_use]
    pub fn listing_options(&self, config: &FileConfig) -> ListingOptions {
        ListingOptions {
            criteria: self.sort.or_else(|| {
                config
                    .listing
                    .sort
                    .as_ref()
                    .and_then(|s| SortCriteria::from_str(s, true).ok())
            }),
            reverse: self.reverse || config.listing.reverse.unwrap_or(false),
            latest: self.latest || config.listing.latest.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hipver::config::file::{FileListingConfig, FileScanConfig};

    fn scan_args(args: &[&str]) -> ScanArgs {
        let mut argv = vec!["hipver", "scan"];
        argv.extend_from_slice(args);

        match Cli::parse_from(argv).command {
            Commands::Scan(scan) => scan,
            other => panic!("expected scan command, got {other:?}"),
        }
    }

    #[test]
    fn test_first_with_list() {
        let args = Cli::parse_from(["hipver", "first", "a.txt,b_001.hip"]);

        assert!(!args.json());
        match args.command {
            Commands::First { list } => assert_eq!(list.as_deref(), Some("a.txt,b_001.hip")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_first_without_list() {
        let args = Cli::parse_from(["hipver", "first"]);

        match args.command {
            Commands::First { list } => assert!(list.is_none()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_all_flags() {
        let args = Cli::parse_from(["hipver", "all", "x.hip", "-v", "--latest"]);

        match args.command {
            Commands::All {
                list,
                verbose,
                latest,
            } => {
                assert_eq!(list.as_deref(), Some("x.hip"));
                assert!(verbose);
                assert!(latest);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_compare_requires_two_names() {
        assert!(Cli::try_parse_from(["hipver", "compare", "a_001.hip"]).is_err());

        let args = Cli::parse_from(["hipver", "compare", "a_001.hip", "a_1.hip"]);
        match args.command {
            Commands::Compare { left, right } => {
                assert_eq!(left, "a_001.hip");
                assert_eq!(right, "a_1.hip");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_global_json_flag_after_subcommand() {
        let args = Cli::parse_from(["hipver", "bump", "a_001.hip", "--json"]);
        assert!(args.json());
    }

    #[test]
    fn test_extension_set_priority() {
        let config: FileConfig = toml::from_str("extensions = [\"hiplc\"]\n").unwrap();

        let args = Cli::parse_from(["hipver", "first", "x"]);
        assert_eq!(
            args.extension_set(&FileConfig::default()),
            Ok(ExtensionSet::default())
        );
        assert_eq!(args.extension_set(&config), ExtensionSet::new(["hiplc"]));

        let args = Cli::parse_from(["hipver", "-e", ".hip", "--ext", "hipnc", "first", "x"]);
        assert_eq!(
            args.extension_set(&config),
            ExtensionSet::new(["hip", "hipnc"])
        );
    }

    #[test]
    fn test_ext_accepts_comma_separated_values() {
        let args = Cli::parse_from(["hipver", "--ext", "hip,.hiplc", "first", "x"]);

        let set = args.extension_set(&FileConfig::default()).unwrap();

        assert_eq!(set.as_slice(), ["hip".to_string(), "hiplc".to_string()]);
    }

    #[test]
    fn test_ext_rejects_dotted_extension() {
        let args = Cli::parse_from(["hipver", "--ext", "bgeo.sc", "all", "x"]);

        assert_eq!(
            args.extension_set(&FileConfig::default()),
            Err(HipFileError::InvalidExtension {
                extension: "bgeo.sc".to_string()
            })
        );
    }

    #[test]
    fn test_scan_default_values() {
        let args = scan_args(&[]);
        let config = FileConfig::default();

        assert_eq!(args.directories(&config), vec![PathBuf::from(".")]);

        let scan_opts = args.scan_options(&config);
        assert!(!scan_opts.verbose);
        assert_eq!(scan_opts.threads, 0);
        assert!(scan_opts.skip.is_empty());
        assert!(scan_opts.max_depth.is_none());

        let listing = args.listing_options(&config);
        assert!(listing.criteria.is_none());
        assert!(!listing.reverse);
        assert!(!listing.latest);
    }

    #[test]
    fn test_scan_cli_directories_override_config() {
        let args = scan_args(&["/a", "/b"]);
        let config = FileConfig {
            dirs: Some(vec![PathBuf::from("/config")]),
            ..FileConfig::default()
        };

        assert_eq!(
            args.directories(&config),
            vec![PathBuf::from("/a"), PathBuf::from("/b")]
        );
        assert_eq!(
            scan_args(&[]).directories(&config),
            vec![PathBuf::from("/config")]
        );
    }

    #[test]
    fn test_scan_options_merge_config() {
        let args = scan_args(&["--skip", "cli", "--threads", "2"]);
        let config = FileConfig {
            scanning: FileScanConfig {
                threads: Some(8),
                verbose: Some(true),
                skip: Some(vec![PathBuf::from("cfg")]),
                max_depth: Some(3),
            },
            ..FileConfig::default()
        };

        let opts = args.scan_options(&config);

        assert_eq!(opts.threads, 2);
        assert!(opts.verbose);
        assert_eq!(opts.skip, vec![PathBuf::from("cfg"), PathBuf::from("cli")]);
        assert_eq!(opts.max_depth, Some(3));
    }

    #[test]
    fn test_listing_options_from_config() {
        let config = FileConfig {
            listing: FileListingConfig {
                sort: Some("Version".to_string()),
                reverse: Some(true),
                latest: Some(true),
            },
            ..FileConfig::default()
        };

        let opts = scan_args(&[]).listing_options(&config);
        assert_eq!(opts.criteria, Some(SortCriteria::Version));
        assert!(opts.reverse);
        assert!(opts.latest);

        let opts = scan_args(&["--sort", "path"]).listing_options(&config);
        assert_eq!(opts.criteria, Some(SortCriteria::Path));
    }

    #[test]
    fn test_listing_options_invalid_config_sort_ignored() {
        let config = FileConfig {
            listing: FileListingConfig {
                sort: Some("size".to_string()),
                ..FileListingConfig::default()
            },
            ..FileConfig::default()
        };

        assert!(scan_args(&[]).listing_options(&config).criteria.is_none());
    }

    #[test]
    fn test_config_subcommands() {
        for (arg, expected) in [
            ("show", "Show"),
            ("init", "Init"),
            ("path", "Path"),
        ] {
            let args = Cli::parse_from(["hipver", "config", arg]);
            match args.command {
                Commands::Config { command } => assert_eq!(format!("{command:?}"), expected),
                other => panic!("unexpected command {other:?}"),
            }
        }
    }
}
