//! # hipver
//!
//! A small CLI for working with versioned Houdini project files
//! (`shot01_007.hip`, `fx_smoke_012.hipnc`, ...).
//!
//! ## Usage
//!
//! ```bash
//! # First project file of a list
//! hipver first "notes.txt,shot01_007.hip,shot01_008.hip"
//!
//! # Every project file of a list, read from stdin
//! ls | paste -sd, - | hipver all
//!
//! # Name of the next version
//! hipver bump "shot01_007.hip"
//!
//! # Latest version of every project file below a directory
//! hipver scan ~/houdini/projects --latest --sort name
//! ```

mod cli;

use std::io::Read;
use std::process::exit;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, ConfigCommand, ScanArgs};
use colored::Colorize;
use hipver::{
    config::FileConfig,
    filtering::apply_listing,
    hip::{HipFileParser, HipFiles},
    output::{JsonAll, JsonBump, JsonCompare, JsonFirst, JsonScan},
    scanner::Scanner,
};
use serde::Serialize;

/// Entry point for the hipver application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns parse errors for `first`, `bump` and `compare`, I/O errors while
/// reading stdin or the config file, and JSON serialization errors.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    if let Commands::Config { command } = &args.command {
        return handle_config_command(command);
    }

    let json_mode = args.json();
    let file_config = load_config(json_mode);
    let parser = HipFileParser::new(args.extension_set(&file_config)?);

    match &args.command {
        Commands::First { list } => run_first(&parser, &read_list(list.as_deref())?, json_mode),
        Commands::All {
            list,
            verbose,
            latest,
        } => run_all(
            &parser,
            &read_list(list.as_deref())?,
            *verbose,
            *latest,
            json_mode,
        ),
        Commands::Bump { list } => run_bump(&parser, &read_list(list.as_deref())?, json_mode),
        Commands::Compare { left, right } => run_compare(&parser, left, right, json_mode),
        Commands::Scan(scan_args) => run_scan(parser, scan_args, &file_config, json_mode),
        Commands::Config { .. } => Ok(()),
    }
}

// ── List subcommands ────────────────────────────────────────────────────

/// Return the list given on the command line, or read it from stdin.
fn read_list(list: Option<&str>) -> Result<String> {
    if let Some(list) = list {
        return Ok(list.to_string());
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read file list from stdin")?;

    // Lines are accepted as well as commas so that `ls | hipver all` works
    Ok(input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(","))
}

fn run_first(parser: &HipFileParser, list: &str, json_mode: bool) -> Result<()> {
    let hip = parser.parse_first(list)?;

    if json_mode {
        print_json(&JsonFirst { file: &hip })
    } else {
        println!("{hip}");
        Ok(())
    }
}

fn run_all(
    parser: &HipFileParser,
    list: &str,
    verbose: bool,
    latest: bool,
    json_mode: bool,
) -> Result<()> {
    let mut report = parser.parse_report(list);

    if latest {
        report.files = HipFiles::from(report.files).latest().into_inner();
    }

    if json_mode {
        return print_json(&JsonAll::from_report(&report));
    }

    if verbose {
        for rejected in &report.rejected {
            eprintln!("{}", rejected.reason.red());
        }
    }

    if report.files.is_empty() {
        eprintln!("{}", "Warning: No Houdini projects found.".yellow());
        return Ok(());
    }

    HipFiles::from(report.files).print_summary();
    Ok(())
}

fn run_bump(parser: &HipFileParser, list: &str, json_mode: bool) -> Result<()> {
    let current = parser.parse_first(list)?;
    let (next, version) = current.next_version()?;

    if json_mode {
        print_json(&JsonBump {
            current: &current,
            next: &next,
            version,
        })
    } else {
        println!("{next}");
        Ok(())
    }
}

fn run_compare(parser: &HipFileParser, left: &str, right: &str, json_mode: bool) -> Result<()> {
    let left = parser.parse_first(left)?;
    let right = parser.parse_first(right)?;
    let matches = left == right;

    if json_mode {
        return print_json(&JsonCompare {
            matches,
            left: &left,
            right: &right,
        });
    }

    if matches {
        println!("{} {left}", "✅ Same project file:".green());
    } else {
        println!(
            "{} {left} {} {right}",
            "❌ Different project files:".yellow(),
            "vs".bright_black()
        );
    }
    Ok(())
}

// ── Scan subcommand ─────────────────────────────────────────────────────

fn run_scan(
    parser: HipFileParser,
    scan_args: &ScanArgs,
    file_config: &FileConfig,
    json_mode: bool,
) -> Result<()> {
    let scan_options = scan_args.scan_options(file_config);
    let listing = scan_args.listing_options(file_config);
    let dirs = scan_args.directories(file_config);

    if scan_options.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(scan_options.threads)
            .build_global()?;
    }

    let scanner = Scanner::new(scan_options, parser).with_quiet(json_mode);
    let found = apply_listing(scanner.scan_directories(&dirs), &listing);

    if json_mode {
        return print_json(&JsonScan::from_scanned(&found));
    }

    if found.is_empty() {
        eprintln!("{}", "Warning: No Houdini projects found.".yellow());
        return Ok(());
    }

    println!();
    for file in &found {
        println!(
            "  {} {}",
            file.hip.full_name().bold(),
            format!("({})", file.directory().display()).bright_black()
        );
    }
    println!(
        "\n{} {}",
        "📁 Project files:".bold(),
        found.len().to_string().bright_white()
    );
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── Config subcommand ───────────────────────────────────────────────────

/// Default config file template written by `config init`.
const CONFIG_TEMPLATE: &str = r#"# hipver configuration
# All values shown are their defaults. Uncomment and change as needed.

# Extensions recognised as project files (without the dot)
# extensions = ["hip", "hipnc"]

# Directories searched by `hipver scan` when none are given
# dirs = ["."]

[scanning]
# Number of threads used to parse file names (0 = all CPU cores)
# threads = 0

# Show access errors and malformed project file names
# verbose = false

# Directory names to skip during scanning
# skip = []

# Maximum directory depth (unset = unlimited)
# max_depth = 5

[listing]
# Sort scan output by: name, version, path
# sort = "name"

# Reverse the sort order
# reverse = false

# Only list the latest version of each file
# latest = false
"#;

/// Dispatch a `config` subcommand.
fn handle_config_command(cmd: &ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Path => match FileConfig::config_path() {
            Some(path) => println!("{}", path.display()),
            None => bail!("Could not determine the config directory on this platform"),
        },
        ConfigCommand::Show => show_config()?,
        ConfigCommand::Init => init_config()?,
    }
    Ok(())
}

/// Print the effective configuration (file values merged with defaults).
fn show_config() -> Result<()> {
    let path = FileConfig::config_path();

    let (file_exists, config) = match &path {
        Some(p) if p.exists() => (true, FileConfig::load()?),
        _ => (false, FileConfig::default()),
    };

    match &path {
        Some(p) if file_exists => println!("Config file: {} (found)", p.display()),
        Some(p) => println!(
            "Config file: {} (not found - showing defaults)",
            p.display()
        ),
        None => println!("Config file: (cannot determine path on this platform)"),
    }

    println!();
    println!("{}", format_config(&config));
    Ok(())
}

/// Format a [`FileConfig`] as a human-readable table, showing defaults for `None` fields.
fn format_config(config: &FileConfig) -> String {
    fn show_bool(val: Option<bool>, default: bool) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_usize(val: Option<usize>, default: &str) -> String {
        val.map_or_else(|| format!("{default}  (default)"), |v| v.to_string())
    }
    fn show_paths(val: Option<&[std::path::PathBuf]>, default: &str) -> String {
        match val {
            Some(v) if !v.is_empty() => {
                let items: Vec<String> = v.iter().map(|p| format!("\"{}\"", p.display())).collect();
                format!("[{}]", items.join(", "))
            }
            _ => format!("{default}  (default)"),
        }
    }

    let extensions = match (config.extension_set(), &config.extensions) {
        (Ok(set), None) => format!("[{}]  (default)", quoted(set.as_slice())),
        (Ok(set), Some(_)) => format!("[{}]", quoted(set.as_slice())),
        (Err(e), _) => format!("(invalid: {e})"),
    };

    format!(
        "\
extensions    = {extensions}
dirs          = {dirs}

[scanning]
threads       = {threads}
verbose       = {verbose}
skip          = {skip}
max_depth     = {max_depth}

[listing]
sort          = {sort}
reverse       = {reverse}
latest        = {latest}",
        dirs = show_paths(config.dirs.as_deref(), "[\".\"]"),
        threads = show_usize(config.scanning.threads, "0 (all cores)"),
        verbose = show_bool(config.scanning.verbose, false),
        skip = show_paths(config.scanning.skip.as_deref(), "[]"),
        max_depth = show_usize(config.scanning.max_depth, "unlimited"),
        sort = config
            .listing
            .sort
            .as_deref()
            .map_or_else(|| "(none)  (default)".to_string(), |v| format!("\"{v}\"")),
        reverse = show_bool(config.listing.reverse, false),
        latest = show_bool(config.listing.latest, false),
    )
}

/// Join strings as a comma-separated list of quoted values.
fn quoted(values: &[String]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Write a default config template to the config file path if it does not exist yet.
fn init_config() -> Result<()> {
    let Some(path) = FileConfig::config_path() else {
        bail!("Could not determine the config directory on this platform");
    };

    if path.exists() {
        println!("Config file already exists at: {}", path.display());
        println!("Remove it first if you want to regenerate it.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {e}",
                parent.display()
            )
        })?;
    }

    std::fs::write(&path, CONFIG_TEMPLATE)
        .map_err(|e| anyhow::anyhow!("Failed to write config file {}: {e}", path.display()))?;

    println!("Config file written to: {}", path.display());
    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config(json_mode: bool) -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    }
}
