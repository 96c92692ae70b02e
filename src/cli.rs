//! Command-line interface for codescope.

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::{self, Config};
use crate::detect::{Analyzer, LANGUAGE_PATTERNS};
use crate::report::{self, ReportEntry};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Source name used for standard input.
pub const STDIN_SOURCE: &str = "-";

/// Directories never descended into during scans.
const SKIPPED_DIRS: &[&str] = &["vendor", "node_modules", "target", "dist", "build"];

/// Heuristic code metrics without parsing.
///
/// Codescope guesses the language of a snippet, estimates its time and
/// space complexity, scores cyclomatic and cognitive complexity, derives a
/// maintainability index, measures duplicated lines and flags common
/// security and performance smells.
#[derive(Parser)]
#[command(name = "codescope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a file, a directory, or stdin ("-")
    Analyze(AnalyzeArgs),
    /// Write a default configuration file
    Init(InitArgs),
    /// List detectable languages
    Languages,
}

/// Arguments for the analyze command.
#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to analyze (file, directory, or "-" for stdin)
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Exit non-zero when any security issue is found
    #[arg(long)]
    pub fail_on_issues: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "codescope.yaml")]
    pub output: PathBuf,
}

/// Default configuration written by `init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Load the config given on the command line, or discover one, or use defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => Config::discover(Path::new(".")),
    };

    let config = match path {
        Some(p) => {
            info!(path = %p.display(), "loading config");
            Config::parse_file(&p)
                .map_err(|e| anyhow::anyhow!("parsing config {}: {}", p.display(), e))?
        }
        None => Config::default(),
    };

    config::validate(&config).map_err(|e| anyhow::anyhow!("invalid config: {}", e))?;
    Ok(config)
}

/// Collect files to analyze under a directory.
pub fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            // Skip hidden and dependency/build directories
            !(name.starts_with('.') || SKIPPED_DIRS.iter().any(|d| name == *d))
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        if config.is_path_excluded(rel) {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if config.is_supported_extension(ext) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Read one file, enforcing the extension allowlist and size limit.
pub fn read_source(path: &Path, config: &Config) -> anyhow::Result<String> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !config.is_supported_extension(ext) {
        anyhow::bail!("unsupported file type: {}", path.display());
    }

    let size = std::fs::metadata(path)?.len();
    let limit = config.max_input_bytes();
    if size > limit as u64 {
        anyhow::bail!(
            "file too large: {} is {} bytes, limit is {} bytes",
            path.display(),
            size,
            limit
        );
    }

    Ok(std::fs::read_to_string(path)?)
}

/// Analyze every file, in parallel, returning entries sorted by path.
///
/// Files that cannot be read or analyzed are logged and skipped.
pub fn analyze_files(files: &[PathBuf], config: &Config) -> Vec<ReportEntry> {
    let analyzer = Analyzer::from_config(config);

    let mut entries: Vec<ReportEntry> = files
        .par_iter()
        .filter_map(|path| {
            let outcome = read_source(path, config)
                .and_then(|text| analyzer.try_analyze(&text).map_err(anyhow::Error::from));
            match outcome {
                Ok(result) => Some(ReportEntry {
                    source: path.to_string_lossy().to_string(),
                    result,
                }),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping file");
                    None
                }
            }
        })
        .collect();

    entries.sort_by(|a, b| a.source.cmp(&b.source));
    entries
}

/// Run the analyze command.
pub fn run_analyze(args: &AnalyzeArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_ERROR);
    }

    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    let analyzer = Analyzer::from_config(&config);

    let entries = if args.path.as_os_str() == STDIN_SOURCE {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        match analyzer.try_analyze(&text) {
            Ok(result) => vec![ReportEntry {
                source: STDIN_SOURCE.to_string(),
                result,
            }],
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    } else {
        let metadata = match std::fs::metadata(&args.path) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: cannot access path {:?}: {}", args.path, e);
                return Ok(EXIT_ERROR);
            }
        };

        if metadata.is_dir() {
            let files = collect_files(&args.path, &config)?;
            if files.is_empty() {
                eprintln!("Warning: no files to analyze");
                return Ok(EXIT_SUCCESS);
            }
            info!(count = files.len(), "analyzing files");
            analyze_files(&files, &config)
        } else {
            let outcome = read_source(&args.path, &config)
                .and_then(|text| analyzer.try_analyze(&text).map_err(anyhow::Error::from));
            match outcome {
                Ok(result) => vec![ReportEntry {
                    source: args.path.to_string_lossy().to_string(),
                    result,
                }],
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return Ok(EXIT_ERROR);
                }
            }
        }
    };

    match args.format.as_str() {
        "json" => report::write_json(&entries)?,
        _ => report::write_pretty(&entries),
    }

    let has_security_issues = entries.iter().any(|e| e.result.has_security_issues());
    if args.fail_on_issues && has_security_issues {
        Ok(EXIT_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    // Check if output already exists
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    // Create output directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to adjust thresholds", args.output.display());
    println!(
        "  2. Run: codescope analyze . --config {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}

/// List detectable languages.
pub fn run_languages() -> anyhow::Result<i32> {
    println!("Detectable languages:");
    println!();

    for lp in LANGUAGE_PATTERNS {
        let max_score: u32 = lp.rules.iter().map(|r| r.weight).sum();
        println!(
            "  {:<12} {:>2} patterns  (max score {})",
            lp.language.as_str(),
            lp.rules.len(),
            max_score
        );
    }

    Ok(EXIT_SUCCESS)
}
