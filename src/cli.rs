//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use clap::Parser;
use std::path::PathBuf;

/// IssueBuddy - collect inline issue markers into one table
///
/// Scans every note in a vault for lines containing the issue marker
/// (`#q-` by default) and rewrites the output document with a table of
/// all issues, easiest first.
///
/// Examples:
///   issuebuddy
///   issuebuddy --vault ~/notes
///   issuebuddy --vault ~/notes --dry-run
///   issuebuddy --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Root directory of the notes vault
    #[arg(long, default_value = ".", value_name = "DIR", env = "ISSUEBUDDY_VAULT")]
    pub vault: PathBuf,

    /// Output document, relative to the vault root
    ///
    /// Overrides the config file. Default: "Open Issues.md".
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Marker substring identifying an issue line
    #[arg(long, value_name = "TEXT")]
    pub marker: Option<String>,

    /// File name of the unsorted bucket document
    ///
    /// Issues in this document take their subject from the parent folder.
    #[arg(long, value_name = "NAME")]
    pub unsorted: Option<String>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .issuebuddy.toml in the vault root,
    /// then in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File extensions to include (comma-separated)
    #[arg(long, value_name = "EXTS", value_delimiter = ',')]
    pub extensions: Option<Vec<String>>,

    /// Names to exclude from the scan (comma-separated)
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the table instead of writing the output document
    #[arg(long)]
    pub dry_run: bool,

    /// Generate a default .issuebuddy.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if !self.vault.is_dir() {
            return Err(format!(
                "Vault directory does not exist: {}",
                self.vault.display()
            ));
        }

        if let Some(ref marker) = self.marker {
            if marker.is_empty() {
                return Err("Marker must not be empty".to_string());
            }
        }

        if let Some(ref output) = self.output {
            if output.trim().is_empty() {
                return Err("Output document name must not be empty".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
