//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.issuebuddy.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the vault root and the working directory.
pub const CONFIG_FILE_NAME: &str = ".issuebuddy.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Vault and marker settings.
    #[serde(default)]
    pub vault: VaultConfig,

    /// Scanner settings.
    #[serde(default)]
    pub scanner: ScannerConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Show a progress bar while documents are scanned.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Names and markers that drive a regeneration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Document the table is written to, relative to the vault root.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Substring that marks a line as an issue.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// File name of the unsorted bucket document.
    #[serde(default = "default_unsorted_file")]
    pub unsorted_file: String,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            marker: default_marker(),
            unsorted_file: default_unsorted_file(),
        }
    }
}

fn default_output_file() -> String {
    "Open Issues.md".to_string()
}

fn default_marker() -> String {
    "#q-".to_string()
}

fn default_unsorted_file() -> String {
    "Unsorted.md".to_string()
}

/// Vault listing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// File extensions to include.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory or file names to exclude.
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            excludes: default_excludes(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_excludes() -> Vec<String> {
    vec![".obsidian", ".trash", ".git"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from a directory.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were given explicitly.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.vault.output_file = output.clone();
        }
        if let Some(ref marker) = args.marker {
            self.vault.marker = marker.clone();
        }
        if let Some(ref unsorted) = args.unsorted {
            self.vault.unsorted_file = unsorted.clone();
        }
        if let Some(ref extensions) = args.extensions {
            self.scanner.extensions = extensions.clone();
        }
        if let Some(ref excludes) = args.exclude {
            self.scanner.excludes = excludes.clone();
        }

        if args.quiet || args.verbose {
            self.general.show_progress = false;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
