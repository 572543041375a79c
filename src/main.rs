//! IssueBuddy - inline issue collector for markdown vaults
//!
//! A CLI tool that scans every note in a vault for issue markers
//! and regenerates one summary table, sorted by difficulty.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing output document, config, write failure, etc.)

mod analysis;
mod cli;
mod config;
mod error;
mod models;
mod report;
mod runner;
mod scanner;
mod vault;

use anyhow::{Context, Result};
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use models::RunSummary;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use vault::{FsVault, ScanConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    init_logging(&args);

    info!("IssueBuddy v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    if let Err(e) = run_collect(args).await {
        error!("Run failed: {:#}", e);
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .issuebuddy.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "⚠️  {} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("✅ Created {} with default settings.", CONFIG_FILE_NAME);
    println!("   Edit it to customize the output document, marker and excludes.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Regenerate the issues table (or preview it with --dry-run).
async fn run_collect(args: Args) -> Result<()> {
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let show_progress = config.general.show_progress;
    let vault = FsVault::open(&args.vault, ScanConfig::from(&config.scanner))
        .with_context(|| format!("Failed to open vault {}", args.vault.display()))?;
    info!("Vault at: {}", vault.root().display());

    if args.dry_run {
        let table = runner::preview(&vault, &config.vault, show_progress).await?;
        println!("{}", table);
        return Ok(());
    }

    println!("🔍 Collecting issues into {}...", config.vault.output_file);
    let summary = runner::run(&vault, &config.vault, show_progress).await?;

    if !args.quiet {
        print_summary(&summary, &config.vault.output_file);
    }

    Ok(())
}

fn print_summary(summary: &RunSummary, output_file: &str) {
    println!("\n📊 Run Summary:");
    println!(
        "   Started: {}",
        summary.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("   Documents scanned: {}", summary.documents_scanned);
    if summary.documents_failed > 0 {
        println!("   Documents skipped: {}", summary.documents_failed);
    }
    println!("   Issues found: {}", summary.issues_found);
    println!("   Duration: {:.2}s", summary.duration_seconds);
    println!("\n✅ Table written to: {}", output_file);
}

/// Load configuration from --config, the vault root, or the working directory.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    for dir in [args.vault.as_path(), std::path::Path::new(".")] {
        match Config::load_from_dir(dir) {
            Ok(Some(config)) => {
                info!("Loaded {} from {}", CONFIG_FILE_NAME, dir.display());
                return Ok(config);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Failed to load config: {:#}", e);
                return Ok(Config::default());
            }
        }
    }

    debug!("No config file found, using defaults");
    Ok(Config::default())
}
