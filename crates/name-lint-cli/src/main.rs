//! name-lint CLI tool.
//!
//! Usage:
//! ```bash
//! name-lint check [OPTIONS] [PATH]
//! name-lint init
//! name-lint install-hook
//! ```
//!
//! Exit codes: 0 clean run, 1 naming diagnostics were found, 2 internal or
//! configuration error.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Naming-convention checker for Rust projects
#[derive(Parser)]
#[command(name = "name-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check names against the configured rules
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a default name-lint.toml configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },

    /// Install the pre-commit hook into .git/hooks
    InstallHook {
        /// Project root containing the .git directory
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let outcome = match cli.command {
        Commands::Check { path, format } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::check::run(&path, format, &source)
        }
        Commands::Init { force } => commands::init::run(force),
        Commands::InstallHook { path } => commands::install_hook::run(&path),
    };

    // Internal and configuration errors are distinguishable from findings:
    // findings exit 1 inside the check command, errors exit 2 here.
    if let Err(e) = outcome {
        eprintln!("error: {e:#}");
        std::process::exit(2);
    }
}
