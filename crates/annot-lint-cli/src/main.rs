//! annot-lint CLI tool.
//!
//! Usage:
//! ```bash
//! annot-lint check [OPTIONS] [PATH]
//! annot-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Scans Rust sources for function parameters carrying a validation annotation
#[derive(Parser)]
#[command(name = "annot-lint")]
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
    /// Scan sources and report annotated parameters
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Annotation identity to search for (overrides config)
        #[arg(long)]
        annotation: Option<String>,

        /// Identity comparison policy (overrides config)
        #[arg(long = "match")]
        match_policy: Option<PolicyArg>,

        /// Construct diagnostics without reporting them
        #[arg(long)]
        dry_run: bool,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for scan reports.
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

/// Identity comparison policy flag.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PolicyArg {
    /// Compare simple names only.
    Name,
    /// Compare import-resolved paths.
    Path,
}

impl From<PolicyArg> for annot_lint_core::MatchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Name => Self::Name,
            PolicyArg::Path => Self::Path,
        }
    }
}

fn main() -> Result<()> {
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

    match cli.command {
        Commands::Check {
            path,
            format,
            annotation,
            match_policy,
            dry_run,
            exclude,
        } => {
            let overrides = commands::check::Overrides {
                annotation,
                match_policy: match_policy.map(Into::into),
                dry_run,
            };
            commands::check::run(&path, format, overrides, exclude, cli.config.as_deref())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
