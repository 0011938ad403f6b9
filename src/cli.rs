//! CLI argument parsing for configuration inspection.
use clap::{Parser, Subcommand};

/// Global CLI arguments for configuration location and debugging.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "", global = true)]
    /// Path to an explicit configuration file. When empty, well-known
    /// filenames are discovered in --dir.
    pub config: String,

    #[arg(long, default_value = ".", global = true)]
    /// Directory searched for configuration files.
    pub dir: String,

    #[arg(long, default_value_t = false, global = true)]
    /// Enable debug logging.
    pub debug: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Configuration inspection subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Validate the release configuration and report a summary.
    Check,

    /// Print the resolved release configuration as JSON.
    Show(ShowArgs),
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Write output to this file instead of stdout.
    #[arg(long)]
    pub out_file: Option<String>,

    /// Render tag and command previews for this release version.
    #[arg(long)]
    pub next_version: Option<String>,
}
