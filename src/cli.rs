use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Datespan calendar period calculator and fixture generator.
#[derive(Parser)]
#[command(
    name = "datespan",
    version,
    about = "Calendar period calculator and exhaustive fixture generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Write the fixture line for every ordered date pair in a range.
    Generate(GenerateArgs),
    /// Print the period between two dates.
    Between(BetweenArgs),
    /// Recompute every period in a fixture file and report disagreements.
    Verify(VerifyArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write fixtures to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// First date of the range (YYYY-MM-DD, inclusive).
    #[arg(long)]
    pub start: Option<String>,

    /// End of the range (YYYY-MM-DD, exclusive).
    #[arg(long)]
    pub end: Option<String>,

    /// Split generation across all cores.
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for the `between` subcommand.
#[derive(clap::Args)]
pub struct BetweenArgs {
    /// Start date (YYYY-MM-DD).
    pub start: String,

    /// End date (YYYY-MM-DD).
    pub end: String,
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Path to the fixture file to check.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Maximum number of mismatching lines to print.
    #[arg(long, default_value_t = 20)]
    pub show: usize,
}
