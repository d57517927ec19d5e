use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Explicit convolution matrices for a fixed point-spread function.
#[derive(Parser)]
#[command(
    name = "psfmat",
    version,
    about = "Full, same, valid and circular convolution matrices"
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
    /// Build one convolution matrix or all four.
    Build(BuildArgs),
    /// Multiply a signal by a convolution matrix.
    Apply(ApplyArgs),
}

/// Filter and build settings shared by every subcommand.
#[derive(clap::Args)]
pub struct FilterArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Filter coefficients, comma separated (e.g. "1,2,1").
    #[arg(short, long, allow_hyphen_values = true)]
    pub psf: Option<String>,

    /// Override the residual tolerance from config.
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Centre even-length filters at floor((k - 1) / 2) instead of rejecting them.
    #[arg(long)]
    pub asymmetric_centering: bool,

    /// Build independent matrices on several threads.
    #[arg(long)]
    pub parallel: bool,

    /// Output format: text or json.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `build` subcommand.
#[derive(clap::Args)]
pub struct BuildArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Override signal length from config.
    #[arg(short = 'n', long = "length")]
    pub n: Option<usize>,

    /// Mode to build: full, same, valid, circular, or all.
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `apply` subcommand.
#[derive(clap::Args)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Input signal, comma separated. Its length sets the matrix width.
    #[arg(short, long, allow_hyphen_values = true)]
    pub signal: String,

    /// Mode of the matrix to apply.
    #[arg(short, long, default_value = "full")]
    pub mode: String,
}
