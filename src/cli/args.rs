use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "powermap")]
#[command(about = "Command-authority ranking and leading-digit forensic auditing", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .powermap.toml)
    #[arg(short, long, global = true, env = "POWERMAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank entities of a command network by structural authority
    Rank {
        /// Network file (JSON, or TOML by extension)
        network: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Damping factor in (0, 1)
        #[arg(long)]
        damping: Option<f64>,

        /// Convergence tolerance (L1 change between iterations)
        #[arg(long)]
        tolerance: Option<f64>,

        /// Maximum power iterations
        #[arg(long = "max-iterations")]
        max_iterations: Option<usize>,

        /// Highlight entities scoring above this value
        #[arg(long)]
        highlight: Option<f64>,

        /// Rank along command edges instead of reversed edges
        #[arg(long)]
        forward: bool,

        /// Show only top N entities
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,
    },

    /// Audit the leading-digit distribution of a numeric series
    Audit {
        /// Series file (JSON array, or delimited numbers)
        series: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Deviation (percentage points) below which the series reads as natural
        #[arg(long = "consistent-below")]
        consistent_below: Option<f64>,

        /// Deviation (percentage points) above which the series is anomalous
        #[arg(long = "anomalous-above")]
        anomalous_above: Option<f64>,

        /// Exclude zero, negative and non-finite values instead of failing
        #[arg(long = "skip-invalid")]
        skip_invalid: bool,

        /// Label used in the report (defaults to the file name)
        #[arg(long)]
        label: Option<String>,
    },

    /// Run both analyses on the built-in network and synthetic totals
    Demo {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Observations per synthetic series
        #[arg(long, default_value = "5000")]
        samples: usize,

        /// Random seed for the synthetic series
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
