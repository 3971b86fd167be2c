//! CLI module for powermap
//!
//! - Argument parsing (`args`)
//! - Merging flags over file configuration (`config_builder`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod config_builder;
pub mod setup;

pub use args::{parse_args, Cli, Commands};
pub use config_builder::{AuditOverrides, RankingOverrides};
pub use setup::{configure_colors, init_logging, verbosity_filter};
