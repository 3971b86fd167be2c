//! CLI command implementations.
//!
//! - **rank**: authority ranking of a network file
//! - **audit**: leading-digit audit of a series file
//! - **demo**: both analyses on the built-in network and synthetic totals
//! - **init**: write a default configuration file

pub mod audit;
pub mod demo;
pub mod init;
pub mod rank;

pub use audit::{handle_audit, AuditCommandConfig};
pub use demo::{handle_demo, DemoConfig};
pub use init::init_config;
pub use rank::{handle_rank, RankCommandConfig};

use crate::config::{load_config, load_config_from, PowermapConfig};
use anyhow::Result;
use std::path::Path;

/// Explicit config file if given, otherwise the nearest `.powermap.toml`
pub fn resolve_config(path: Option<&Path>) -> Result<PowermapConfig> {
    match path {
        Some(path) => load_config_from(path),
        None => Ok(load_config()),
    }
}
