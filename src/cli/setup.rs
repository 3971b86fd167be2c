//! Setup and initialization functions for CLI
//!
//! Logging goes to stderr through `tracing-subscriber`; `log` records from
//! the config loader are bridged into the same subscriber.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn verbosity_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG`, when set, wins over `-v`.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_filter(verbosity)));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        // Already installed - this is fine, just ignore
        eprintln!("Note: Logging already configured: {}", e);
    }
}

/// Disable ANSI colors when requested or when NO_COLOR is set
pub fn configure_colors(plain: bool) {
    if plain || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}
