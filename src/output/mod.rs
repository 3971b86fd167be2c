//! Report writers
//!
//! Writers render the structured engine results; they never compute
//! anything themselves.

pub mod json;
pub mod terminal;

use crate::forensics::DigitFrequencyReport;
use crate::graph::AuthorityScore;
use anyhow::Result;
use clap::ValueEnum;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use json::JsonWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

/// Presentation settings shared by all writers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    /// Entities scoring above this are highlighted
    pub highlight_threshold: f64,
    /// Show only the top N entities
    pub top: Option<usize>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            highlight_threshold: crate::graph::DEFAULT_HIGHLIGHT_THRESHOLD,
            top: None,
        }
    }
}

pub trait ReportWriter {
    fn write_authority(&mut self, score: &AuthorityScore) -> Result<()>;

    fn write_digit_report(&mut self, label: &str, report: &DigitFrequencyReport) -> Result<()>;

    /// Flush anything buffered; called once after the last report
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    destination: Box<dyn Write>,
    options: ReportOptions,
) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination, options)),
        OutputFormat::Json => Box::new(JsonWriter::new(destination, options)),
    }
}

/// Open `path` for writing (creating parent directories), or stdout
pub fn open_destination(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Ok(Box::new(io::BufWriter::new(fs::File::create(path)?)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Entities to display, honouring `top`
pub(crate) fn visible_entries<'a>(
    score: &'a AuthorityScore,
    options: &ReportOptions,
) -> Vec<(&'a str, f64)> {
    let ranked = score.ranked();
    match options.top {
        Some(n) => ranked.into_iter().take(n).collect(),
        None => ranked,
    }
}
