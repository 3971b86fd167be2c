use crate::config::RankingConfig;
use crate::dataset;
use crate::graph::{CentralityDirection, GraphAuthorityRanker};
use crate::output::{create_writer, open_destination, OutputFormat, ReportOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct RankCommandConfig {
    pub network: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub ranking: RankingConfig,
    pub direction: CentralityDirection,
    pub top: Option<usize>,
}

pub fn handle_rank(config: RankCommandConfig) -> Result<()> {
    let graph = dataset::load_network(&config.network)
        .with_context(|| format!("Failed to load network {}", config.network.display()))?;

    let score = GraphAuthorityRanker::from_config(&config.ranking)
        .with_direction(config.direction)
        .rank(&graph)
        .context("Authority ranking failed")?;

    let options = ReportOptions {
        highlight_threshold: config.ranking.highlight_threshold,
        top: config.top,
    };
    let destination = open_destination(config.output.as_deref())?;
    let mut writer = create_writer(config.format, destination, options);
    writer.write_authority(&score)?;
    writer.finish()
}
