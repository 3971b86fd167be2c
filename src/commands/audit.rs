use crate::config::AuditConfig;
use crate::dataset;
use crate::forensics::{DigitFrequencyAuditor, DigitSeries};
use crate::output::{create_writer, open_destination, OutputFormat, ReportOptions};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::warn;

pub struct AuditCommandConfig {
    pub series: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub audit: AuditConfig,
    pub skip_invalid: bool,
    pub label: Option<String>,
}

pub fn handle_audit(config: AuditCommandConfig) -> Result<()> {
    let values = dataset::load_series(&config.series)
        .with_context(|| format!("Failed to load series {}", config.series.display()))?;

    let auditor = DigitFrequencyAuditor::from_config(&config.audit);
    auditor.thresholds().validate()?;

    let series = if config.skip_invalid {
        let (series, excluded) = DigitSeries::filtered(values)?;
        if excluded > 0 {
            warn!(excluded, "Excluded observations without a leading digit");
        }
        series
    } else {
        DigitSeries::new(values)?
    };
    let report = auditor.audit_series(&series);

    let label = config.label.unwrap_or_else(|| {
        config
            .series
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "series".to_string())
    });

    let destination = open_destination(config.output.as_deref())?;
    let mut writer = create_writer(config.format, destination, ReportOptions::default());
    writer.write_digit_report(&label, &report)?;
    writer.finish()
}
