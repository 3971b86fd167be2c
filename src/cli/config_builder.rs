//! Merging CLI flags over file configuration
//!
//! Flags that were passed win; everything else keeps the configured value.

use crate::config::{AuditConfig, RankingConfig};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingOverrides {
    pub damping: Option<f64>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub highlight_threshold: Option<f64>,
}

impl RankingOverrides {
    pub fn apply(&self, base: RankingConfig) -> RankingConfig {
        RankingConfig {
            damping: self.damping.unwrap_or(base.damping),
            tolerance: self.tolerance.unwrap_or(base.tolerance),
            max_iterations: self.max_iterations.unwrap_or(base.max_iterations),
            highlight_threshold: self
                .highlight_threshold
                .unwrap_or(base.highlight_threshold),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditOverrides {
    pub consistent_below: Option<f64>,
    pub anomalous_above: Option<f64>,
}

impl AuditOverrides {
    pub fn apply(&self, base: AuditConfig) -> AuditConfig {
        AuditConfig {
            consistent_below: self.consistent_below.unwrap_or(base.consistent_below),
            anomalous_above: self.anomalous_above.unwrap_or(base.anomalous_above),
            ..base
        }
    }
}
