use serde::{Deserialize, Serialize};

use crate::forensics::auditor::{
    AuditThresholds, DEFAULT_ANOMALOUS_ABOVE, DEFAULT_CONSISTENT_BELOW,
    DEFAULT_MIN_RELIABLE_OBSERVATIONS,
};
use crate::graph::centrality::{
    PowerIterationParams, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE,
};
use crate::graph::ranker::DEFAULT_HIGHLIGHT_THRESHOLD;

/// Authority ranking settings (`[ranking]`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,

    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Entities scoring above this are highlighted in reports
    #[serde(default = "default_highlight_threshold")]
    pub highlight_threshold: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            highlight_threshold: default_highlight_threshold(),
        }
    }
}

impl RankingConfig {
    pub fn params(&self) -> PowerIterationParams {
        PowerIterationParams {
            damping: self.damping,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.params().validate().map_err(|e| e.to_string())?;
        if !(0.0..=1.0).contains(&self.highlight_threshold) {
            return Err(format!(
                "highlight_threshold must lie in [0, 1], got {}",
                self.highlight_threshold
            ));
        }
        Ok(())
    }
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}
fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}
fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}
fn default_highlight_threshold() -> f64 {
    DEFAULT_HIGHLIGHT_THRESHOLD
}

/// Leading-digit audit settings (`[audit]`), deviations in percentage points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    #[serde(default = "default_consistent_below")]
    pub consistent_below: f64,

    #[serde(default = "default_anomalous_above")]
    pub anomalous_above: f64,

    /// Series shorter than this are audited with a warning
    #[serde(default = "default_min_reliable_observations")]
    pub min_reliable_observations: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            consistent_below: default_consistent_below(),
            anomalous_above: default_anomalous_above(),
            min_reliable_observations: default_min_reliable_observations(),
        }
    }
}

impl AuditConfig {
    pub fn thresholds(&self) -> AuditThresholds {
        AuditThresholds {
            consistent_below: self.consistent_below,
            anomalous_above: self.anomalous_above,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.thresholds().validate().map_err(|e| e.to_string())
    }
}

fn default_consistent_below() -> f64 {
    DEFAULT_CONSISTENT_BELOW
}
fn default_anomalous_above() -> f64 {
    DEFAULT_ANOMALOUS_ABOVE
}
fn default_min_reliable_observations() -> usize {
    DEFAULT_MIN_RELIABLE_OBSERVATIONS
}
