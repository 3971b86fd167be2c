use serde::{Deserialize, Serialize};

use super::thresholds::{AuditConfig, RankingConfig};

/// Root configuration structure for powermap
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PowermapConfig {
    /// Authority ranking configuration
    #[serde(default)]
    pub ranking: Option<RankingConfig>,

    /// Leading-digit audit configuration
    #[serde(default)]
    pub audit: Option<AuditConfig>,
}

impl PowermapConfig {
    /// Ranking settings, with defaults if not configured
    pub fn ranking(&self) -> RankingConfig {
        self.ranking.clone().unwrap_or_default()
    }

    /// Audit settings, with defaults if not configured
    pub fn audit(&self) -> AuditConfig {
        self.audit.clone().unwrap_or_default()
    }
}
