//! Command-authority ranking
//!
//! Authority is reverse centrality: every "A commands B" relation is flipped
//! to B → A before the random walk runs, so score accumulates at the
//! positions orders originate from rather than where they land. The highest
//! scoring entity is the inferred source of orders.

use super::authority_graph::AuthorityGraph;
use super::centrality::{stationary_distribution, PowerIterationParams};
use crate::config::RankingConfig;
use crate::core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Score above which an entity is highlighted as a power broker
pub const DEFAULT_HIGHLIGHT_THRESHOLD: f64 = 0.08;

/// Which way edges are walked during ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CentralityDirection {
    /// Walk the reversed command graph (authority)
    #[default]
    Reversed,
    /// Walk the command graph as given (ordinary centrality)
    Forward,
}

#[derive(Debug, Clone, Default)]
pub struct GraphAuthorityRanker {
    params: PowerIterationParams,
    direction: CentralityDirection,
}

impl GraphAuthorityRanker {
    pub fn new(params: PowerIterationParams) -> Self {
        Self {
            params,
            direction: CentralityDirection::Reversed,
        }
    }

    pub fn from_config(config: &RankingConfig) -> Self {
        Self::new(config.params())
    }

    pub fn with_direction(mut self, direction: CentralityDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn params(&self) -> &PowerIterationParams {
        &self.params
    }

    /// Rank every entity in `graph`.
    ///
    /// Parameters are validated before any iteration. A run that hits the
    /// iteration cap still returns its last distribution, flagged through
    /// [`AuthorityScore::converged`].
    pub fn rank(&self, graph: &AuthorityGraph) -> Result<AuthorityScore> {
        self.params.validate()?;

        debug!(
            entities = graph.entity_count(),
            relations = graph.relation_count(),
            direction = ?self.direction,
            "Ranking command authority"
        );

        let walk_graph = match self.direction {
            CentralityDirection::Reversed => graph.reversed(),
            CentralityDirection::Forward => graph.command_graph().clone(),
        };
        let distribution = stationary_distribution(&walk_graph, &self.params);

        let scores: BTreeMap<String, f64> = walk_graph
            .node_indices()
            .map(|idx| (walk_graph[idx].clone(), distribution.scores[idx.index()]))
            .collect();

        let score = AuthorityScore {
            scores,
            iterations: distribution.iterations,
            converged: distribution.converged,
            direction: self.direction,
        };

        if let Some((leader, value)) = score.leader() {
            info!(
                leader,
                score = value,
                iterations = score.iterations,
                "Authority identified"
            );
        }

        Ok(score)
    }
}

/// Per-entity authority, summing to 1.0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorityScore {
    scores: BTreeMap<String, f64>,
    pub iterations: usize,
    pub converged: bool,
    pub direction: CentralityDirection,
}

impl AuthorityScore {
    pub fn get(&self, id: &str) -> Option<f64> {
        self.scores.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Sum of all scores, accumulated in id order
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    /// Scores in lexicographic id order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(id, &score)| (id.as_str(), score))
    }

    /// Entities by descending score; ties are broken by id
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// The inferred source of orders
    pub fn leader(&self) -> Option<(&str, f64)> {
        self.ranked().into_iter().next()
    }

    /// Entities scoring strictly above `threshold`, by descending score
    pub fn above(&self, threshold: f64) -> Vec<(&str, f64)> {
        self.ranked()
            .into_iter()
            .filter(|(_, score)| *score > threshold)
            .collect()
    }
}
