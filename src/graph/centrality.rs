//! Stationary-distribution centrality by power iteration
//!
//! This module is direction-agnostic: it ranks whatever adjacency structure
//! it is given. Authority ranking hands it the reversed command graph, but
//! the same routine computes ordinary centrality on the raw graph.
//!
//! Each iteration computes
//!
//! ```text
//! x'[v] = (1 - d) / N  +  d * Σ x[u] / outdeg(u)  +  d * dangling / N
//!                             u → v
//! ```
//!
//! where `dangling` is the total score currently held by nodes without
//! outgoing edges. Spreading that mass uniformly keeps `Σ x = 1`.

use crate::core::{Error, Result};
use petgraph::graph::DiGraph;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Parameters for the power iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerIterationParams {
    /// Probability of following an edge rather than teleporting, in (0, 1)
    pub damping: f64,
    /// L1 change between successive vectors below which iteration stops
    pub tolerance: f64,
    /// Iteration cap; reaching it yields a best-effort distribution
    pub max_iterations: usize,
}

impl Default for PowerIterationParams {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PowerIterationParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::invalid_parameter(format!(
                "damping must lie in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::invalid_parameter(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid_parameter(
                "max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Result of a power iteration, indexed by node index
#[derive(Debug, Clone, PartialEq)]
pub struct StationaryDistribution {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub converged: bool,
    /// L1 change of the final iteration
    pub residual: f64,
}

/// Compute the stationary distribution of the damped random walk over `graph`.
///
/// Nodes are visited in index order and each node's predecessors in
/// ascending index order, so the floating-point summation order is fixed
/// for a given graph. Parameters are assumed valid; see
/// [`PowerIterationParams::validate`].
pub fn stationary_distribution<N, E>(
    graph: &DiGraph<N, E>,
    params: &PowerIterationParams,
) -> StationaryDistribution {
    let n = graph.node_count();
    if n == 0 {
        return StationaryDistribution {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
            residual: 0.0,
        };
    }

    let size = n as f64;
    let damping = params.damping;
    let teleport = (1.0 - damping) / size;

    let out_degree: Vec<usize> = graph
        .node_indices()
        .map(|idx| graph.neighbors_directed(idx, Direction::Outgoing).count())
        .collect();

    // One entry per incoming edge, so parallel edges carry proportional weight
    let predecessors: Vec<Vec<usize>> = graph
        .node_indices()
        .map(|idx| {
            let mut preds: Vec<usize> = graph
                .neighbors_directed(idx, Direction::Incoming)
                .map(|p| p.index())
                .collect();
            preds.sort_unstable();
            preds
        })
        .collect();

    let mut ranks = vec![1.0 / size; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut residual = f64::INFINITY;
    let mut converged = false;

    while iterations < params.max_iterations {
        iterations += 1;

        let dangling: f64 = ranks
            .iter()
            .zip(&out_degree)
            .filter(|(_, &degree)| degree == 0)
            .map(|(rank, _)| rank)
            .sum();
        let base = teleport + damping * dangling / size;

        for (v, slot) in next.iter_mut().enumerate() {
            let inflow: f64 = predecessors[v]
                .iter()
                .map(|&u| ranks[u] / out_degree[u] as f64)
                .sum();
            *slot = base + damping * inflow;
        }

        residual = next
            .iter()
            .zip(&ranks)
            .map(|(new, old)| (new - old).abs())
            .sum();
        std::mem::swap(&mut ranks, &mut next);

        trace!(iteration = iterations, residual, "Power iteration step");

        if residual < params.tolerance {
            converged = true;
            break;
        }
    }

    if !converged {
        warn!(
            iterations,
            residual,
            tolerance = params.tolerance,
            "Power iteration did not converge; returning best-effort distribution"
        );
    }

    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in &mut ranks {
            *rank /= total;
        }
    }

    StationaryDistribution {
        scores: ranks,
        iterations,
        converged,
        residual,
    }
}
