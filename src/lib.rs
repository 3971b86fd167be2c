//! powermap - command-authority ranking and leading-digit forensics
//!
//! Two independent, stateless engines:
//!
//! ```text
//! Entities + Relations → AuthorityGraph → reverse edges → power iteration → AuthorityScore
//! Numeric series       → DigitSeries    → leading digits → vs log10(1+1/d) → DigitFrequencyReport
//! ```
//!
//! Both are pure, synchronous computations over caller-owned data; loaders,
//! configuration and report writers sit around them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod dataset;
pub mod forensics;
pub mod graph;
pub mod output;

// Re-export commonly used types
pub use crate::core::{Entity, Error, Relation, Result};

pub use crate::graph::{
    AuthorityGraph, AuthorityScore, CentralityDirection, GraphAuthorityRanker,
    PowerIterationParams,
};

pub use crate::forensics::{
    AuditThresholds, DigitFrequency, DigitFrequencyAuditor, DigitFrequencyReport, DigitSeries,
    Verdict,
};

pub use crate::config::{AuditConfig, PowermapConfig, RankingConfig};
