//! Command-network construction and authority ranking

pub mod authority_graph;
pub mod centrality;
pub mod ranker;

pub use authority_graph::AuthorityGraph;
pub use centrality::{stationary_distribution, PowerIterationParams, StationaryDistribution};
pub use ranker::{
    AuthorityScore, CentralityDirection, GraphAuthorityRanker, DEFAULT_HIGHLIGHT_THRESHOLD,
};
