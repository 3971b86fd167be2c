//! Built-in reference command network

use super::loader::NetworkDocument;
use crate::core::Result;
use crate::graph::AuthorityGraph;

const REFERENCE_NETWORK_JSON: &str = include_str!("../../data/reference_network.json");

/// The curated command network shipped with the crate
pub fn reference_document() -> Result<NetworkDocument> {
    NetworkDocument::from_json(REFERENCE_NETWORK_JSON)
}

pub fn reference_network() -> Result<AuthorityGraph> {
    reference_document()?.into_graph()
}
