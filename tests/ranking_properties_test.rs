//! Property-based tests for authority ranking
//!
//! These tests verify invariants that should hold for all inputs:
//! - Scores form a probability distribution
//! - Ranking is bit-reproducible
//! - Relation input order does not matter

use powermap::{AuthorityGraph, Entity, Error, GraphAuthorityRanker, Relation};
use proptest::prelude::*;

const NODE_NAMES: &[&str] = &["a", "b", "c", "d", "e", "f", "g", "h"];

/// Generate a node count and a list of edges between those nodes
fn network() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..=NODE_NAMES.len()).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..(n * 3));
        (Just(n), edges)
    })
}

fn build(n: usize, edges: &[(usize, usize)]) -> AuthorityGraph {
    let entities = NODE_NAMES[..n].iter().map(|&id| Entity::new(id));
    let relations = edges
        .iter()
        .map(|&(s, t)| Relation::new(NODE_NAMES[s], NODE_NAMES[t]));
    AuthorityGraph::new(entities, relations).expect("generated graph is well formed")
}

proptest! {
    /// Property: scores are non-negative and sum to 1
    #[test]
    fn prop_scores_form_distribution((n, edges) in network()) {
        let graph = build(n, &edges);
        let score = GraphAuthorityRanker::default().rank(&graph).unwrap();

        prop_assert_eq!(score.len(), n);
        prop_assert!((score.total() - 1.0).abs() < 1e-6);
        for (_, value) in score.iter() {
            prop_assert!(value >= 0.0);
        }
    }

    /// Property: ranking twice yields identical bits
    #[test]
    fn prop_ranking_is_idempotent((n, edges) in network()) {
        let graph = build(n, &edges);
        let ranker = GraphAuthorityRanker::default();
        let first = ranker.rank(&graph).unwrap();
        let second = ranker.rank(&graph).unwrap();

        for ((_, a), (_, b)) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    /// Property: shuffling relation order does not change any score
    #[test]
    fn prop_relation_order_is_irrelevant((n, edges) in network()) {
        let forward = build(n, &edges);
        let reversed_edges: Vec<_> = edges.iter().rev().copied().collect();
        let backward = build(n, &reversed_edges);

        let ranker = GraphAuthorityRanker::default();
        let a = ranker.rank(&forward).unwrap();
        let b = ranker.rank(&backward).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Property: any relation to an unknown entity is rejected
    #[test]
    fn prop_dangling_relation_is_malformed((n, edges) in network(), from_known in any::<bool>()) {
        let entities: Vec<Entity> = NODE_NAMES[..n].iter().map(|&id| Entity::new(id)).collect();
        let mut relations: Vec<Relation> = edges
            .iter()
            .map(|&(s, t)| Relation::new(NODE_NAMES[s], NODE_NAMES[t]))
            .collect();
        let dangling = if from_known {
            Relation::new(NODE_NAMES[0], "outsider")
        } else {
            Relation::new("outsider", NODE_NAMES[0])
        };
        relations.push(dangling);

        let result = AuthorityGraph::new(entities, relations);
        prop_assert!(
            matches!(result, Err(Error::MalformedGraph { .. })),
            "expected MalformedGraph, got {:?}",
            result
        );
    }
}

#[test]
fn test_empty_graph_is_rejected() {
    let result = AuthorityGraph::new(Vec::<Entity>::new(), Vec::new());
    assert!(matches!(result, Err(Error::EmptyGraph)));
}

#[test]
fn test_isolated_nodes_share_mass_equally() {
    let graph = AuthorityGraph::new(["x", "y", "z"].map(Entity::new), Vec::new()).unwrap();
    let score = GraphAuthorityRanker::default().rank(&graph).unwrap();
    for (_, value) in score.iter() {
        assert!((value - 1.0 / 3.0).abs() < 1e-12);
    }
}
