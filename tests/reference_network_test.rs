use powermap::dataset::{load_network, reference_document, reference_network};
use powermap::GraphAuthorityRanker;
use tempfile::TempDir;

#[test]
fn test_reference_network_ranking() {
    let graph = reference_network().unwrap();
    let score = GraphAuthorityRanker::default().rank(&graph).unwrap();

    let ranked = score.ranked();
    assert_eq!(ranked[0].0, "Jorge Rodríguez");
    assert!((ranked[0].1 - 0.2067).abs() < 1e-3);
    assert!(score.converged);

    let highlighted: Vec<&str> = score.above(0.08).into_iter().map(|(id, _)| id).collect();
    assert!(highlighted.contains(&"Maduro"));
    assert!(highlighted.contains(&"Delcy Rodríguez"));
    assert!(highlighted.contains(&"Diosdado Cabello"));
}

#[test]
fn test_reference_document_round_trips_through_a_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("reference.json");
    let document = reference_document().unwrap();
    std::fs::write(&path, serde_json::to_string(&document).unwrap()).unwrap();

    let reloaded = load_network(&path).unwrap();
    let original = reference_network().unwrap();
    assert_eq!(reloaded.entity_count(), original.entity_count());
    assert_eq!(reloaded.relation_count(), original.relation_count());
}
