//! Command network construction
//!
//! An [`AuthorityGraph`] owns the validated entity set and the deduplicated
//! "source commands target" relations. Nodes are inserted in lexicographic
//! id order, so node indices, iteration order and float summation order are
//! identical for every run on the same input.

use crate::core::{Entity, Error, Relation, Result};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct AuthorityGraph {
    entities: BTreeMap<String, Entity>,
    relations: BTreeMap<(String, String), Relation>,
    graph: DiGraph<String, ()>,
    node_map: HashMap<String, NodeIndex>,
}

impl AuthorityGraph {
    /// Build a graph from an explicit entity set and its relations.
    ///
    /// Fails with [`Error::EmptyGraph`] when there are no entities and with
    /// [`Error::MalformedGraph`] when any relation references an id outside
    /// the entity set. Duplicate entities and duplicate (source, target)
    /// relations collapse to their first occurrence.
    pub fn new(
        entities: impl IntoIterator<Item = Entity>,
        relations: impl IntoIterator<Item = Relation>,
    ) -> Result<Self> {
        let mut entity_set: BTreeMap<String, Entity> = BTreeMap::new();
        for entity in entities {
            entity_set.entry(entity.id.clone()).or_insert(entity);
        }

        if entity_set.is_empty() {
            return Err(Error::EmptyGraph);
        }

        let mut relation_set: BTreeMap<(String, String), Relation> = BTreeMap::new();
        let mut duplicates = 0usize;
        for relation in relations {
            for endpoint in [&relation.source, &relation.target] {
                if !entity_set.contains_key(endpoint) {
                    return Err(Error::malformed_graph(
                        &relation.source,
                        &relation.target,
                        endpoint,
                    ));
                }
            }

            let key = (relation.source.clone(), relation.target.clone());
            if relation_set.contains_key(&key) {
                duplicates += 1;
                continue;
            }
            relation_set.insert(key, relation);
        }

        if duplicates > 0 {
            debug!(duplicates, "Dropped duplicate relations");
        }

        let mut graph = DiGraph::with_capacity(entity_set.len(), relation_set.len());
        let mut node_map = HashMap::with_capacity(entity_set.len());
        for id in entity_set.keys() {
            let idx = graph.add_node(id.clone());
            node_map.insert(id.clone(), idx);
        }
        for (source, target) in relation_set.keys() {
            graph.add_edge(node_map[source], node_map[target], ());
        }

        debug!(
            entities = graph.node_count(),
            relations = graph.edge_count(),
            "Built authority graph"
        );

        Ok(Self {
            entities: entity_set,
            relations: relation_set,
            graph,
            node_map,
        })
    }

    /// Build a graph whose entity set is inferred from relation endpoints.
    pub fn from_relations(relations: impl IntoIterator<Item = Relation>) -> Result<Self> {
        let relations: Vec<Relation> = relations.into_iter().collect();
        let entities: Vec<Entity> = relations
            .iter()
            .flat_map(|r| [Entity::new(&r.source), Entity::new(&r.target)])
            .collect();
        Self::new(entities, relations)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entities.contains_key(id)
    }

    /// Entities in lexicographic id order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Relations ordered by source, then target
    pub fn relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.values()
    }

    /// The raw command graph (edges point from commander to commanded)
    pub fn command_graph(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    /// Entities directly commanded by `id`, sorted by id
    pub fn subordinates(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Outgoing)
    }

    /// Entities directly commanding `id`, sorted by id
    pub fn superiors(&self, id: &str) -> Vec<&str> {
        self.neighbors(id, Direction::Incoming)
    }

    fn neighbors(&self, id: &str, direction: Direction) -> Vec<&str> {
        let Some(&idx) = self.node_map.get(id) else {
            return Vec::new();
        };
        let mut ids: Vec<&str> = self
            .graph
            .neighbors_directed(idx, direction)
            .map(|n| self.graph[n].as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Produce a new adjacency structure with every edge flipped.
    ///
    /// Node indices are preserved, so index `i` names the same entity in
    /// both graphs.
    pub fn reversed(&self) -> DiGraph<String, ()> {
        let mut reversed = DiGraph::with_capacity(self.graph.node_count(), self.graph.edge_count());
        for idx in self.graph.node_indices() {
            reversed.add_node(self.graph[idx].clone());
        }
        for edge in self.graph.raw_edges() {
            reversed.add_edge(edge.target(), edge.source(), ());
        }
        reversed
    }
}
