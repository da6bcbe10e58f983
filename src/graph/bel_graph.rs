//! BelGraph: in-memory keyed multigraph of BEL statements

use super::edge::{EdgeData, EdgeKey};
use super::node::Entity;
use super::traits::KeyedGraph;
use crate::error::KeenResult;
use std::collections::HashMap;

/// Index of a node within a [`BelGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct KeyedEdge {
    source: NodeId,
    target: NodeId,
    key: EdgeKey,
    data: EdgeData,
}

/// A directed multigraph of BEL entities
///
/// Nodes are deduplicated by value. Edges keep insertion order; an edge
/// added again under an existing `(source, target, key)` replaces the data.
#[derive(Debug, Clone, Default)]
pub struct BelGraph {
    /// Graph name, if the source document had one
    pub name: Option<String>,
    /// Graph version
    pub version: Option<String>,
    nodes: Vec<Entity>,
    node_index: HashMap<Entity, NodeId>,
    edges: Vec<KeyedEdge>,
    edge_index: HashMap<(NodeId, NodeId, EdgeKey), usize>,
}

impl BelGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a node, returning the existing id if the entity is already present
    pub fn add_node(&mut self, entity: Entity) -> NodeId {
        if let Some(id) = self.node_index.get(&entity) {
            return *id;
        }
        let id = NodeId(self.nodes.len());
        self.node_index.insert(entity.clone(), id);
        self.nodes.push(entity);
        id
    }

    /// Get a node by id
    pub fn node(&self, id: NodeId) -> Option<&Entity> {
        self.nodes.get(id.0)
    }

    /// Look up the id of an entity
    pub fn node_id(&self, entity: &Entity) -> Option<NodeId> {
        self.node_index.get(entity).copied()
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Entity] {
        &self.nodes
    }

    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Add a statement, keyed by a hash of its data
    ///
    /// Adding the same statement twice yields one edge.
    pub fn add_edge(&mut self, source: Entity, target: Entity, data: EdgeData) -> KeenResult<EdgeKey> {
        let key = EdgeKey::for_data(&data)?;
        Ok(self.add_edge_with_key(source, target, key, data))
    }

    /// Add a statement under an explicit key
    pub fn add_edge_with_key(
        &mut self,
        source: Entity,
        target: Entity,
        key: EdgeKey,
        data: EdgeData,
    ) -> EdgeKey {
        let source = self.add_node(source);
        let target = self.add_node(target);
        self.insert_edge(source, target, key, data)
    }

    /// Add a statement between nodes already in the graph
    pub(crate) fn insert_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        key: EdgeKey,
        data: EdgeData,
    ) -> EdgeKey {
        let slot = (source, target, key.clone());
        match self.edge_index.get(&slot) {
            Some(&position) => self.edges[position].data = data,
            None => {
                self.edge_index.insert(slot, self.edges.len());
                self.edges.push(KeyedEdge {
                    source,
                    target,
                    key: key.clone(),
                    data,
                });
            }
        }
        key
    }

    /// Whether any edge connects `source` to `target`
    pub fn has_edge(&self, source: &Entity, target: &Entity) -> bool {
        match (self.node_id(source), self.node_id(target)) {
            (Some(u), Some(v)) => self.edges.iter().any(|e| e.source == u && e.target == v),
            _ => false,
        }
    }

    /// Iterate `(source, target, key, data)` in insertion order
    pub fn iter_edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &EdgeKey, &EdgeData)> {
        self.edges.iter().map(|e| (e.source, e.target, &e.key, &e.data))
    }
}

impl KeyedGraph for BelGraph {
    fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (&Entity, &Entity, &EdgeKey)> + '_> {
        Box::new(
            self.edges
                .iter()
                .map(|e| (&self.nodes[e.source.0], &self.nodes[e.target.0], &e.key)),
        )
    }

    fn edge_data(&self, source: &Entity, target: &Entity, key: &EdgeKey) -> Option<&EdgeData> {
        let u = self.node_id(source)?;
        let v = self.node_id(target)?;
        let position = self.edge_index.get(&(u, v, key.clone()))?;
        self.edges.get(*position).map(|e| &e.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Function, Relation};

    #[test]
    fn nodes_are_deduplicated() {
        let mut graph = BelGraph::new();
        let a = graph.add_node(Entity::protein("HGNC", "FOS"));
        let b = graph.add_node(Entity::protein("HGNC", "FOS"));
        assert_eq!(a, b);
        assert_eq!(graph.number_of_nodes(), 1);
    }

    #[test]
    fn identical_statements_share_an_edge() {
        let mut graph = BelGraph::new();
        let fos = Entity::protein("HGNC", "FOS");
        let jun = Entity::protein("HGNC", "JUN");
        let data = EdgeData::new(Relation::Association);
        graph.add_edge(fos.clone(), jun.clone(), data.clone()).unwrap();
        graph.add_edge(fos, jun, data).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn different_statements_are_parallel_edges() {
        let mut graph = BelGraph::new();
        let fos = Entity::protein("HGNC", "FOS");
        let jun = Entity::protein("HGNC", "JUN");
        graph
            .add_edge(fos.clone(), jun.clone(), EdgeData::new(Relation::Association).with_citation("PMID:1"))
            .unwrap();
        graph
            .add_edge(fos.clone(), jun.clone(), EdgeData::new(Relation::Association).with_citation("PMID:2"))
            .unwrap();
        assert_eq!(graph.number_of_edges(), 2);
        assert!(graph.has_edge(&fos, &jun));
        assert!(!graph.has_edge(&jun, &fos));
    }

    #[test]
    fn edge_data_lookup_by_key() {
        let mut graph = BelGraph::new();
        let ap1 = Entity::new(Function::Complex, "FPLX", "AP1");
        let fos = Entity::protein("HGNC", "FOS");
        let key = graph.add_edge_with_key(
            ap1.clone(),
            fos.clone(),
            EdgeKey::from("k1"),
            EdgeData::new(Relation::HasComponent),
        );

        let data = graph.edge_data(&ap1, &fos, &key).unwrap();
        assert_eq!(data.relation, Relation::HasComponent);
        assert!(graph.edge_data(&fos, &ap1, &key).is_none());
        assert!(graph.edge_data(&ap1, &fos, &EdgeKey::from("missing")).is_none());
    }

    #[test]
    fn re_adding_a_key_replaces_data() {
        let mut graph = BelGraph::new();
        let a = Entity::protein("HGNC", "A");
        let b = Entity::protein("HGNC", "B");
        let key = EdgeKey::from("k");
        graph.add_edge_with_key(a.clone(), b.clone(), key.clone(), EdgeData::new(Relation::Increases));
        graph.add_edge_with_key(a.clone(), b.clone(), key.clone(), EdgeData::new(Relation::Decreases));
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.edge_data(&a, &b, &key).unwrap().relation, Relation::Decreases);
    }
}
