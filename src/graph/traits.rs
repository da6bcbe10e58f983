//! The graph contract the converter reads from

use super::edge::{EdgeData, EdgeKey};
use super::node::Entity;

/// A directed multigraph whose parallel edges are told apart by key.
///
/// This is all the conversion engine needs from a graph: enumerate keyed
/// edges, look up the data of one edge, and render an edge back to BEL
/// for diagnostics. Implementations are only ever borrowed immutably.
pub trait KeyedGraph {
    /// Number of keyed edges
    fn number_of_edges(&self) -> usize;

    /// Iterate over `(source, target, key)` for every edge
    fn edges(&self) -> Box<dyn Iterator<Item = (&Entity, &Entity, &EdgeKey)> + '_>;

    /// Data for the edge identified by `(source, target, key)`
    fn edge_data(&self, source: &Entity, target: &Entity, key: &EdgeKey) -> Option<&EdgeData>;

    /// Render an edge as a BEL statement
    fn edge_to_bel(&self, source: &Entity, target: &Entity, data: &EdgeData) -> String {
        data.to_bel(source, target)
    }
}
