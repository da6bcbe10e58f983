//! BEL graph data structures

mod bel_graph;
mod document;
mod edge;
mod node;
mod traits;


pub use bel_graph::{BelGraph, NodeId};
pub use document::{GraphDocument, LinkRecord};
pub use edge::{EdgeData, EdgeKey, Modifier, ModifierKind, Relation};
pub use node::{Entity, Function};
pub use traits::KeyedGraph;
