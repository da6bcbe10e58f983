//! BioKEEN: BEL graphs to knowledge-graph-embedding triples
//!
//! Converts biological expression language (BEL) graphs into flat
//! subject-predicate-object triples, the tabular input expected by
//! knowledge graph embedding pipelines.
//!
//! # Core Concepts
//!
//! - **Entities**: graph nodes, rendered as `namespace:identifier` (or name)
//! - **Converters**: ordered predicate/transform rules; the first rule that
//!   accepts an edge decides its triple
//! - **Triple tables**: unique, sorted triples written as headerless TSV
//!
//! # Example
//!
//! ```
//! use biokeen::{to_triples, BelGraph, EdgeData, Entity, Function, Relation};
//!
//! let mut graph = BelGraph::new();
//! graph
//!     .add_edge(
//!         Entity::new(Function::Complex, "FPLX", "AP1"),
//!         Entity::protein("HGNC", "FOS").with_identifier("3796"),
//!         EdgeData::new(Relation::HasComponent),
//!     )
//!     .unwrap();
//!
//! let table = to_triples(&graph);
//! assert_eq!(table.rows()[0].subject, "HGNC:3796");
//! ```

pub mod config;
pub mod convert;
pub mod database;
mod error;
pub mod export;
mod graph;

pub use config::Config;
pub use convert::{
    get_triple, get_triple_with, to_triples, to_triples_with, Converter, ConverterRegistry, Triple,
    TripleTable,
};
pub use database::Database;
pub use error::{KeenError, KeenResult};
pub use export::{get_summary, read_table, write_summary, write_table, write_table_to, Summary};
pub use graph::{
    BelGraph, EdgeData, EdgeKey, Entity, Function, GraphDocument, KeyedGraph, LinkRecord, Modifier,
    ModifierKind, NodeId, Relation,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
