//! Conversion of BEL edges into subject-predicate-object triples
//!
//! Each edge is offered to the rules of a [`ConverterRegistry`] in priority
//! order; the first rule whose predicate accepts it produces the triple.
//! Edges no rule accepts are logged and skipped.

pub mod converters;
mod extract;

pub use converters::{Converter, ConverterRegistry};
pub use extract::{to_triples, to_triples_with, TripleTable, COLUMNS};

use crate::graph::{EdgeKey, Entity, KeyedGraph};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One output row
///
/// Field order gives the lexicographic `(subject, predicate, object)` ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Triple {
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.subject, self.predicate, self.object)
    }
}

/// Classify one edge with the standard rules
pub fn get_triple<G>(graph: &G, u: &Entity, v: &Entity, key: &EdgeKey) -> Option<Triple>
where
    G: KeyedGraph + ?Sized,
{
    get_triple_with(ConverterRegistry::standard(), graph, u, v, key)
}

/// Classify one edge against `registry`, first match wins
///
/// Returns `None` for edges no rule handles; those are reported at info
/// level with their BEL statement.
pub fn get_triple_with<G>(
    registry: &ConverterRegistry,
    graph: &G,
    u: &Entity,
    v: &Entity,
    key: &EdgeKey,
) -> Option<Triple>
where
    G: KeyedGraph + ?Sized,
{
    let Some(data) = graph.edge_data(u, v, key) else {
        tracing::warn!(source = %u, target = %v, key = %key, "edge has no data");
        return None;
    };

    match registry.find(u, v, key, data) {
        Some(converter) => {
            tracing::trace!(rule = converter.name(), "converted edge");
            Some(converter.convert(u, v, key, data))
        }
        None => {
            tracing::info!("unhandled: {}", graph.edge_to_bel(u, v, data));
            None
        }
    }
}
