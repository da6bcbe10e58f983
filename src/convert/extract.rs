//! Triple extraction over a whole graph

use super::converters::ConverterRegistry;
use super::{get_triple_with, Triple};
use crate::graph::KeyedGraph;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;

/// Column names of a triple table
pub const COLUMNS: [&str; 3] = ["subject", "predicate", "object"];

/// Unique triples in sorted order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleTable {
    rows: Vec<Triple>,
}

impl TripleTable {
    /// Build a table from any triples, dropping duplicates and sorting
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let unique: BTreeSet<Triple> = triples.into_iter().collect();
        Self {
            rows: unique.into_iter().collect(),
        }
    }

    pub fn rows(&self) -> &[Triple] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.rows.iter()
    }

    pub fn into_rows(self) -> Vec<Triple> {
        self.rows
    }
}

impl FromIterator<Triple> for TripleTable {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self::from_triples(iter)
    }
}

impl<'a> IntoIterator for &'a TripleTable {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Convert every edge of `graph` with the standard rules
pub fn to_triples<G>(graph: &G) -> TripleTable
where
    G: KeyedGraph + ?Sized,
{
    to_triples_with(ConverterRegistry::standard(), graph, &ProgressBar::hidden())
}

/// Convert every edge of `graph` with `registry`, ticking `progress` once per edge
pub fn to_triples_with<G>(registry: &ConverterRegistry, graph: &G, progress: &ProgressBar) -> TripleTable
where
    G: KeyedGraph + ?Sized,
{
    let total = graph.number_of_edges();
    progress.set_length(total as u64);
    progress.set_message("preparing TSV");
    if let Ok(style) = ProgressStyle::with_template("{msg} {bar:40} {pos}/{len} edges") {
        progress.set_style(style);
    }
    tracing::debug!(edges = total, "converting graph");

    let table: TripleTable = graph
        .edges()
        .filter_map(|(u, v, key)| {
            progress.inc(1);
            get_triple_with(registry, graph, u, v, key)
        })
        .collect();

    progress.finish_and_clear();
    tracing::debug!(edges = total, triples = table.len(), "converted graph");
    table
}
