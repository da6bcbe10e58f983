//! Shared fixtures for conversion tests

pub mod graph_builder;

pub use graph_builder::{pathway_graph, GraphBuilder};
