//! Node-link JSON interchange format for BEL graphs

use super::bel_graph::BelGraph;
use super::edge::{EdgeData, EdgeKey};
use super::node::Entity;
use crate::error::{KeenError, KeenResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// A graph as stored on disk: a node list and links between node indexes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub nodes: Vec<Entity>,
    #[serde(default)]
    pub links: Vec<LinkRecord>,
}

/// One edge in a [`GraphDocument`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub source: usize,
    pub target: usize,
    /// Derived from the data when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<EdgeKey>,
    #[serde(flatten)]
    pub data: EdgeData,
}

impl GraphDocument {
    /// Build the in-memory graph, checking every link endpoint
    pub fn into_graph(self) -> KeenResult<BelGraph> {
        let mut graph = BelGraph::new();
        graph.name = self.name;
        graph.version = self.version;

        let ids: Vec<_> = self.nodes.into_iter().map(|n| graph.add_node(n)).collect();
        for link in self.links {
            let source = *ids
                .get(link.source)
                .ok_or(KeenError::UnknownNode { index: link.source })?;
            let target = *ids
                .get(link.target)
                .ok_or(KeenError::UnknownNode { index: link.target })?;
            let key = match link.key {
                Some(key) => key,
                None => EdgeKey::for_data(&link.data)?,
            };
            graph.insert_edge(source, target, key, link.data);
        }
        Ok(graph)
    }
}

impl From<&BelGraph> for GraphDocument {
    fn from(graph: &BelGraph) -> Self {
        let links = graph
            .iter_edges()
            .map(|(source, target, key, data)| LinkRecord {
                source: source.index(),
                target: target.index(),
                key: Some(key.clone()),
                data: data.clone(),
            })
            .collect();
        Self {
            name: graph.name.clone(),
            version: graph.version.clone(),
            nodes: graph.nodes().to_vec(),
            links,
        }
    }
}

impl BelGraph {
    /// Read a graph document from any reader
    pub fn from_json_reader(reader: impl Read) -> KeenResult<Self> {
        let document: GraphDocument = serde_json::from_reader(reader)?;
        document.into_graph()
    }

    /// Read a graph document from a file
    pub fn from_json_path(path: impl AsRef<Path>) -> KeenResult<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_json_reader(BufReader::new(file))
    }

    /// Write this graph as a node-link document
    pub fn to_json_writer(&self, writer: impl Write) -> KeenResult<()> {
        serde_json::to_writer_pretty(writer, &GraphDocument::from(self))?;
        Ok(())
    }

    pub fn to_json_path(&self, path: impl AsRef<Path>) -> KeenResult<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.to_json_writer(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
