//! The diagram document.

use serde::{Deserialize, Serialize};

use crate::model::data::{EdgeData, NodeData};

/// The complete document being edited.
///
/// A `DiagramState` is a plain value: commands read one and produce the next,
/// and the history keeps independent copies for undo. Node and edge ids are
/// unique within their collections. Edge endpoints are *not* checked against
/// the node collection; consumers must tolerate dangling references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramState {
    pub schema_version: String,
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    #[serde(default)]
    pub selection: Vec<String>,
    pub metadata: Metadata,
}

impl DiagramState {
    /// Schema version stamped on freshly created documents.
    pub const SCHEMA_VERSION: &'static str = "1.0.0";

    /// Title of freshly created documents.
    pub const UNTITLED: &'static str = "Untitled Diagram";

    /// An empty document with the given title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            metadata: Metadata {
                title: title.into(),
            },
            ..Self::default()
        }
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Position of a node in the node sequence.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|node| node.id == id)
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&DiagramEdge> {
        self.edges.iter().find(|edge| edge.id == id)
    }

    /// Position of an edge in the edge sequence.
    pub fn edge_index(&self, id: &str) -> Option<usize> {
        self.edges.iter().position(|edge| edge.id == id)
    }

    /// Edges whose source or target does not name an existing node.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &DiagramEdge> {
        self.edges.iter().filter(|edge| {
            self.node(&edge.source.node_id).is_none() || self.node(&edge.target.node_id).is_none()
        })
    }
}

impl Default for DiagramState {
    fn default() -> Self {
        Self {
            schema_version: Self::SCHEMA_VERSION.to_string(),
            nodes: Vec::new(),
            edges: Vec::new(),
            selection: Vec::new(),
            metadata: Metadata {
                title: Self::UNTITLED.to_string(),
            },
        }
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
}

/// A placed, sized node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub id: String,
    /// Free-form category, also used as the fallback label.
    #[serde(rename = "type")]
    pub node_type: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default, skip_serializing_if = "NodeData::is_empty")]
    pub data: NodeData,
}

/// One end of an edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeEnd {
    pub node_id: String,
}

impl EdgeEnd {
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
        }
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub id: String,
    pub source: EdgeEnd,
    pub target: EdgeEnd,
    #[serde(rename = "type")]
    pub edge_type: String,
    #[serde(default, skip_serializing_if = "EdgeData::is_empty")]
    pub data: EdgeData,
}
