//! Partial node and edge descriptions and the defaults that complete them.
//!
//! [`NodeSpec`] and [`EdgeSpec`] are what a caller hands to the add commands:
//! every field is optional. [`NodeDefaults`] and [`EdgeDefaults`] fill the
//! gaps. Defaults are always passed explicitly, never read from global state,
//! so the same spec produces the same node under the same defaults.

use serde::Deserialize;
use uuid::Uuid;

use crate::{
    color::Color,
    model::{
        data::{EdgeData, NodeData},
        diagram::{DiagramEdge, DiagramNode, EdgeEnd},
        style::ArrowKind,
    },
};

/// A fresh, globally unique element id.
pub fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// A partially specified node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSpec {
    pub id: Option<String>,
    pub node_type: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub w: Option<f64>,
    pub h: Option<f64>,
    pub data: NodeData,
}

impl NodeSpec {
    /// A spec that only fixes the id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn node_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn size(mut self, w: f64, h: f64) -> Self {
        self.w = Some(w);
        self.h = Some(h);
        self
    }

    pub fn data(mut self, data: NodeData) -> Self {
        self.data = data;
        self
    }

    /// Completes the spec into a node.
    pub fn build(self, defaults: &NodeDefaults) -> DiagramNode {
        let mut data = self.data;
        if data.text_color.is_none() {
            data.text_color = defaults.text_color.clone();
        }
        if data.background_color.is_none() {
            data.background_color = defaults.background_color.clone();
        }

        DiagramNode {
            id: self.id.unwrap_or_else(fresh_id),
            node_type: self.node_type.unwrap_or_else(|| defaults.node_type.clone()),
            x: self.x.unwrap_or(0.0),
            y: self.y.unwrap_or(0.0),
            w: self.w.unwrap_or(defaults.width),
            h: self.h.unwrap_or(defaults.height),
            data,
        }
    }
}

/// Values used for fields a [`NodeSpec`] leaves unset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeDefaults {
    #[serde(rename = "type")]
    pub node_type: String,
    pub width: f64,
    pub height: f64,
    pub text_color: Option<Color>,
    pub background_color: Option<Color>,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            node_type: "process".to_string(),
            width: 160.0,
            height: 60.0,
            text_color: Color::new("#000000").ok(),
            background_color: Color::new("#ADD8E6").ok(),
        }
    }
}

/// A partially specified edge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeSpec {
    pub id: Option<String>,
    pub edge_type: Option<String>,
    pub source: String,
    pub target: String,
    pub data: EdgeData,
}

impl EdgeSpec {
    /// An edge between two nodes.
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn edge_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }

    pub fn data(mut self, data: EdgeData) -> Self {
        self.data = data;
        self
    }

    /// Completes the spec into an edge.
    pub fn build(self, defaults: &EdgeDefaults) -> DiagramEdge {
        let mut data = self.data;
        if data.arrow_target.is_none() {
            data.arrow_target = defaults.arrow_target;
        }

        DiagramEdge {
            id: self.id.unwrap_or_else(fresh_id),
            source: EdgeEnd::new(self.source),
            target: EdgeEnd::new(self.target),
            edge_type: self.edge_type.unwrap_or_else(|| defaults.edge_type.clone()),
            data,
        }
    }
}

/// Values used for fields an [`EdgeSpec`] leaves unset.
///
/// `arrow_target` is the editor's "current arrow style" toggle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EdgeDefaults {
    #[serde(rename = "type")]
    pub edge_type: String,
    pub arrow_target: Option<ArrowKind>,
}

impl Default for EdgeDefaults {
    fn default() -> Self {
        Self {
            edge_type: "default".to_string(),
            arrow_target: None,
        }
    }
}
