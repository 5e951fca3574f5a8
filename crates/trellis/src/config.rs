//! Configuration types for the Trellis editor.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every field is optional and falls back to the editor's
//! built-in defaults.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining editor and GraphML settings.
//! - [`EditorConfig`] - Defaults applied to nodes and edges created through the editor.
//! - [`GraphmlConfig`] - Options for the GraphML writer.
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.editor().node().node_type, "process");
//! assert!(!config.graphml().omit_default_shape());
//! ```

use serde::Deserialize;

use trellis_core::model::{EdgeDefaults, NodeDefaults};
use trellis_graphml::EncodeOptions;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Editor defaults section.
    #[serde(default)]
    editor: EditorConfig,

    /// GraphML section.
    #[serde(default)]
    graphml: GraphmlConfig,
}

impl AppConfig {
    pub fn new(editor: EditorConfig, graphml: GraphmlConfig) -> Self {
        Self { editor, graphml }
    }

    /// Returns the editor configuration.
    pub fn editor(&self) -> &EditorConfig {
        &self.editor
    }

    /// Returns the GraphML configuration.
    pub fn graphml(&self) -> &GraphmlConfig {
        &self.graphml
    }

    /// Returns a mutable reference to the GraphML configuration, for
    /// command-line overrides.
    pub fn graphml_mut(&mut self) -> &mut GraphmlConfig {
        &mut self.graphml
    }
}

/// Defaults completing partially specified nodes and edges.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    node: NodeDefaults,

    /// Edge defaults; `arrow_target` is the current arrow style.
    #[serde(default)]
    edge: EdgeDefaults,
}

impl EditorConfig {
    pub fn new(node: NodeDefaults, edge: EdgeDefaults) -> Self {
        Self { node, edge }
    }

    pub fn node(&self) -> &NodeDefaults {
        &self.node
    }

    pub fn edge(&self) -> &EdgeDefaults {
        &self.edge
    }
}

/// GraphML writer options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphmlConfig {
    /// Leave out `d_shape` for `rect` nodes.
    #[serde(default)]
    omit_default_shape: bool,
}

impl GraphmlConfig {
    pub fn new(omit_default_shape: bool) -> Self {
        Self { omit_default_shape }
    }

    pub fn omit_default_shape(&self) -> bool {
        self.omit_default_shape
    }

    pub fn set_omit_default_shape(&mut self, omit: bool) {
        self.omit_default_shape = omit;
    }

    /// The writer options this configuration describes.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            omit_default_shape: self.omit_default_shape,
        }
    }
}
