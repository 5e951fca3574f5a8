//! Trellis - A diagram editor core with undoable commands and GraphML interchange.
//!
//! The [`Editor`] ties the pieces together: it owns the command history,
//! completes new nodes and edges from the configured defaults, and moves
//! whole documents in and out as Diagram JSON or GraphML.

pub mod catalog;
pub mod config;
pub mod validate;

mod error;

pub use trellis_core::{color, command, history, model};
pub use trellis_graphml::{DecodeError, DecodeStats, Warning, WarningCode};

pub use error::TrellisError;

use log::{debug, info, trace};

use trellis_core::{
    command::{AddEdge, AddNode, Command, ReplaceState},
    history::History,
    model::{DiagramState, EdgeSpec, NodeSpec},
};

use config::AppConfig;
use validate::{StructuralValidator, Validator};

/// Editing session over one diagram document.
///
/// Every change goes through the undo history, including whole-document
/// replacements such as imports and [`Editor::new_diagram`].
///
/// # Examples
///
/// ```rust
/// use trellis::{Editor, config::AppConfig, model::{EdgeSpec, NodeSpec}};
///
/// let mut editor = Editor::new(AppConfig::default());
///
/// let a = editor.add_node(NodeSpec::default().at(40.0, 40.0));
/// let b = editor.add_node(NodeSpec::default().at(240.0, 40.0));
/// editor.add_edge(EdgeSpec::between(&a, &b));
/// assert_eq!(editor.state().edges.len(), 1);
///
/// let xml = editor.export_graphml();
/// editor.new_diagram();
/// let warnings = editor.import_graphml(&xml).expect("valid GraphML");
/// assert!(warnings.is_empty());
/// assert_eq!(editor.state().nodes.len(), 2);
/// ```
pub struct Editor {
    config: AppConfig,
    history: History,
    validator: Box<dyn Validator>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Editor {
    /// Create an editor over an empty document.
    ///
    /// # Arguments
    ///
    /// * `config` - Defaults for new elements and GraphML writer options
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            history: History::default(),
            validator: Box::new(StructuralValidator),
        }
    }

    /// Replace the validator run on imported documents.
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The current document.
    pub fn state(&self) -> &DiagramState {
        self.history.state()
    }

    /// The undo history, for inspection.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Execute `cmd` and record it for undo.
    pub fn dispatch(&mut self, cmd: Command) -> bool {
        self.history.dispatch(cmd)
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Add a node completed from the configured node defaults.
    ///
    /// Returns the id of the node, generated when `spec` has none.
    pub fn add_node(&mut self, spec: NodeSpec) -> String {
        let cmd = AddNode::with_defaults(spec, self.config.editor().node());
        let id = cmd.node().id.clone();
        self.dispatch(cmd.into());
        id
    }

    /// Add an edge completed from the configured edge defaults.
    ///
    /// Returns the id of the edge, generated when `spec` has none.
    pub fn add_edge(&mut self, spec: EdgeSpec) -> String {
        let cmd = AddEdge::with_defaults(spec, self.config.editor().edge());
        let id = cmd.edge().id.clone();
        self.dispatch(cmd.into());
        id
    }

    /// Replace the document with an empty one. Undoable.
    pub fn new_diagram(&mut self) {
        info!("Starting new diagram");
        self.dispatch(ReplaceState::new(DiagramState::default()).into());
    }

    /// Replace the document with a built-in example. Undoable.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::UnknownExample`] if no example is registered
    /// under `name`.
    pub fn load_example(&mut self, name: &str) -> Result<(), TrellisError> {
        let diagram = catalog::example(name)
            .ok_or_else(|| TrellisError::UnknownExample(name.to_string()))?;

        info!(example = name; "Loading example");
        self.adopt(diagram)
    }

    /// Replace the document with one read from Diagram JSON. Undoable.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError` if the JSON does not describe a diagram or the
    /// diagram fails validation. The current document is left untouched.
    pub fn import_json(&mut self, json: &str) -> Result<(), TrellisError> {
        info!("Importing diagram JSON");
        let diagram: DiagramState = serde_json::from_str(json)?;
        self.adopt(diagram)
    }

    /// The current document as pretty-printed Diagram JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::Json`] if an extension value cannot be
    /// serialized.
    pub fn export_json(&self) -> Result<String, TrellisError> {
        Ok(serde_json::to_string_pretty(self.state())?)
    }

    /// Replace the document with one read from GraphML. Undoable.
    ///
    /// Decoding is lenient: dropped or defaulted fields are reported in the
    /// returned warnings rather than failing the import.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::GraphMl`] if the XML is malformed or has no
    /// `<graph>`, and [`TrellisError::Validation`] if the decoded document
    /// fails validation. The current document is left untouched.
    pub fn import_graphml(&mut self, xml: &str) -> Result<Vec<Warning>, TrellisError> {
        info!("Importing GraphML");

        let decoded = trellis_graphml::decode(xml)
            .map_err(|err| TrellisError::new_graphml_error(err, xml))?;

        debug!(
            warnings = decoded.warnings.len(),
            vendor_namespaces = decoded.stats.vendor_namespaces.len();
            "GraphML decoded"
        );
        trace!(stats:? = decoded.stats; "Decode stats");

        self.adopt(decoded.diagram)?;
        Ok(decoded.warnings)
    }

    /// The current document as GraphML.
    pub fn export_graphml(&self) -> String {
        trellis_graphml::encode(self.state(), &self.config.graphml().encode_options())
    }

    /// Validate a candidate document and make it current.
    fn adopt(&mut self, candidate: DiagramState) -> Result<(), TrellisError> {
        let validation = self.validator.validate(&candidate);
        if !validation.valid {
            debug!(errors = validation.errors.len(); "Candidate document rejected");
            return Err(TrellisError::Validation(validation.errors));
        }

        debug!(
            nodes = candidate.nodes.len(),
            edges = candidate.edges.len();
            "Adopting document"
        );
        self.dispatch(ReplaceState::new(candidate).into());
        Ok(())
    }
}
