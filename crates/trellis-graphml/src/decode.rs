//! GraphML reader.
//!
//! Decoding is defensive. Only two problems are fatal: input that is not
//! well-formed XML and a document without a `<graph>` element. Everything
//! else is handled per element:
//!
//! 1. collect the element's attributes and `<data>` children,
//! 2. validate each field on its own, dropping (with a [`Warning`]) the ones
//!    that fail,
//! 3. accept the element with its validated and defaulted fields, or skip it
//!    whole when a required field is missing.
//!
//! A field failure never rejects an element, and a rejected element never
//! leaves a partial trace in the result.

mod blob;
mod edge;
mod node;

use std::collections::HashSet;

use log::debug;
use roxmltree::{Document, Node};

use trellis_core::model::{DiagramState, Metadata};

use crate::{
    error::{DecodeError, Warning, WarningCode, WarningCollector},
    keys,
    span::Span,
};

/// Default title for documents that declare none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Default model version for documents that declare none.
pub const DEFAULT_MODEL_VERSION: &str = "1.0.0";

/// Counters describing what a decode dropped or defaulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Node and edge stroke colors that failed validation.
    pub invalid_stroke_colors: usize,
    /// Node and edge stroke widths that were not finite positive numbers.
    pub invalid_stroke_widths: usize,
    /// Node background and text colors that failed validation.
    pub invalid_colors: usize,
    /// Nodes without a shape, defaulted to `rect`.
    pub missing_shape: usize,
    /// Nodes with an unrecognized shape, downgraded to `rect`.
    pub unknown_shapes: usize,
    pub unknown_node_keys: usize,
    pub unknown_edge_keys: usize,
    /// Prefixed vendor namespace URIs declared on the root (yFiles and the
    /// like). Recorded only; vendor data is never interpreted.
    pub vendor_namespaces: Vec<String>,
}

/// The result of a successful decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    /// The candidate document. Its selection is always empty.
    pub diagram: DiagramState,
    /// Recoverable problems, in encounter order.
    pub warnings: Vec<Warning>,
    pub stats: DecodeStats,
}

impl Decoded {
    /// The plain warning messages, in encounter order.
    pub fn messages(&self) -> Vec<&str> {
        self.warnings.iter().map(Warning::message).collect()
    }
}

/// Parses a GraphML document into a candidate [`DiagramState`].
///
/// # Errors
///
/// Returns [`DecodeError::Xml`] if `xml` is not well-formed and
/// [`DecodeError::MissingGraph`] if it contains no `<graph>` element.
pub fn decode(xml: &str) -> Result<Decoded, DecodeError> {
    let doc = Document::parse(xml)?;
    let mut collector = WarningCollector::new();

    collector.stats().vendor_namespaces = vendor_namespaces(doc.root_element());

    let graph = doc
        .descendants()
        .find(|n| is_element(n, "graph"))
        .ok_or(DecodeError::MissingGraph)?;

    let mut title = DEFAULT_TITLE.to_string();
    let mut model_version = DEFAULT_MODEL_VERSION.to_string();
    for (key, value, _) in data_children(graph) {
        match key {
            Some(keys::graph::TITLE) if !value.is_empty() => title = value,
            Some(keys::graph::MODEL_VERSION) if !value.is_empty() => model_version = value,
            _ => {}
        }
    }

    let mut nodes = Vec::new();
    let mut node_ids = HashSet::new();
    for element in graph.descendants().filter(|n| is_element(n, "node")) {
        let Some(id) = element.attribute("id").filter(|id| !id.is_empty()) else {
            collector.emit(
                Warning::new(WarningCode::W001, "Node missing id skipped").with_span(span_of(element)),
            );
            continue;
        };
        if node_ids.contains(id) {
            collector.emit(
                Warning::new(WarningCode::W002, format!("Duplicate node id {id} skipped"))
                    .with_span(span_of(element)),
            );
            continue;
        }

        if let Some(node) = node::decode_node(element, id, &mut collector) {
            node_ids.insert(id);
            nodes.push(node);
        }
    }

    let mut edges = Vec::new();
    let mut edge_ids = HashSet::new();
    for element in graph.descendants().filter(|n| is_element(n, "edge")) {
        let attr = |name: &str| element.attribute(name).filter(|v| !v.is_empty());
        let (Some(id), Some(source), Some(target)) = (attr("id"), attr("source"), attr("target"))
        else {
            collector.emit(
                Warning::new(WarningCode::W003, "Edge missing id/source/target skipped")
                    .with_span(span_of(element)),
            );
            continue;
        };
        if !edge_ids.insert(id) {
            collector.emit(
                Warning::new(WarningCode::W004, format!("Duplicate edge id {id} skipped"))
                    .with_span(span_of(element)),
            );
            continue;
        }

        edges.push(edge::decode_edge(element, id, source, target, &mut collector));
    }

    let diagram = DiagramState {
        schema_version: model_version,
        nodes,
        edges,
        selection: Vec::new(),
        metadata: Metadata { title },
    };
    let (warnings, stats) = collector.finish();

    debug!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        warnings = warnings.len();
        "Decoded GraphML"
    );

    Ok(Decoded {
        diagram,
        warnings,
        stats,
    })
}

/// Prefixed namespaces on `root` that point at a known vendor extension.
fn vendor_namespaces(root: Node) -> Vec<String> {
    root.namespaces()
        .filter(|ns| ns.name().is_some())
        .map(|ns| ns.uri())
        .filter(|uri| {
            let uri = uri.to_ascii_lowercase();
            uri.contains("yworks") || uri.contains("yfiles") || uri.contains("y:")
        })
        .map(str::to_string)
        .collect()
}

fn is_element(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn span_of(node: Node) -> Span {
    Span::new(node.range())
}

/// The `<data>` children of `element` as `(key, text, span)`.
///
/// The text is the concatenation of every text node below the `<data>`
/// element, so CDATA sections and nested markup both read naturally.
fn data_children<'a, 'input>(
    element: Node<'a, 'input>,
) -> impl Iterator<Item = (Option<&'a str>, String, Span)> {
    element
        .children()
        .filter(|n| is_element(n, "data"))
        .map(|data| {
            let text: String = data
                .descendants()
                .filter(Node::is_text)
                .filter_map(|n| n.text())
                .collect();
            (data.attribute("key"), text, span_of(data))
        })
}
