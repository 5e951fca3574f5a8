//! Structural validation of candidate documents.
//!
//! Imported documents are checked before they replace the current one. The
//! [`Validator`] trait is the seam: the editor holds a boxed validator and
//! calls it on every candidate, so stricter rule sets can be swapped in.
//!
//! ## Checks Performed by [`StructuralValidator`]
//!
//! - **Ids**: every node and edge has a non-empty id, unique within its collection
//! - **Geometry**: node positions are finite, sizes finite and positive
//! - **Styling**: stroke widths are finite, bend points finite
//!
//! Edge endpoints that name no node are accepted; dangling edges are part of
//! the document model.

use std::collections::HashSet;

use trellis_core::model::{DiagramEdge, DiagramNode, DiagramState};

/// The outcome of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// Human-readable problems, in document order.
    pub errors: Vec<String>,
}

impl Validation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Checks a candidate document before it is adopted.
pub trait Validator: Send + Sync {
    fn validate(&self, state: &DiagramState) -> Validation;
}

/// The built-in rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl Validator for StructuralValidator {
    fn validate(&self, state: &DiagramState) -> Validation {
        let mut checker = Checker::default();
        for node in &state.nodes {
            checker.visit_node(node);
        }
        for edge in &state.edges {
            checker.visit_edge(edge);
        }
        Validation::from_errors(checker.errors)
    }
}

/// Collects every problem in one pass instead of stopping at the first.
#[derive(Default)]
struct Checker<'a> {
    node_ids: HashSet<&'a str>,
    edge_ids: HashSet<&'a str>,
    errors: Vec<String>,
}

impl<'a> Checker<'a> {
    fn visit_node(&mut self, node: &'a DiagramNode) {
        if node.id.is_empty() {
            self.errors.push("node with empty id".to_string());
        } else if !self.node_ids.insert(&node.id) {
            self.errors.push(format!("duplicate node id `{}`", node.id));
        }

        for (field, value) in [("x", node.x), ("y", node.y)] {
            if !value.is_finite() {
                self.errors
                    .push(format!("node `{}` has non-finite {field}", node.id));
            }
        }
        for (field, value) in [("w", node.w), ("h", node.h)] {
            if !(value.is_finite() && value > 0.0) {
                self.errors
                    .push(format!("node `{}` has non-positive {field}", node.id));
            }
        }

        if let Some(width) = node.data.stroke_width {
            self.check_stroke_width("node", &node.id, width);
        }
    }

    fn visit_edge(&mut self, edge: &'a DiagramEdge) {
        if edge.id.is_empty() {
            self.errors.push("edge with empty id".to_string());
        } else if !self.edge_ids.insert(&edge.id) {
            self.errors.push(format!("duplicate edge id `{}`", edge.id));
        }

        if let Some(width) = edge.data.stroke_width {
            self.check_stroke_width("edge", &edge.id, width);
        }

        let mut points = edge.data.bend_points.iter().flatten();
        if points.any(|p| !(p.x.is_finite() && p.y.is_finite())) {
            self.errors
                .push(format!("edge `{}` has a non-finite bend point", edge.id));
        }
    }

    fn check_stroke_width(&mut self, kind: &str, id: &str, width: f64) {
        if !width.is_finite() {
            self.errors
                .push(format!("{kind} `{id}` has non-finite strokeWidth"));
        }
    }
}
