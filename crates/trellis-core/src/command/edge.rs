//! Edge commands.
//!
//! These mirror the node commands: additions invert to removals, removals
//! invert to an exact re-insertion at the original index.

use log::trace;

use crate::{
    command::{Command, DataChange},
    model::{DiagramEdge, DiagramState, EdgeData, EdgeDefaults, EdgeSpec},
};

/// Inserts an edge. Adding an id that already exists is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct AddEdge {
    edge: DiagramEdge,
    index: Option<usize>,
}

impl AddEdge {
    /// Completes `spec` with the built-in [`EdgeDefaults`] and appends it.
    pub fn new(spec: EdgeSpec) -> Self {
        Self::with_defaults(spec, &EdgeDefaults::default())
    }

    /// Completes `spec` with the given defaults and appends it.
    pub fn with_defaults(spec: EdgeSpec, defaults: &EdgeDefaults) -> Self {
        Self {
            edge: spec.build(defaults),
            index: None,
        }
    }

    /// Re-inserts an exact edge at `index`, applying no defaults.
    pub fn restore(edge: DiagramEdge, index: usize) -> Self {
        Self {
            edge,
            index: Some(index),
        }
    }

    pub fn edge(&self) -> &DiagramEdge {
        &self.edge
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        let mut next = state.clone();
        if state.edge(&self.edge.id).is_some() {
            trace!(edge_id = self.edge.id; "Edge already present, add skipped");
            return next;
        }

        match self.index {
            Some(index) => next
                .edges
                .insert(index.min(next.edges.len()), self.edge.clone()),
            None => next.edges.push(self.edge.clone()),
        }
        next
    }

    pub(super) fn invert(&self, prev: &DiagramState) -> Option<Command> {
        if prev.edge(&self.edge.id).is_some() {
            return None;
        }
        Some(RemoveEdge::new(self.edge.id.clone()).into())
    }
}

/// Removes an edge by id.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveEdge {
    id: String,
}

impl RemoveEdge {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        let mut next = state.clone();
        next.edges.retain(|edge| edge.id != self.id);
        next
    }

    pub(super) fn invert(&self, prev: &DiagramState) -> Option<Command> {
        let index = prev.edge_index(&self.id)?;
        Some(AddEdge::restore(prev.edges[index].clone(), index).into())
    }
}

/// The parts of an edge an [`UpdateEdgeProps`] touches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeChanges {
    pub edge_type: Option<String>,
    pub data: Option<DataChange<EdgeData>>,
}

impl EdgeChanges {
    /// Merge `patch` into the edge's data.
    pub fn merge(patch: EdgeData) -> Self {
        Self {
            edge_type: None,
            data: Some(DataChange::Merge(patch)),
        }
    }

    pub fn with_type(mut self, edge_type: impl Into<String>) -> Self {
        self.edge_type = Some(edge_type.into());
        self
    }
}

/// Updates an edge's `type` and/or `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateEdgeProps {
    id: String,
    changes: EdgeChanges,
}

impl UpdateEdgeProps {
    pub fn new(id: impl Into<String>, changes: EdgeChanges) -> Self {
        Self {
            id: id.into(),
            changes,
        }
    }

    pub fn changes(&self) -> &EdgeChanges {
        &self.changes
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        let mut next = state.clone();
        let Some(edge) = next.edges.iter_mut().find(|edge| edge.id == self.id) else {
            trace!(edge_id = self.id; "Edge not found, update skipped");
            return next;
        };

        if let Some(edge_type) = &self.changes.edge_type {
            edge.edge_type = edge_type.clone();
        }
        if let Some(change) = &self.changes.data {
            change.apply(&mut edge.data);
        }
        next
    }

    pub(super) fn invert(&self, prev: &DiagramState, next: &DiagramState) -> Option<Command> {
        let before = prev.edge(&self.id)?;
        let after = next.edge(&self.id)?;

        let changes = EdgeChanges {
            edge_type: (before.edge_type != after.edge_type).then(|| before.edge_type.clone()),
            data: (before.data != after.data).then(|| DataChange::Replace(before.data.clone())),
        };
        Some(UpdateEdgeProps::new(self.id.clone(), changes).into())
    }
}
