//! Whole-document commands: selection, replacement and snapshot restore.

use crate::{command::Command, model::DiagramState};

/// Replaces the selection with an owned copy of the given ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSelection {
    ids: Vec<String>,
}

impl SetSelection {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Clears the selection.
    pub fn clear() -> Self {
        Self { ids: Vec::new() }
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        DiagramState {
            selection: self.ids.clone(),
            ..state.clone()
        }
    }

    pub(super) fn invert(&self, prev: &DiagramState) -> Command {
        SetSelection::new(prev.selection.iter().cloned()).into()
    }
}

/// Adopts a whole new document, ignoring the current one.
///
/// Used for "new diagram" and for adopting imported documents. Always
/// invertible: the inverse replaces back to the prior document.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceState {
    state: Box<DiagramState>,
}

impl ReplaceState {
    pub fn new(state: DiagramState) -> Self {
        Self {
            state: Box::new(state),
        }
    }

    /// The document this command adopts.
    pub fn state(&self) -> &DiagramState {
        &self.state
    }

    pub(super) fn execute(&self, _state: &DiagramState) -> DiagramState {
        (*self.state).clone()
    }

    pub(super) fn invert(&self, prev: &DiagramState) -> Command {
        ReplaceState::new(prev.clone()).into()
    }
}

/// Snapshot fallback recorded by the history when a command has no precise
/// inverse. Restores an owned copy of the captured document.
#[derive(Debug, Clone, PartialEq)]
pub struct Restore {
    snapshot: Box<DiagramState>,
}

impl Restore {
    pub fn new(snapshot: DiagramState) -> Self {
        Self {
            snapshot: Box::new(snapshot),
        }
    }

    pub(super) fn execute(&self, _state: &DiagramState) -> DiagramState {
        (*self.snapshot).clone()
    }
}
