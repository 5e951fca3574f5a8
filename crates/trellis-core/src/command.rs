//! Reversible state transitions.
//!
//! A [`Command`] is a self-contained description of one change to a
//! [`DiagramState`]. Every command can be executed, and most can compute a
//! precise inverse from the states immediately before and after their own
//! execution:
//!
//! ```text
//! prev --execute--> next
//! next --invert(prev, next).execute--> prev (structurally)
//! ```
//!
//! Commands never fail. A command that targets a missing id executes as a
//! no-op and reports no inverse; the [`History`](crate::history::History)
//! then records a [`Restore`] snapshot instead, which is coarser but always
//! correct.
//!
//! # Organization
//!
//! - [`node`] - [`AddNode`], [`RemoveNode`], [`MoveNode`], [`UpdateNodeProps`]
//! - [`edge`] - [`AddEdge`], [`RemoveEdge`], [`UpdateEdgeProps`]
//! - [`document`] - [`SetSelection`], [`ReplaceState`], [`Restore`]

pub mod document;
pub mod edge;
pub mod node;

pub use document::{ReplaceState, Restore, SetSelection};
pub use edge::{AddEdge, EdgeChanges, RemoveEdge, UpdateEdgeProps};
pub use node::{AddNode, MoveNode, NodeChanges, RemoveNode, UpdateNodeProps};

use crate::model::{DiagramState, EdgeData, NodeData};

/// How a props update treats the element's `data` payload.
#[derive(Debug, Clone, PartialEq)]
pub enum DataChange<T> {
    /// Shallow merge: set fields and extension keys override, the rest stays.
    Merge(T),
    /// Swap the whole payload.
    Replace(T),
}

impl DataChange<NodeData> {
    fn apply(&self, data: &mut NodeData) {
        match self {
            DataChange::Merge(patch) => data.merge(patch.clone()),
            DataChange::Replace(payload) => *data = payload.clone(),
        }
    }
}

impl DataChange<EdgeData> {
    fn apply(&self, data: &mut EdgeData) {
        match self {
            DataChange::Merge(patch) => data.merge(patch.clone()),
            DataChange::Replace(payload) => *data = payload.clone(),
        }
    }
}

/// One document transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddNode(AddNode),
    RemoveNode(RemoveNode),
    MoveNode(MoveNode),
    UpdateNodeProps(UpdateNodeProps),
    AddEdge(AddEdge),
    RemoveEdge(RemoveEdge),
    UpdateEdgeProps(UpdateEdgeProps),
    SetSelection(SetSelection),
    ReplaceState(ReplaceState),
    Restore(Restore),
}

impl Command {
    /// Stable name of the command kind, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddNode(_) => "addNode",
            Command::RemoveNode(_) => "removeNode",
            Command::MoveNode(_) => "moveNode",
            Command::UpdateNodeProps(_) => "updateNodeProps",
            Command::AddEdge(_) => "addEdge",
            Command::RemoveEdge(_) => "removeEdge",
            Command::UpdateEdgeProps(_) => "updateEdgeProps",
            Command::SetSelection(_) => "setSelection",
            Command::ReplaceState(_) => "replaceState",
            Command::Restore(_) => "snapshot",
        }
    }

    /// Applies the command to `state`, producing the next state.
    ///
    /// The input is never modified.
    pub fn execute(&self, state: &DiagramState) -> DiagramState {
        match self {
            Command::AddNode(cmd) => cmd.execute(state),
            Command::RemoveNode(cmd) => cmd.execute(state),
            Command::MoveNode(cmd) => cmd.execute(state),
            Command::UpdateNodeProps(cmd) => cmd.execute(state),
            Command::AddEdge(cmd) => cmd.execute(state),
            Command::RemoveEdge(cmd) => cmd.execute(state),
            Command::UpdateEdgeProps(cmd) => cmd.execute(state),
            Command::SetSelection(cmd) => cmd.execute(state),
            Command::ReplaceState(cmd) => cmd.execute(state),
            Command::Restore(cmd) => cmd.execute(state),
        }
    }

    /// Builds the command that takes `next` back to `prev`.
    ///
    /// `prev` and `next` must be the states immediately before and after this
    /// command's own execution. `None` means no precise inverse exists.
    pub fn invert(&self, prev: &DiagramState, next: &DiagramState) -> Option<Command> {
        match self {
            Command::AddNode(cmd) => cmd.invert(prev),
            Command::RemoveNode(cmd) => cmd.invert(prev),
            Command::MoveNode(cmd) => cmd.invert(prev),
            Command::UpdateNodeProps(cmd) => cmd.invert(prev, next),
            Command::AddEdge(cmd) => cmd.invert(prev),
            Command::RemoveEdge(cmd) => cmd.invert(prev),
            Command::UpdateEdgeProps(cmd) => cmd.invert(prev, next),
            Command::SetSelection(cmd) => Some(cmd.invert(prev)),
            Command::ReplaceState(cmd) => Some(cmd.invert(prev)),
            Command::Restore(_) => None,
        }
    }
}

macro_rules! impl_from_command {
    ($($variant:ident),+ $(,)?) => {
        $(
            impl From<$variant> for Command {
                fn from(cmd: $variant) -> Self {
                    Command::$variant(cmd)
                }
            }
        )+
    };
}

impl_from_command!(
    AddNode,
    RemoveNode,
    MoveNode,
    UpdateNodeProps,
    AddEdge,
    RemoveEdge,
    UpdateEdgeProps,
    SetSelection,
    ReplaceState,
    Restore,
);
