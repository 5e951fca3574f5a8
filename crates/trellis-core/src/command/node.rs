//! Node commands.

use log::trace;

use crate::{
    command::{Command, DataChange},
    model::{DiagramNode, DiagramState, NodeData, NodeDefaults, NodeSpec},
};

/// Inserts a node.
///
/// Built from a [`NodeSpec`], the node is completed up front so executing the
/// command twice inserts the same node. Adding an id that already exists is a
/// no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct AddNode {
    node: DiagramNode,
    index: Option<usize>,
}

impl AddNode {
    /// Completes `spec` with the built-in [`NodeDefaults`] and appends it.
    pub fn new(spec: NodeSpec) -> Self {
        Self::with_defaults(spec, &NodeDefaults::default())
    }

    /// Completes `spec` with the given defaults and appends it.
    pub fn with_defaults(spec: NodeSpec, defaults: &NodeDefaults) -> Self {
        Self {
            node: spec.build(defaults),
            index: None,
        }
    }

    /// Re-inserts an exact node at `index`, applying no defaults.
    pub fn restore(node: DiagramNode, index: usize) -> Self {
        Self {
            node,
            index: Some(index),
        }
    }

    /// The node this command inserts.
    pub fn node(&self) -> &DiagramNode {
        &self.node
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        let mut next = state.clone();
        if state.node(&self.node.id).is_some() {
            trace!(node_id = self.node.id; "Node already present, add skipped");
            return next;
        }

        match self.index {
            Some(index) => next
                .nodes
                .insert(index.min(next.nodes.len()), self.node.clone()),
            None => next.nodes.push(self.node.clone()),
        }
        next
    }

    pub(super) fn invert(&self, prev: &DiagramState) -> Option<Command> {
        if prev.node(&self.node.id).is_some() {
            return None;
        }
        Some(RemoveNode::new(self.node.id.clone()).into())
    }
}

/// Removes a node by id.
///
/// Edges attached to the node are left in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveNode {
    id: String,
}

impl RemoveNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        let mut next = state.clone();
        next.nodes.retain(|node| node.id != self.id);
        next
    }

    pub(super) fn invert(&self, prev: &DiagramState) -> Option<Command> {
        let index = prev.node_index(&self.id)?;
        Some(AddNode::restore(prev.nodes[index].clone(), index).into())
    }
}

/// Sets the position of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveNode {
    id: String,
    x: f64,
    y: f64,
}

impl MoveNode {
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        let mut next = state.clone();
        if let Some(node) = next.nodes.iter_mut().find(|node| node.id == self.id) {
            node.x = self.x;
            node.y = self.y;
        }
        next
    }

    pub(super) fn invert(&self, prev: &DiagramState) -> Option<Command> {
        let node = prev.node(&self.id)?;
        Some(MoveNode::new(self.id.clone(), node.x, node.y).into())
    }
}

/// The parts of a node an [`UpdateNodeProps`] touches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeChanges {
    pub node_type: Option<String>,
    pub data: Option<DataChange<NodeData>>,
}

impl NodeChanges {
    /// Merge `patch` into the node's data.
    pub fn merge(patch: NodeData) -> Self {
        Self {
            node_type: None,
            data: Some(DataChange::Merge(patch)),
        }
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    /// Returns `true` if applying these changes cannot alter a node.
    pub fn is_empty(&self) -> bool {
        self.node_type.is_none() && self.data.is_none()
    }
}

/// Updates a node's `type` and/or `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateNodeProps {
    id: String,
    changes: NodeChanges,
}

impl UpdateNodeProps {
    pub fn new(id: impl Into<String>, changes: NodeChanges) -> Self {
        Self {
            id: id.into(),
            changes,
        }
    }

    pub fn changes(&self) -> &NodeChanges {
        &self.changes
    }

    pub(super) fn execute(&self, state: &DiagramState) -> DiagramState {
        let mut next = state.clone();
        let Some(node) = next.nodes.iter_mut().find(|node| node.id == self.id) else {
            trace!(node_id = self.id; "Node not found, update skipped");
            return next;
        };

        if let Some(node_type) = &self.changes.node_type {
            node.node_type = node_type.clone();
        }
        if let Some(change) = &self.changes.data {
            change.apply(&mut node.data);
        }
        next
    }

    /// Carries the prior value of every field the update actually changed.
    pub(super) fn invert(&self, prev: &DiagramState, next: &DiagramState) -> Option<Command> {
        let before = prev.node(&self.id)?;
        let after = next.node(&self.id)?;

        let changes = NodeChanges {
            node_type: (before.node_type != after.node_type).then(|| before.node_type.clone()),
            data: (before.data != after.data).then(|| DataChange::Replace(before.data.clone())),
        };
        Some(UpdateNodeProps::new(self.id.clone(), changes).into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{color::Color, model::Shape};

    fn state_with(ids: &[&str]) -> DiagramState {
        let mut state = DiagramState::default();
        for (i, id) in ids.iter().enumerate() {
            let spec = NodeSpec::with_id(*id).at(i as f64 * 10.0, 5.0);
            state = AddNode::new(spec).execute(&state);
        }
        state
    }

    fn round_trip(cmd: Command, state: &DiagramState) -> DiagramState {
        let next = cmd.execute(state);
        let inverse = cmd.invert(state, &next).expect("inverse");
        inverse.execute(&next)
    }

    #[test]
    fn test_add_node_appends() {
        let state = state_with(&["a", "b"]);
        let next = AddNode::new(NodeSpec::with_id("c")).execute(&state);

        let ids: Vec<_> = next.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_add_node_duplicate_is_noop() {
        let state = state_with(&["a"]);
        let cmd = Command::from(AddNode::new(NodeSpec::with_id("a").at(99.0, 99.0)));

        let next = cmd.execute(&state);

        assert_eq!(next, state);
        assert!(cmd.invert(&state, &next).is_none());
    }

    #[test]
    fn test_add_node_inverse_is_remove() {
        let state = state_with(&["a"]);
        let cmd = Command::from(AddNode::new(NodeSpec::with_id("b")));
        let next = cmd.execute(&state);

        assert_eq!(
            cmd.invert(&state, &next),
            Some(Command::from(RemoveNode::new("b")))
        );
        assert_eq!(round_trip(cmd, &state), state);
    }

    #[test]
    fn test_remove_node_restores_exact_node_in_place() {
        let mut state = state_with(&["a", "b", "c"]);
        state.nodes[1].data = NodeData::default();
        state.nodes[1].w = 33.0;

        let restored = round_trip(RemoveNode::new("b").into(), &state);

        assert_eq!(restored, state);
        assert!(restored.nodes[1].data.text_color.is_none());
    }

    #[test]
    fn test_remove_missing_node() {
        let state = state_with(&["a"]);
        let cmd = Command::from(RemoveNode::new("zzz"));
        let next = cmd.execute(&state);

        assert_eq!(next, state);
        assert!(cmd.invert(&state, &next).is_none());
    }

    #[test]
    fn test_move_node() {
        let state = state_with(&["a", "b"]);
        let cmd = Command::from(MoveNode::new("b", 200.0, 300.0));
        let next = cmd.execute(&state);

        let moved = next.node("b").unwrap();
        assert_eq!((moved.x, moved.y), (200.0, 300.0));
        assert_eq!(next.node("a"), state.node("a"));
        assert_eq!(round_trip(cmd, &state), state);
    }

    #[test]
    fn test_move_missing_node() {
        let state = state_with(&["a"]);
        let cmd = Command::from(MoveNode::new("ghost", 1.0, 1.0));
        let next = cmd.execute(&state);

        assert_eq!(next, state);
        assert!(cmd.invert(&state, &next).is_none());
    }

    #[test]
    fn test_update_node_props_merges() {
        let mut state = state_with(&["n1"]);
        state.nodes[0].data = NodeData {
            text: Some("A".to_string()),
            text_color: Color::new("#111").ok(),
            ..NodeData::default()
        };

        let cmd = UpdateNodeProps::new(
            "n1",
            NodeChanges::merge(NodeData {
                text: Some("B".to_string()),
                ..NodeData::default()
            }),
        );
        let next = cmd.execute(&state);

        let data = &next.node("n1").unwrap().data;
        assert_eq!(data.text.as_deref(), Some("B"));
        assert_eq!(data.text_color, Color::new("#111").ok());
    }

    #[test]
    fn test_update_node_props_type_and_shape() {
        let state = state_with(&["n1"]);
        let cmd = UpdateNodeProps::new(
            "n1",
            NodeChanges::merge(NodeData {
                shape: Some(Shape::Cylinder),
                ..NodeData::default()
            })
            .with_type("custom"),
        );
        let next = cmd.execute(&state);

        let node = next.node("n1").unwrap();
        assert_eq!(node.node_type, "custom");
        assert_eq!(node.data.shape, Some(Shape::Cylinder));
    }

    #[test]
    fn test_update_node_props_inverse_only_changed_fields() {
        let state = state_with(&["n1"]);
        let cmd = Command::from(UpdateNodeProps::new(
            "n1",
            NodeChanges::default().with_type("custom"),
        ));
        let next = cmd.execute(&state);

        let Some(Command::UpdateNodeProps(inverse)) = cmd.invert(&state, &next) else {
            panic!("Expected UpdateNodeProps inverse");
        };
        assert_eq!(inverse.changes().node_type.as_deref(), Some("process"));
        assert!(inverse.changes().data.is_none());
    }

    #[test]
    fn test_update_node_props_undo_drops_added_keys() {
        let state = state_with(&["n1"]);
        let mut patch = NodeData {
            text: Some("Hello".to_string()),
            ..NodeData::default()
        };
        patch.extra.insert("owner".to_string(), json!("ops"));

        let restored = round_trip(UpdateNodeProps::new("n1", NodeChanges::merge(patch)).into(), &state);

        assert_eq!(restored, state);
        assert!(restored.node("n1").unwrap().data.text.is_none());
    }

    #[test]
    fn test_update_missing_node() {
        let state = state_with(&["a"]);
        let cmd = Command::from(UpdateNodeProps::new("ghost", NodeChanges::default().with_type("x")));
        let next = cmd.execute(&state);

        assert_eq!(next, state);
        assert!(cmd.invert(&state, &next).is_none());
    }
}
