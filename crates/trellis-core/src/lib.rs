//! Trellis Core Types and Command Engine
//!
//! This crate provides the document model of the Trellis diagram editor and
//! the machinery that evolves it. It includes:
//!
//! - **Model**: The diagram document and its nodes and edges ([`model`] module)
//! - **Colors**: Validated color tokens used by styling fields ([`color::Color`])
//! - **Commands**: Reversible state transitions ([`command::Command`])
//! - **History**: Undo/redo sequencing over commands ([`history::History`])
//!
//! The document is only ever changed by dispatching commands through a
//! [`history::History`]:
//!
//! ```
//! use trellis_core::command::{AddNode, Command, MoveNode};
//! use trellis_core::history::History;
//! use trellis_core::model::{DiagramState, NodeSpec};
//!
//! let mut history = History::new(DiagramState::default());
//! history.dispatch(Command::from(AddNode::new(NodeSpec::with_id("a"))));
//! history.dispatch(Command::from(MoveNode::new("a", 40.0, 20.0)));
//! assert_eq!(history.state().node("a").map(|n| n.x), Some(40.0));
//!
//! history.undo();
//! assert_eq!(history.state().node("a").map(|n| n.x), Some(0.0));
//! ```

pub mod color;
pub mod command;
pub mod error;
pub mod history;
pub mod model;
