//! # Trellis GraphML
//!
//! GraphML interchange for Trellis diagrams. Writes a fixed, versioned key
//! schema and reads it back defensively: only malformed XML and a missing
//! `<graph>` element are fatal, every other problem becomes a [`Warning`].
//!
//! ## Usage
//!
//! ```
//! # use trellis_graphml::{decode, encode, DecodeError, EncodeOptions};
//! # use trellis_core::command::AddNode;
//! # use trellis_core::history::History;
//! # use trellis_core::model::NodeSpec;
//!
//! fn main() -> Result<(), DecodeError> {
//!     let mut history = History::default();
//!     history.dispatch(AddNode::new(NodeSpec::with_id("start")).into());
//!
//!     let xml = encode(history.state(), &EncodeOptions::default());
//!     let decoded = decode(&xml)?;
//!
//!     assert!(decoded.warnings.is_empty());
//!     assert_eq!(decoded.diagram.nodes[0].id, "start");
//!     Ok(())
//! }
//! ```

pub mod decode;
pub mod encode;
pub mod error;
pub mod keys;
mod span;

pub use decode::{DecodeStats, Decoded, decode};
pub use encode::{EncodeOptions, encode};
pub use error::{DecodeError, Warning, WarningCode};
pub use span::Span;

use trellis_core::model::DiagramState;

/// Encodes `diagram` with default options and decodes the result.
///
/// Useful to see a document the way another GraphML reader would. Every
/// field the format carries survives; a node without a shape comes back as
/// `rect`.
///
/// # Errors
///
/// Only fails if the encoder produced unreadable output.
pub fn round_trip(diagram: &DiagramState) -> Result<DiagramState, DecodeError> {
    let xml = encode(diagram, &EncodeOptions::default());
    decode(&xml).map(|decoded| decoded.diagram)
}
