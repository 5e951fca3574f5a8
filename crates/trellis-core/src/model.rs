//! Diagram document model.
//!
//! Pure data with no behavior beyond lookups: the document
//! ([`DiagramState`]), its elements ([`DiagramNode`], [`DiagramEdge`]), their
//! typed presentation payloads ([`NodeData`], [`EdgeData`]) and the partial
//! descriptions used to create new elements ([`NodeSpec`], [`EdgeSpec`]).
//!
//! # Organization
//!
//! - [`diagram`] - The document and its elements
//! - [`data`] - Node and edge payloads with opaque extension keys
//! - [`style`] - Closed style vocabularies ([`Shape`], [`LineStyle`], ...)
//! - [`spec`] - Partial elements and their defaults

pub mod data;
pub mod diagram;
pub mod spec;
pub mod style;

pub use data::*;
pub use diagram::*;
pub use spec::*;
pub use style::*;
