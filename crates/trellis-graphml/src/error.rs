//! Diagnostics produced while decoding GraphML.
//!
//! Decoding distinguishes two kinds of problems:
//! - Fatal: the input is not XML, or has no `<graph>` element. These are
//!   returned as a [`DecodeError`] and nothing is imported.
//! - Recoverable: an element or field that cannot be used. These become
//!   [`Warning`]s, the offending field (or element) is dropped and decoding
//!   carries on.
//!
//! # Example
//!
//! ```
//! # use trellis_graphml::error::{Warning, WarningCode};
//! # use trellis_graphml::Span;
//!
//! let warning = Warning::new(WarningCode::W104, "Invalid strokeColor 'nope' on node n1 ignored")
//!     .with_span(Span::new(120..180))
//!     .with_help("use a hex color such as `#336699` or a color name");
//!
//! assert_eq!(warning.to_string(), "warning[W104]: Invalid strokeColor 'nope' on node n1 ignored");
//! ```

mod collector;
mod decode_error;
mod warning;
mod warning_code;

pub(crate) use collector::WarningCollector;

pub use decode_error::DecodeError;
pub use warning::Warning;
pub use warning_code::WarningCode;
