//! Error types for model value parsing.

use thiserror::Error;

/// A string could not be turned into one of the model's closed value types.
///
/// Returned by [`Color::new`](crate::color::Color::new) and by the `FromStr`
/// implementations of the style enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} `{value}`")]
pub struct InvalidValue {
    kind: &'static str,
    value: String,
}

impl InvalidValue {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The kind of value that was expected (e.g. `"color"`, `"shape"`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}
