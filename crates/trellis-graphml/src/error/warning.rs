//! The warning type reported for recoverable decode problems.

use std::fmt;

use crate::{error::WarningCode, span::Span};

/// One recoverable problem found while decoding.
///
/// [`message`](Warning::message) is a self-contained sentence naming the
/// element involved, e.g. `Node n3 missing required fields and was skipped`.
/// The [`span`](Warning::span) covers the offending element in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    code: WarningCode,
    message: String,
    span: Option<Span>,
    help: Option<String>,
}

impl Warning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            span: None,
            help: None,
        }
    }

    pub fn code(&self) -> WarningCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source range of the element the warning is about, if known.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}]: {}", self.code, self.message)
    }
}
