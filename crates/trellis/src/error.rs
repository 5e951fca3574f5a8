//! Error types for Trellis operations.
//!
//! This module provides the main error type [`TrellisError`] which wraps
//! the failures of loading, importing and exporting diagrams.

use std::io;

use thiserror::Error;

use trellis_graphml::DecodeError;

/// The main error type for Trellis operations.
///
/// # Diagnostic Variants
///
/// The `GraphMl` variant keeps the rejected source next to the decode error
/// so that callers can point at the offending position.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid diagram JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{err}")]
    GraphMl { err: DecodeError, src: String },

    #[error("Diagram failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Unknown example diagram `{0}`")]
    UnknownExample(String),
}

impl TrellisError {
    /// Create a new `GraphMl` error with the associated source document.
    pub fn new_graphml_error(err: DecodeError, src: impl Into<String>) -> Self {
        Self::GraphMl {
            err,
            src: src.into(),
        }
    }
}
