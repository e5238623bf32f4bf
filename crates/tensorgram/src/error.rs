//! Error types for Tensorgram operations.
//!
//! Construction errors ([`DiagramError`]) come from malformed mutation
//! sequences and fail the call chain immediately; [`TensorgramError`] wraps
//! everything a full render pipeline can surface.

use std::io;

use thiserror::Error;

/// An error from the diagram construction API.
///
/// These are usage errors: the policy is to fail fast and abort the chain
/// rather than let a malformed element reach the layout engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    /// Relative placement (`right`/`down`) was requested before any tensor
    /// existed to be relative to.
    #[error("relative placement `{placement}` requires a previously added tensor")]
    InvalidPosition { placement: String },

    /// A summation was requested for an index name absent from every tensor.
    #[error("no tensor exposes an index named `{name}`")]
    NoMatchingIndex { name: String },

    /// A contraction names an index that one of its endpoints does not have.
    #[error("tensor `{tensor}` has no index named `{name}`")]
    DanglingContractionName { tensor: String, name: String },

    /// A contraction referenced a tensor handle that was never created.
    #[error("unknown tensor id {id}")]
    UnknownTensor { id: usize },

    /// A color string in a scheme configuration failed to parse.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// The main error type for Tensorgram operations.
#[derive(Debug, Error)]
pub enum TensorgramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error("config error: {0}")]
    Config(String),

    #[error("export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for TensorgramError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
