//! Collaborator-boundary error type.

use thiserror::Error;

use ti_core::{CoreError, CrsCode};

use crate::Dataset;

/// Errors produced by `ti-network` and by [`GeometryService`][crate::GeometryService]
/// implementations.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// A geometry-service request failed.  The search degrades the current
    /// expansion and carries on.
    #[error("geometry service {operation} failed: {message}")]
    Service {
        operation: &'static str,
        message:   String,
    },

    #[error("{dataset} is in {got}, expected {expected}")]
    CrsMismatch {
        dataset:  Dataset,
        expected: CrsCode,
        got:      CrsCode,
    },

    #[error("origin parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    /// Shorthand used by service implementations.
    pub fn service(operation: &'static str, message: impl Into<String>) -> Self {
        NetworkError::Service { operation, message: message.into() }
    }
}

pub type NetworkResult<T> = Result<T, NetworkError>;
