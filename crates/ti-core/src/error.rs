//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The error type for `ti-core` parsing and validation.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid coordinate {input:?}: {reason}")]
    InvalidCoordinate { input: String, reason: String },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ti-core`.
pub type CoreResult<T> = Result<T, CoreError>;
