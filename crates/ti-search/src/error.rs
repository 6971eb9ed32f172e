use thiserror::Error;

use ti_core::{CoreError, RouteKey};
use ti_network::NetworkError;

use crate::NodeKey;

/// Errors that stop a search before it starts.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search configuration error: {0}")]
    Config(String),

    #[error("time limit must be a finite, non-negative number of hours (got {0})")]
    InvalidTimeLimit(f64),

    #[error("invalid origin: {0}")]
    Origin(#[from] CoreError),
}

pub type SearchResult<T> = Result<T, SearchError>;

/// Why a single expansion was abandoned.
///
/// Never fatal: the orchestrator logs it, counts it, and pops the next node.
#[derive(Debug, Error)]
pub enum ExpansionError {
    #[error("{0} has no coordinate in its dataset")]
    Unresolved(NodeKey),

    #[error("empty buffer of {distance} around {center}")]
    EmptyBuffer { center: String, distance: f64 },

    #[error("{0} carries no route to ride")]
    MissingRoute(NodeKey),

    #[error("no route features for {0}")]
    UnknownRoute(RouteKey),

    #[error("geometry service failed: {0}")]
    Service(#[from] NetworkError),
}
