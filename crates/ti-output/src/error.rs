//! Error types for ti-output.

use thiserror::Error;

use ti_network::NetworkError;
use ti_search::SearchError;

/// Errors that can occur while publishing service areas.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("block extraction failed: {0}")]
    Network(#[from] NetworkError),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
