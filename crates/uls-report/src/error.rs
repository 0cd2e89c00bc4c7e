//! Error types for the report collaborator

use std::time::Duration;

use thiserror::Error;

/// Report generation failures
///
/// All of these are recoverable: the caller keeps its last display state.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report backend error: {0}")]
    Network(String),

    #[error("Report request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Empty response from report backend")]
    EmptyResponse,

    #[error("Malformed report payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ReportError {
    /// Transport-level failure (as opposed to a bad payload)
    pub fn is_transport(&self) -> bool {
        matches!(self, ReportError::Network(_) | ReportError::Timeout(_))
    }
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;
