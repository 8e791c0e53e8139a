use thiserror::Error;

/// Error type for the configuration and I/O layers around the engine.
///
/// Scoring and sorting never fail; a candidate that does not contain the
/// query is reported through `MatchResult::matched`, not through this type.
#[derive(Error, Debug)]
pub enum FuzzyError {
    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File or stream errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<String> for FuzzyError {
    fn from(s: String) -> Self {
        FuzzyError::Other(s)
    }
}

impl From<&str> for FuzzyError {
    fn from(s: &str) -> Self {
        FuzzyError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FuzzyError>;
