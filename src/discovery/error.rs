// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON array of servers, found {0}")]
    NotAnArray(&'static str),
    #[error("Server entry {index} is not an object")]
    NotAnObject { index: usize },
    #[error("Server entry {index} has no '{field}' field")]
    MissingField { index: usize, field: &'static str },
    #[error("Server entry {index}: '{field}' must be {expected}")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}

impl ExtractError {
    /// True when the payload was valid JSON but not a server listing.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::NotAnArray(_)
                | Self::NotAnObject { .. }
                | Self::MissingField { .. }
                | Self::WrongType { .. }
        )
    }
}
