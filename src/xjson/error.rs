// Mon Oct 19 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum XJsonError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Missing '{field}' for {kind} value")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("Malformed {kind} value {text}: {reason}")]
    Malformed {
        kind: &'static str,
        text: String,
        reason: String,
    },
}

impl XJsonError {
    /// The extension kind the error is about, if any.
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Self::Parse(_) => None,
            Self::MissingField { kind, .. } | Self::Malformed { kind, .. } => Some(*kind),
        }
    }
}
