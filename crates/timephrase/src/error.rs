//! Error types for timephrase operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhraseError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Negative duration: {0}")]
    NegativeDuration(String),

    #[error("Unparseable duration: {0}")]
    UnparseableDuration(String),
}

impl PhraseError {
    /// Stable name of the error kind, independent of the message payload.
    pub fn kind(&self) -> &'static str {
        match self {
            PhraseError::InvalidTimestamp(_) => "InvalidTimestamp",
            PhraseError::NegativeDuration(_) => "NegativeDuration",
            PhraseError::UnparseableDuration(_) => "UnparseableDuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, PhraseError>;
