//! Error types for the question-tree crate

use thiserror::Error;

use crate::core::CandidateId;

/// Main error type for the question-tree crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An engine call was made in a state that does not allow it.
    ///
    /// Recoverable: the engine is left exactly as it was.
    #[error("invalid state: cannot {operation} ({reason})")]
    InvalidState {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid record at line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("invalid id set '{value}': {reason}")]
    InvalidIdSet { value: String, reason: String },

    #[error("character {id} not found")]
    CharacterNotFound { id: CandidateId },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("tree snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result type alias for question-tree operations
pub type Result<T> = std::result::Result<T, Error>;
