//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::QuestionBankError;

/// Errors emitted while loading a question bank from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("failed to read question file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("question file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Bank(#[from] QuestionBankError),
}
