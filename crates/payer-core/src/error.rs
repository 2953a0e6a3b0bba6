//! Error types for the payer-core library.
//!
//! Extraction itself never fails; these cover loading corpora and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the payer library.
#[derive(Error, Debug)]
pub enum PayerError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or serialized.
    #[error("configuration error: {0}")]
    Config(String),

    /// A reference corpus file could not be used.
    #[error("corpus error in {}: {reason}", path.display())]
    Corpus { path: PathBuf, reason: String },
}

impl From<serde_json::Error> for PayerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for the payer library.
pub type Result<T> = std::result::Result<T, PayerError>;
