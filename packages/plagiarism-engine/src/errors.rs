//! Error types for plagiarism-engine
//!
//! Provides unified error handling across the crate.

use crate::config::ConfigError;
use thiserror::Error;

/// Main error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed or unreadable document content.
    ///
    /// Recovered by the scanner: the document is kept with empty content and
    /// every pair touching it is skipped but counted.
    #[error("Input error in {author}/{filename}: {reason}")]
    Input {
        author: String,
        filename: String,
        reason: String,
    },

    /// Structured tokenization failed (recovered locally, never surfaced by `normalize`)
    #[error("Normalization error: {0}")]
    Normalization(String),

    /// The corpus collaborator could not enumerate submissions (fatal)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Invalid state machine transition
    #[error("Invalid scan transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Create an input error for one document
    pub fn input(
        author: impl Into<String>,
        filename: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::Input {
            author: author.into(),
            filename: filename.into(),
            reason: reason.into(),
        }
    }

    /// Create a corpus (scan failure) error
    pub fn corpus(msg: impl Into<String>) -> Self {
        EngineError::Corpus(msg.into())
    }

    /// Create a normalization error
    pub fn normalization(msg: impl Into<String>) -> Self {
        EngineError::Normalization(msg.into())
    }

    /// Whether this error aborts the whole scan
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::Corpus(_) | EngineError::Config(_) | EngineError::Io(_))
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
