//! Error types for the tutor.

use quoridor_rules::KnowledgeError;
use thiserror::Error;

/// Failures reading or writing the learning document.
///
/// These never escape `chat` or `train`; callers log them and keep working
/// from memory.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed learning document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures loading or validating a [`crate::TutorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Failure reported by an [`crate::AudioRenderer`].
#[derive(Debug, Error)]
#[error("Audio rendering failed: {0}")]
pub struct RenderError(pub String);

/// Errors surfaced to callers of the tutor.
#[derive(Debug, Error)]
pub enum TutorError {
    /// A required field was empty; a client error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T, E = TutorError> = std::result::Result<T, E>;
