//! Error types for the matcher

use thiserror::Error;

/// Environment variable holding the collaborator credential
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Workspace-wide error type
#[derive(Error, Debug)]
pub enum DealflowError {
    /// A collaborator credential or setting is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// The embedding provider failed
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// The text-generation provider failed
    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DealflowError {
    pub fn config(msg: impl Into<String>) -> Self {
        DealflowError::Config(msg.into())
    }

    /// The fixed diagnostic reported when no collaborator credential is set
    pub fn missing_credential() -> Self {
        DealflowError::Config(format!("{} missing", API_KEY_VAR))
    }

    pub fn embedding(msg: impl Into<String>) -> Self {
        DealflowError::Embedding(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        DealflowError::Generation(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        DealflowError::Parse(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        DealflowError::Io(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DealflowError::Internal(msg.into())
    }

    /// Whether this error came from missing configuration rather than a failed call
    pub fn is_config(&self) -> bool {
        matches!(self, DealflowError::Config(_))
    }
}

/// Result type alias for matcher operations
pub type DealflowResult<T> = Result<T, DealflowError>;
