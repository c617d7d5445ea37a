//! Error types for embedding operations

use dealflow_core::DealflowError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbeddingError>;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("OpenAI API error: {0}")]
    OpenAI(#[from] async_openai::error::OpenAIError),

    #[error("No embedding credential configured")]
    MissingCredential,

    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Empty embedding returned for model {0}")]
    EmptyResponse(String),
}

impl From<EmbeddingError> for DealflowError {
    fn from(err: EmbeddingError) -> Self {
        match err {
            EmbeddingError::MissingCredential => DealflowError::missing_credential(),
            other => DealflowError::embedding(other.to_string()),
        }
    }
}
