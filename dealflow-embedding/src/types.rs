//! Core types for embeddings

use chrono::{DateTime, Utc};
use dealflow_core::Signal;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Embedding vector (768 dimensions for text-embedding-004)
pub type EmbeddingVector = Vec<f32>;

/// Stable identifier for a signal's embedding
///
/// SHA256 of the text that gets embedded, so a signal whose content changes
/// gets a new key instead of a stale embedding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalKey(String);

impl SignalKey {
    /// Derive the key for a signal
    pub fn for_signal(signal: &Signal) -> Self {
        Self::for_text(&signal.embedding_text())
    }

    pub fn for_text(text: &str) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        SignalKey(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Signal embedding held by the cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedEmbedding {
    /// The embedding vector
    pub embedding: EmbeddingVector,
    /// Model that produced it ("dataset" when shipped with the signal)
    pub model: String,
    /// When this embedding entered the cache
    pub cached_at: DateTime<Utc>,
}

impl CachedEmbedding {
    pub fn new(embedding: EmbeddingVector, model: impl Into<String>) -> Self {
        Self {
            embedding,
            model: model.into(),
            cached_at: Utc::now(),
        }
    }
}
