//! Embeddings and Semantic Similarity for Procurement Signals
//!
//! This crate provides the semantic half of signal matching, using vector
//! embeddings from an OpenAI-compatible endpoint (Gemini by default).
//!
//! ## Features
//! - `Embedder` trait so matching can run against deterministic fakes
//! - Embedding client for OpenAI-compatible APIs
//! - Cosine similarity between embeddings
//! - Process-wide signal embedding cache keyed by content hash

pub mod cache;
pub mod client;
pub mod error;
pub mod similarity;
pub mod types;

pub use cache::{CacheStats, SignalEmbeddingCache};
pub use client::{Embedder, EmbeddingClient};
pub use error::{EmbeddingError, Result};
pub use similarity::cosine_similarity;
pub use types::{CachedEmbedding, EmbeddingVector, SignalKey};
