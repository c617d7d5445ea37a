//! Process-wide signal embedding cache
//!
//! Signals are embedded at most once per process (modulo concurrent misses)
//! and reused across requests. Entries are never invalidated; a signal whose
//! embedded text changes hashes to a new `SignalKey` instead.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dealflow_core::Signal;
use tracing::{debug, instrument};

use crate::{
    client::Embedder,
    error::Result,
    types::{CachedEmbedding, EmbeddingVector, SignalKey},
};

/// Model label for embeddings shipped with the dataset
const DATASET_MODEL: &str = "dataset";

/// Cache size summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    pub total: usize,
    pub from_dataset: usize,
    /// When the earliest surviving entry was cached
    pub oldest: Option<DateTime<Utc>>,
    /// When the most recent entry was cached
    pub newest: Option<DateTime<Utc>>,
}

/// Owned embedding cache keyed by signal content
#[derive(Default)]
pub struct SignalEmbeddingCache {
    entries: DashMap<SignalKey, CachedEmbedding>,
}

impl SignalEmbeddingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached embedding
    pub fn get(&self, key: &SignalKey) -> Option<EmbeddingVector> {
        self.entries.get(key).map(|entry| entry.embedding.clone())
    }

    /// Store an embedding, overwriting any equivalent earlier value
    pub fn insert(&self, key: SignalKey, embedding: EmbeddingVector, model: &str) {
        self.entries
            .insert(key, CachedEmbedding::new(embedding, model));
    }

    /// Embedding for a signal: cached, shipped with the dataset, or fetched
    ///
    /// No lock is held across the provider call, so two concurrent misses on
    /// the same key both call the provider and the later write wins.
    #[instrument(skip(self, signal, embedder), fields(title = %signal.title))]
    pub async fn get_or_embed(
        &self,
        signal: &Signal,
        embedder: &dyn Embedder,
    ) -> Result<EmbeddingVector> {
        let key = SignalKey::for_signal(signal);

        if let Some(embedding) = self.get(&key) {
            return Ok(embedding);
        }

        if let Some(embedding) = signal.precomputed_embedding() {
            debug!(key = key.as_str(), "Seeding cache from dataset embedding");
            self.insert(key, embedding.to_vec(), DATASET_MODEL);
            return Ok(embedding.to_vec());
        }

        debug!(key = key.as_str(), "Cache miss, requesting signal embedding");
        let embedding = embedder.embed(&signal.embedding_text()).await?;
        self.insert(key, embedding.clone(), embedder.model());
        Ok(embedding)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();

        for entry in self.entries.iter() {
            stats.total += 1;
            if entry.model == DATASET_MODEL {
                stats.from_dataset += 1;
            }
            let cached_at = entry.cached_at;
            stats.oldest = Some(stats.oldest.map_or(cached_at, |t| t.min(cached_at)));
            stats.newest = Some(stats.newest.map_or(cached_at, |t| t.max(cached_at)));
        }

        stats
    }
}
