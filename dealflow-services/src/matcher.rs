//! Signal matching
//!
//! Ranks procurement signals for a startup description by blending semantic
//! similarity with keyword overlap, keeping those at or above a threshold.

use std::cmp::Ordering;
use std::sync::Arc;

use dealflow_core::{DealflowResult, MatchResult, Signal};
use dealflow_embedding::{cosine_similarity, Embedder, SignalEmbeddingCache};
use tracing::{debug, info, instrument};

use crate::reasoning::MatchExplainer;
use crate::scoring::{keyword_overlap, ScoreWeights};

/// Maximum number of matches returned
pub const MAX_MATCHES: usize = 10;

/// Configuration for the signal matcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingConfig {
    pub weights: ScoreWeights,
    /// Minimum combined score for a signal to count as a match
    pub min_match_score: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            min_match_score: 0.5,
        }
    }
}

/// A signal that passed the threshold, before reasoning is attached
struct ScoredSignal<'a> {
    signal: &'a Signal,
    score: f64,
}

/// Ranks signals against a startup description
pub struct SignalMatcher {
    embedder: Arc<dyn Embedder>,
    cache: Arc<SignalEmbeddingCache>,
    explainer: MatchExplainer,
    config: MatchingConfig,
}

impl SignalMatcher {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        cache: Arc<SignalEmbeddingCache>,
        explainer: MatchExplainer,
        config: MatchingConfig,
    ) -> Self {
        Self {
            embedder,
            cache,
            explainer,
            config,
        }
    }

    /// Rank `signals` for `description`
    ///
    /// Returns at most [`MAX_MATCHES`] results, highest score first, with ties
    /// in collection order. Any embedding failure fails the whole call: a
    /// ranking missing some candidates' scores would be misleading.
    #[instrument(skip(self, description, signals), fields(signals = signals.len()))]
    pub async fn match_signals(
        &self,
        description: &str,
        signals: &[Signal],
    ) -> DealflowResult<Vec<MatchResult>> {
        if signals.is_empty() {
            debug!("No signals loaded, nothing to match");
            return Ok(Vec::new());
        }

        let description_embedding = self.embedder.embed(description).await?;
        let lowered = description.to_lowercase();

        let mut scored = Vec::new();
        for signal in signals {
            let signal_embedding = self
                .cache
                .get_or_embed(signal, self.embedder.as_ref())
                .await?;

            let semantic = cosine_similarity(&description_embedding, &signal_embedding)?;
            let keyword = keyword_overlap(&lowered, &signal.keywords);
            let score = self.config.weights.combine(semantic, keyword);

            debug!(
                title = %signal.title,
                semantic, keyword, score,
                "Scored signal"
            );

            if score >= self.config.min_match_score {
                scored.push(ScoredSignal { signal, score });
            }
        }

        let above_threshold = scored.len();

        // Stable sort keeps collection order for equal scores
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored.truncate(MAX_MATCHES);

        let mut matches = Vec::with_capacity(scored.len());
        for ScoredSignal { signal, score } in scored {
            let reasoning = self.explainer.explain(description, signal, score).await?;
            matches.push(MatchResult {
                signal: signal.clone(),
                score,
                reasoning,
            });
        }

        info!(
            "Matched {} of {} signals ({} above threshold {})",
            matches.len(),
            signals.len(),
            above_threshold,
            self.config.min_match_score
        );

        Ok(matches)
    }
}
