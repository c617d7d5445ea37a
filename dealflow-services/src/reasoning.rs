//! Generated justifications for matches

use std::sync::Arc;

use dealflow_core::{DealflowResult, Signal};
use dealflow_generation::{reasoning_prompt, GenerationOptions, TextGenerator};
use tracing::{debug, instrument};

/// Writes the short reasoning attached to each match
///
/// Reasoning is optional enrichment: without a configured generator every
/// explanation is an empty string. A configured generator that fails still
/// fails the caller.
#[derive(Clone)]
pub struct MatchExplainer {
    generator: Arc<dyn TextGenerator>,
    options: GenerationOptions,
}

impl MatchExplainer {
    pub fn new(generator: Arc<dyn TextGenerator>, options: GenerationOptions) -> Self {
        Self { generator, options }
    }

    #[instrument(skip(self, description, signal), fields(title = %signal.title))]
    pub async fn explain(
        &self,
        description: &str,
        signal: &Signal,
        score: f64,
    ) -> DealflowResult<String> {
        if !self.generator.is_configured() {
            debug!("Generator not configured, skipping reasoning");
            return Ok(String::new());
        }

        let prompt = reasoning_prompt(description, signal, score);
        self.generator.generate(&prompt, self.options).await
    }
}
