//! Embedding provider interface and OpenAI-compatible client

use async_openai::{
    config::OpenAIConfig,
    types::embeddings::{CreateEmbeddingRequest, EmbeddingInput},
    Client,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::{
    error::{EmbeddingError, Result},
    types::EmbeddingVector,
};

/// Anything that can turn text into an embedding vector
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single piece of text
    async fn embed(&self, text: &str) -> Result<EmbeddingVector>;

    /// Name of the embedding model
    fn model(&self) -> &str;
}

/// Embedding client for OpenAI-compatible endpoints
///
/// Defaults point at Gemini's OpenAI-compatible API. Without an API key the
/// client still constructs, but every call fails with `MissingCredential`.
pub struct EmbeddingClient {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

impl EmbeddingClient {
    /// Create a new embedding client
    ///
    /// An empty `api_key` is treated the same as no key.
    pub fn new(api_key: Option<String>, api_base: &str, model: impl Into<String>) -> Self {
        let client = api_key.filter(|key| !key.is_empty()).map(|key| {
            let config = OpenAIConfig::new()
                .with_api_key(key)
                .with_api_base(api_base);
            Client::with_config(config)
        });

        Self {
            client,
            model: model.into(),
        }
    }

    /// Whether a credential was supplied
    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Low-level embedding generation
    async fn generate_embedding(&self, text: &str) -> Result<EmbeddingVector> {
        let client = self.client.as_ref().ok_or(EmbeddingError::MissingCredential)?;

        let request = CreateEmbeddingRequest {
            model: self.model.clone(),
            input: EmbeddingInput::String(text.to_string()),
            encoding_format: None,
            dimensions: None,
            user: None,
        };

        let response = client.embeddings().create(request).await?;

        let embedding = response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .filter(|embedding| !embedding.is_empty())
            .ok_or_else(|| EmbeddingError::EmptyResponse(self.model.clone()))?;

        info!(
            "Generated embedding: dimension={}, model={}",
            embedding.len(),
            self.model
        );

        Ok(embedding)
    }
}

#[async_trait]
impl Embedder for EmbeddingClient {
    #[instrument(skip(self, text), fields(model = %self.model))]
    async fn embed(&self, text: &str) -> Result<EmbeddingVector> {
        debug!("Embedding text with length: {} chars", text.len());
        self.generate_embedding(text).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}
