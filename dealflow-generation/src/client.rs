use async_openai::{
    config::OpenAIConfig,
    types::chat::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use dealflow_core::{DealflowError, DealflowResult};
use tracing::{debug, instrument};

/// Sampling settings for a single generation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationOptions {
    pub fn new(temperature: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            max_output_tokens,
        }
    }

    /// Low temperature, short output for match reasoning
    pub fn reasoning() -> Self {
        Self::new(0.3, 100)
    }

    /// Warmer, longer output for outreach emails
    pub fn email() -> Self {
        Self::new(0.7, 400)
    }
}

/// Anything that can complete a prompt
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Whether a credential is available; unconfigured generators always fail
    fn is_configured(&self) -> bool;

    /// Complete `prompt`, returning trimmed text
    async fn generate(&self, prompt: &str, options: GenerationOptions) -> DealflowResult<String>;
}

/// Chat client for OpenAI-compatible endpoints
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Option<Client<OpenAIConfig>>,
    model: String,
}

impl ChatClient {
    /// An empty `api_key` is treated the same as no key.
    pub fn new(api_key: Option<String>, api_base: &str, model: &str) -> Self {
        let client = api_key.filter(|key| !key.is_empty()).map(|key| {
            let config = OpenAIConfig::new()
                .with_api_key(key)
                .with_api_base(api_base);
            Client::with_config(config)
        });

        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for ChatClient {
    fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, options: GenerationOptions) -> DealflowResult<String> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(DealflowError::missing_credential)?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()
                .map_err(|e| DealflowError::internal(e.to_string()))?
                .into()])
            .temperature(options.temperature)
            .max_completion_tokens(options.max_output_tokens)
            .build()
            .map_err(|e| DealflowError::internal(e.to_string()))?;

        let response = client
            .chat()
            .create(request)
            .await
            .map_err(|e| DealflowError::generation(format!("OpenAI API error: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| DealflowError::generation("No response from model"))?;

        debug!("Generated {} chars", content.len());
        Ok(content.trim().to_string())
    }
}
