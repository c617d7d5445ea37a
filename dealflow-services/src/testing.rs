//! Deterministic collaborators for unit tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dealflow_core::{DealflowError, DealflowResult, Signal};
use dealflow_embedding::{Embedder, EmbeddingError, EmbeddingVector};
use dealflow_generation::{GenerationOptions, TextGenerator};

/// Embedder answering from a fixed text -> vector table
pub struct FakeEmbedder {
    vectors: HashMap<String, EmbeddingVector>,
    fallback: EmbeddingVector,
    pub calls: AtomicUsize,
}

impl FakeEmbedder {
    pub fn new(fallback: EmbeddingVector) -> Self {
        Self {
            vectors: HashMap::new(),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with(mut self, text: &str, vector: EmbeddingVector) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Register the vector returned for a signal's embedding text
    pub fn with_signal(self, signal: &Signal, vector: EmbeddingVector) -> Self {
        let text = signal.embedding_text();
        self.with(&text, vector)
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for FakeEmbedder {
    async fn embed(&self, text: &str) -> dealflow_embedding::Result<EmbeddingVector> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }

    fn model(&self) -> &str {
        "fake-embedding"
    }
}

/// Embedder with no credential
pub struct UnconfiguredEmbedder;

#[async_trait]
impl Embedder for UnconfiguredEmbedder {
    async fn embed(&self, _text: &str) -> dealflow_embedding::Result<EmbeddingVector> {
        Err(EmbeddingError::MissingCredential)
    }

    fn model(&self) -> &str {
        "unconfigured"
    }
}

/// Generator that echoes a canned reply and records prompts
pub struct FakeGenerator {
    configured: bool,
    reply: String,
    pub prompts: Mutex<Vec<(String, GenerationOptions)>>,
}

impl FakeGenerator {
    pub fn configured(reply: &str) -> Self {
        Self {
            configured: true,
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            reply: String::new(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, prompt: &str, options: GenerationOptions) -> DealflowResult<String> {
        if !self.configured {
            return Err(DealflowError::missing_credential());
        }
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), options));
        Ok(self.reply.clone())
    }
}

/// Generator whose calls always fail
pub struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn is_configured(&self) -> bool {
        true
    }

    async fn generate(&self, _prompt: &str, _options: GenerationOptions) -> DealflowResult<String> {
        Err(DealflowError::generation("upstream timeout"))
    }
}

pub fn signal(title: &str, keywords: &[&str]) -> Signal {
    Signal {
        category: "Procurement".to_string(),
        title: title.to_string(),
        description: format!("{} for the city", title),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        ..Signal::default()
    }
}
