//! Server configuration
//!
//! Loaded once from the environment at startup and immutable afterwards.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use dealflow_core::API_KEY_VAR;
use dealflow_generation::GenerationOptions;
use dealflow_services::{MatchingConfig, ScoreWeights};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// Runtime settings for the API server
#[derive(Debug, Clone)]
pub struct Settings {
    /// Credential for both the embedding and generation providers
    pub api_key: Option<String>,
    /// Base URL of the OpenAI-compatible provider
    pub api_base: String,
    /// Chat model for reasoning and email drafts
    pub generation_model: String,
    /// Embedding model for descriptions and signals
    pub embedding_model: String,
    pub matching: MatchingConfig,
    pub reasoning: GenerationOptions,
    pub email: GenerationOptions,
    /// JSON array of signal records
    pub signals_path: PathBuf,
    pub port: u16,
}

impl Settings {
    /// Load settings from environment variables
    ///
    /// See `from_source` for the variables read and their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| env::var(key).ok())
    }

    /// Load settings from any key lookup
    ///
    /// Reads:
    /// - GOOGLE_API_KEY: provider credential (empty means unset)
    /// - GENERATION_API_BASE, GEMINI_MODEL, EMBEDDING_MODEL
    /// - SEMANTIC_WEIGHT, KEYWORD_WEIGHT, MIN_MATCH_SCORE
    /// - REASONING_TEMPERATURE, MAX_REASONING_TOKENS
    /// - EMAIL_TEMPERATURE, MAX_EMAIL_TOKENS
    /// - SIGNALS_PATH, SERVER_PORT
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = MatchingConfig::default();
        let reasoning = GenerationOptions::reasoning();
        let email = GenerationOptions::email();

        Ok(Self {
            api_key: lookup(API_KEY_VAR).filter(|key| !key.is_empty()),
            api_base: lookup("GENERATION_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            generation_model: lookup("GEMINI_MODEL")
                .unwrap_or_else(|| "gemini-2.5-flash".to_string()),
            embedding_model: lookup("EMBEDDING_MODEL")
                .unwrap_or_else(|| "text-embedding-004".to_string()),
            matching: MatchingConfig {
                weights: ScoreWeights {
                    semantic: parse_var(&lookup, "SEMANTIC_WEIGHT", defaults.weights.semantic)?,
                    keyword: parse_var(&lookup, "KEYWORD_WEIGHT", defaults.weights.keyword)?,
                },
                min_match_score: parse_var(&lookup, "MIN_MATCH_SCORE", defaults.min_match_score)?,
            },
            reasoning: GenerationOptions::new(
                parse_var(&lookup, "REASONING_TEMPERATURE", reasoning.temperature)?,
                parse_var(&lookup, "MAX_REASONING_TOKENS", reasoning.max_output_tokens)?,
            ),
            email: GenerationOptions::new(
                parse_var(&lookup, "EMAIL_TEMPERATURE", email.temperature)?,
                parse_var(&lookup, "MAX_EMAIL_TOKENS", email.max_output_tokens)?,
            ),
            signals_path: lookup("SIGNALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/signals.json")),
            port: parse_var(&lookup, "SERVER_PORT", 8000)?,
        })
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            field: key.to_string(),
            value,
            error: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {field}: {error}")]
    InvalidValue {
        field: String,
        value: String,
        error: String,
    },
}
