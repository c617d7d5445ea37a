//! DealFlow API Server
//!
//! HTTP API that ranks government procurement signals for a startup
//! description and drafts outreach emails for chosen matches.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    Router,
};
use dealflow_core::DealflowResult;
use dealflow_embedding::{Embedder, EmbeddingClient, SignalEmbeddingCache};
use dealflow_generation::{ChatClient, TextGenerator};
use dealflow_services::{
    MatchExplainer, OutreachDrafter, SignalMatcher, SignalRepository,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

pub use config::Settings;
pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub signals: Arc<SignalRepository>,
    pub embedding_cache: Arc<SignalEmbeddingCache>,
    pub matcher: Arc<SignalMatcher>,
    pub drafter: Arc<OutreachDrafter>,
}

impl AppState {
    /// Wire services around the given collaborators
    pub fn new(
        settings: &Settings,
        signals: SignalRepository,
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        let embedding_cache = Arc::new(SignalEmbeddingCache::new());
        let explainer = MatchExplainer::new(generator.clone(), settings.reasoning);
        let matcher = SignalMatcher::new(
            embedder,
            embedding_cache.clone(),
            explainer,
            settings.matching,
        );
        let drafter = OutreachDrafter::new(generator, settings.email);

        Self {
            signals: Arc::new(signals),
            embedding_cache,
            matcher: Arc::new(matcher),
            drafter: Arc::new(drafter),
        }
    }

    /// Build provider clients and load the signal dataset from settings
    pub fn from_settings(settings: &Settings) -> DealflowResult<Self> {
        let signals = SignalRepository::load(&settings.signals_path)?;

        let embedder = EmbeddingClient::new(
            settings.api_key.clone(),
            &settings.api_base,
            settings.embedding_model.as_str(),
        );
        let generator = ChatClient::new(
            settings.api_key.clone(),
            &settings.api_base,
            &settings.generation_model,
        );
        info!(
            embedding = embedder.is_configured(),
            generation = generator.is_configured(),
            "Provider clients ready"
        );

        Ok(Self::new(settings, signals, Arc::new(embedder), Arc::new(generator)))
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
