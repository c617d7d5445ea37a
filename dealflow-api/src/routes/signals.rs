//! Read-only view of the loaded signal dataset

use axum::{extract::State, routing::get, Json, Router};
use dealflow_core::Signal;
use dealflow_embedding::CacheStats;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
struct SignalsResponse {
    count: usize,
    cached_embeddings: CacheStats,
    signals: Vec<Signal>,
}

async fn list_signals(State(state): State<AppState>) -> Json<SignalsResponse> {
    Json(SignalsResponse {
        count: state.signals.len(),
        cached_embeddings: state.embedding_cache.stats(),
        signals: state.signals.signals().to_vec(),
    })
}

/// Create signal routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/signals", get(list_signals))
}
