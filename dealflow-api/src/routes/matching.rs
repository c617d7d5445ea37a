//! Signal matching endpoint

use axum::{extract::State, routing::post, Json, Router};
use dealflow_core::{MatchRequest, MatchResponse};
use tracing::info;

use crate::{ApiError, AppState};

/// Rank loaded signals for a startup description
async fn match_startup(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, ApiError> {
    info!(
        "Matching startup description ({} chars) against {} signals",
        request.startup_description.len(),
        state.signals.len()
    );

    let matches = state
        .matcher
        .match_signals(&request.startup_description, state.signals.signals())
        .await?;

    Ok(Json(MatchResponse { matches }))
}

/// Create matching routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/match", post(match_startup))
}
