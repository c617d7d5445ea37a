//! Outreach email draft endpoint

use axum::{extract::State, routing::post, Json, Router};
use dealflow_core::{EmailDraft, EmailRequest};
use tracing::info;

use crate::{ApiError, AppState};

/// Draft an outreach email for a chosen signal
async fn draft_email(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> Result<Json<EmailDraft>, ApiError> {
    info!("Drafting outreach email for {}", request.signal.title);

    let draft = state
        .drafter
        .draft(
            &request.startup_description,
            &request.signal,
            request.match_score,
        )
        .await?;

    Ok(Json(draft))
}

/// Create email routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/email", post(draft_email))
}
