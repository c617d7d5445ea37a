//! API route definitions

mod email;
mod health;
mod matching;
mod signals;

use axum::Router;
use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(matching::routes())
        .merge(email::routes())
        .merge(signals::routes())
        .merge(health::routes())
}
