//! DealFlow API Server binary

use std::net::SocketAddr;

use dealflow_api::{app, AppState, Settings};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dealflow_api=debug")),
        )
        .init();

    info!("Starting DealFlow API");

    let settings = Settings::from_env()?;

    if settings.has_credential() {
        info!(
            "Provider credentials found (embedding={}, generation={})",
            settings.embedding_model, settings.generation_model
        );
    } else {
        warn!("No GOOGLE_API_KEY set - matching and email drafts will fail until configured");
    }

    let state = AppState::from_settings(&settings)?;
    info!(
        "Loaded {} signals (min score {}, weights {}/{})",
        state.signals.len(),
        settings.matching.min_match_score,
        settings.matching.weights.semantic,
        settings.matching.weights.keyword
    );

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
