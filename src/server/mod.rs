pub mod handlers;
pub mod types;

use crate::{config::Config, insight::InsightService, summarizer::HfInferenceClient, Result};
use axum::{
    routing::{get, post},
    Router,
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application router. Split out from [`run`] so tests can drive
/// the routes with an in-memory service.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/internal/review/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One model client for the process lifetime, read-only after creation.
    let summarizer = Arc::new(HfInferenceClient::new(config.summarizer.clone())?);
    let service = InsightService::new(summarizer, config.limits.clone());

    let app_state = AppState {
        service: Arc::new(service),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
