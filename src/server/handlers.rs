use super::types::{ErrorResponse, HealthResponse, ReviewAnalyzeRequest, ReviewAnalyzeResponse};
use crate::insight::InsightService;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InsightService>,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<ReviewAnalyzeRequest>,
) -> Result<Json<ReviewAnalyzeResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        reviews = request.reviews.len(),
        "Received review analyze request"
    );

    match state.service.analyze(&request.reviews).await {
        Ok(analysis) => {
            info!(tone = analysis.tone.as_str(), "Analyzed review batch");
            Ok(Json(ReviewAnalyzeResponse {
                mood: analysis.mood,
                insight_summary: analysis.summary,
            }))
        }
        Err(e) if e.is_client_error() => {
            warn!("Rejected review batch: {}", e);
            Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
        Err(e) => {
            error!("Failed to analyze review batch: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Processing error: {}", e),
                }),
            ))
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "OK" })
}
