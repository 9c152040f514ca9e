use crate::insight::ReviewItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ReviewAnalyzeRequest {
    #[serde(default)]
    pub reviews: Vec<ReviewItem>,
}

#[derive(Debug, Serialize)]
pub struct ReviewAnalyzeResponse {
    pub mood: String,
    #[serde(rename = "insightSummary")]
    pub insight_summary: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
