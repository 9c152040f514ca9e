mod service;
mod tone;

pub use service::{InsightService, ReviewAnalysis};
pub use tone::{aggregate_tone, avg_rating, tone_from_rating, Tone};

use serde::Deserialize;

/// One review as submitted by the upstream application server. Rating range
/// is checked by the service so out-of-range values get the standard error
/// envelope instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewItem {
    pub rating: u8,
    pub comment: String,
}
