use super::{aggregate_tone, ReviewItem, Tone};
use crate::{
    config::LimitsConfig,
    summarizer::{GenerationParams, SummarizerClient},
    text, Error, Result,
};
use std::sync::Arc;
use tracing::debug;

/// The summarizer input corpus is capped so a large batch cannot blow past
/// the model's context window.
const MAX_CORPUS_CHARS: usize = 1800;

/// T5-style task prefix marking the input as a summarization job.
const TASK_PREFIX: &str = "summarize: ";

#[derive(Debug, Clone)]
pub struct ReviewAnalysis {
    pub tone: Tone,
    pub mood: String,
    pub summary: String,
}

/// Sequences validation, tone aggregation, model inference, and output
/// cleanup for one review batch.
pub struct InsightService {
    summarizer: Arc<dyn SummarizerClient>,
    limits: LimitsConfig,
    params: GenerationParams,
}

impl InsightService {
    pub fn new(summarizer: Arc<dyn SummarizerClient>, limits: LimitsConfig) -> Self {
        Self {
            summarizer,
            limits,
            params: GenerationParams::default(),
        }
    }

    fn validate(&self, reviews: &[ReviewItem]) -> Result<()> {
        if reviews.len() > self.limits.max_reviews {
            return Err(Error::validation(format!(
                "reviews exceeds limit: {}",
                self.limits.max_reviews
            )));
        }
        for review in reviews {
            if !(1..=5).contains(&review.rating) {
                return Err(Error::validation(format!(
                    "rating out of range (1..=5): {}",
                    review.rating
                )));
            }
            let comment = review.comment.trim();
            if comment.is_empty() {
                return Err(Error::validation("comment must not be empty"));
            }
            if comment.chars().count() > self.limits.max_comment_len {
                return Err(Error::validation(format!(
                    "comment too long (max {})",
                    self.limits.max_comment_len
                )));
            }
        }
        Ok(())
    }

    /// Builds the model input: sanitized, deduplicated comments joined by
    /// blank lines so the model sees distinct passages, capped and prefixed
    /// with the task marker. Empty when no usable text survives.
    pub fn build_summary_input(&self, reviews: &[ReviewItem]) -> String {
        let parts: Vec<String> = reviews
            .iter()
            .map(|r| text::normalize_whitespace(&text::sanitize(&r.comment)))
            .filter(|c| !c.is_empty())
            .collect();

        if parts.is_empty() {
            return String::new();
        }

        let parts = text::dedupe_keep_order(parts);
        let mut corpus = parts.join("\n\n");

        if corpus.chars().count() > MAX_CORPUS_CHARS {
            corpus = corpus.chars().take(MAX_CORPUS_CHARS).collect();
        }

        format!("{TASK_PREFIX}{corpus}")
    }

    /// Summarizes the batch and runs the output through the cleanup chain.
    /// A batch with no usable text yields an empty summary without touching
    /// the model.
    pub async fn summarize_reviews(&self, reviews: &[ReviewItem]) -> Result<String> {
        self.validate(reviews)?;

        let input = self.build_summary_input(reviews);
        if input.is_empty() {
            debug!("No usable review text; skipping model call");
            return Ok(String::new());
        }

        let raw = self.summarizer.summarize(&input, &self.params).await?;

        let summary = text::normalize_whitespace(&raw);
        let summary = text::convert_to_polite(&summary);
        let summary = text::normalize_whitespace(&summary);
        let summary = text::fix_spacing(&summary);
        let summary = text::finalize_punctuation_spacing(&summary);

        Ok(summary)
    }

    pub async fn analyze(&self, reviews: &[ReviewItem]) -> Result<ReviewAnalysis> {
        self.validate(reviews)?;

        // Tone comes from ratings only; cheap and stable.
        let tone = aggregate_tone(reviews);
        let summary = self.summarize_reviews(reviews).await?;

        Ok(ReviewAnalysis {
            tone,
            mood: tone.mood_label().to_string(),
            summary,
        })
    }
}
