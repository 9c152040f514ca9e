use super::ReviewItem;

/// Coarse sentiment derived from star ratings alone. The review text never
/// influences the tone, which keeps classification deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Neutral,
    Negative,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Neutral => "NEUTRAL",
            Self::Negative => "NEGATIVE",
        }
    }

    /// Korean label used in the response payload.
    pub fn mood_label(&self) -> &'static str {
        match self {
            Self::Positive => "긍정적",
            Self::Neutral => "중립",
            Self::Negative => "부정적",
        }
    }
}

pub fn tone_from_rating(avg: f64) -> Tone {
    if avg >= 4.0 {
        Tone::Positive
    } else if avg <= 2.0 {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

pub fn avg_rating(reviews: &[ReviewItem]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    f64::from(sum) / reviews.len() as f64
}

/// Empty batches are neutral; otherwise the tone of the mean rating.
pub fn aggregate_tone(reviews: &[ReviewItem]) -> Tone {
    if reviews.is_empty() {
        return Tone::Neutral;
    }
    tone_from_rating(avg_rating(reviews))
}
