mod client;
mod types;

pub use client::{HfInferenceClient, SummarizerClient};
pub use types::{GenerationParams, InferenceOptions, SummarizationOutput, SummarizationRequest};
