use serde::{Deserialize, Serialize};

/// Decoding parameters sent to the summarization model. Sampling is disabled
/// so identical input yields a stable summary.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub num_beams: u32,
    pub do_sample: bool,
    pub no_repeat_ngram_size: u32,
    pub encoder_no_repeat_ngram_size: u32,
    pub repetition_penalty: f32,
    pub length_penalty: f32,
    pub truncation: bool,
    pub early_stopping: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            // Bounds the summary on both sides.
            max_length: 96,
            min_length: 28,
            num_beams: 6,
            do_sample: false,
            no_repeat_ngram_size: 4,
            encoder_no_repeat_ngram_size: 4,
            repetition_penalty: 1.15,
            length_penalty: 1.1,
            truncation: true,
            early_stopping: true,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummarizationRequest<'a> {
    pub inputs: &'a str,
    pub parameters: &'a GenerationParams,
    pub options: InferenceOptions,
}

#[derive(Debug, Serialize)]
pub struct InferenceOptions {
    pub wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
pub struct SummarizationOutput {
    pub summary_text: String,
}
