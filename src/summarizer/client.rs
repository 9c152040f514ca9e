use super::types::*;
use crate::{config::SummarizerConfig, Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait SummarizerClient: Send + Sync {
    async fn summarize(&self, input: &str, params: &GenerationParams) -> Result<String>;
}

/// Client for a hosted summarization pipeline (HuggingFace Inference API
/// wire shape). Built once at startup and shared across requests.
pub struct HfInferenceClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
    api_token: Option<String>,
}

impl HfInferenceClient {
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs_f64(config.connect_timeout))
            .timeout(Duration::from_secs_f64(config.read_timeout))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model,
            api_token: config.api_token,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.api_base, self.model)
    }
}

#[async_trait]
impl SummarizerClient for HfInferenceClient {
    async fn summarize(&self, input: &str, params: &GenerationParams) -> Result<String> {
        debug!(model = %self.model, input_chars = input.chars().count(), "Requesting summary");

        let body = SummarizationRequest {
            inputs: input,
            parameters: params,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut request = self.http.post(self.endpoint()).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::summarizer(format!(
                "model endpoint returned {status}: {detail}"
            )));
        }

        let outputs: Vec<SummarizationOutput> = response.json().await?;
        let summary = outputs
            .into_iter()
            .next()
            .map(|o| o.summary_text.trim().to_string())
            .ok_or_else(|| Error::summarizer("model returned no candidates"))?;

        debug!(summary_chars = summary.chars().count(), "Received summary");

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummarizerConfig;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> SummarizerConfig {
        SummarizerConfig {
            model: "eenzeenee/t5-base-korean-summarization".to_string(),
            api_base: "https://api-inference.huggingface.co".to_string(),
            api_token: None,
            connect_timeout: 2.0,
            read_timeout: 5.0,
        }
    }

    #[test]
    fn client_builds_model_endpoint() {
        let client = HfInferenceClient::new(create_test_config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://api-inference.huggingface.co/models/eenzeenee/t5-base-korean-summarization"
        );
    }

    #[test]
    fn client_trims_trailing_slash_from_base() {
        let mut config = create_test_config();
        config.api_base = "http://localhost:9000/".to_string();
        config.model = "test-model".to_string();

        let client = HfInferenceClient::new(config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9000/models/test-model");
    }

    #[test]
    fn generation_params_are_deterministic() {
        let params = GenerationParams::default();
        assert!(!params.do_sample);
        assert_eq!(params.num_beams, 6);
        assert_eq!(params.max_length, 96);
        assert_eq!(params.min_length, 28);
    }

    #[test]
    fn request_serializes_expected_wire_shape() {
        let params = GenerationParams::default();
        let body = SummarizationRequest {
            inputs: "summarize: 좋은 리뷰",
            parameters: &params,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["inputs"], "summarize: 좋은 리뷰");
        assert_eq!(json["parameters"]["num_beams"], 6);
        assert_eq!(json["options"]["wait_for_model"], true);
    }
}
