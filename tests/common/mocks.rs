use async_trait::async_trait;
use review_insight::{
    summarizer::{GenerationParams, SummarizerClient},
    Error, Result,
};
use std::sync::{Arc, Mutex};

/// Mock summarizer client for testing
#[derive(Debug)]
pub struct MockSummarizerClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockSummarizerClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<String>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizerClient for MockSummarizerClient {
    async fn summarize(&self, input: &str, _params: &GenerationParams) -> Result<String> {
        self.requests.lock().unwrap().push(input.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::summarizer(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::summarizer("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockSummarizerClient {
    fn default() -> Self {
        Self::new()
    }
}
