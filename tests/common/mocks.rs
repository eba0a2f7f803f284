use askmedical::{
    Error, Result,
    llm::{TextGenerationRequest, TextGenerationResponse, TextGenerator},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Stub text generator that replays a canned outcome and records requests
#[derive(Debug, Clone)]
pub struct StubGenerator {
    pub response: TextGenerationResponse,
    pub requests: Arc<Mutex<Vec<TextGenerationRequest>>>,
    pub error: Option<String>,
}

impl StubGenerator {
    pub fn new() -> Self {
        Self {
            response: TextGenerationResponse::default(),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.response = TextGenerationResponse::with_text(text);
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_requests(&self) -> Vec<TextGenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn text_generation(
        &self,
        request: TextGenerationRequest,
    ) -> Result<TextGenerationResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::provider(error.clone()));
        }

        Ok(self.response.clone())
    }
}

impl Default for StubGenerator {
    fn default() -> Self {
        Self::new()
    }
}
