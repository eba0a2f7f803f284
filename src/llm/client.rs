use super::types::*;
use crate::{Error, Result, config::ProviderConfig};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn text_generation(
        &self,
        request: TextGenerationRequest,
    ) -> Result<TextGenerationResponse>;
}

/// Client for the Hugging Face Inference API text-generation task.
pub struct HuggingFaceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HuggingFaceClient {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/models/{}", self.base_url, model)
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn text_generation(
        &self,
        request: TextGenerationRequest,
    ) -> Result<TextGenerationResponse> {
        if self.api_key.trim().is_empty() {
            return Err(Error::config("HUGGING_FACE_API_KEY is not set"));
        }

        let url = self.endpoint(&request.model);
        debug!(
            "Requesting text generation from {} ({} prompt bytes)",
            url,
            request.inputs.len()
        );

        let payload = InferencePayload {
            inputs: &request.inputs,
            parameters: &request.parameters,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response body>".to_string());
            return Err(Error::provider(format!(
                "text generation failed ({}): {}",
                status, body
            )));
        }

        let body = response.text().await?;
        let output: InferenceOutput = serde_json::from_str(&body)?;

        debug!("Received text generation response: {}", body);

        Ok(output.into_first())
    }
}
