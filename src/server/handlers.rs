use super::types::{AskMedicalRequest, AskMedicalResponse, ErrorResponse};
use crate::{
    llm::{TextGenerationRequest, TextGenerator},
    prompt::format_prompt,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const MISSING_FIELDS: &str = "Both 'question' and 'context' fields are required.";
pub const EMPTY_GENERATION: &str = "Failed to generate a valid response.";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub model: String,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

pub async fn root() -> &'static str {
    "Reached root"
}

pub async fn ask_medical(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AskMedicalResponse>, ApiError> {
    info!("Received medical query request");

    // Unparseable bodies carry no fields and fall through to the 400 below.
    let request = payload
        .map(|Json(body)| AskMedicalRequest::from(body))
        .unwrap_or_else(|rejection| {
            warn!("Could not read request body: {}", rejection);
            AskMedicalRequest::default()
        });

    let Some(query) = request.into_query() else {
        return Err(api_error(StatusCode::BAD_REQUEST, MISSING_FIELDS));
    };

    info!("Question: {}", query.question);
    info!("Context: {}", query.context);

    let prompt = format_prompt(&query.question, &query.context);
    debug!("Formatted prompt: {}", prompt);

    let result = match state
        .generator
        .text_generation(TextGenerationRequest::new(state.model.as_str(), prompt))
        .await
    {
        Ok(result) => result,
        Err(e) => {
            error!("Error processing request: {}", e);
            return Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR));
        }
    };

    let Some(text) = result.text() else {
        warn!("Provider returned no generated text: {:?}", result);
        return Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, EMPTY_GENERATION));
    };

    info!("Generated result: {:?}", result);

    Ok(Json(AskMedicalResponse {
        answer: text.trim().to_string(),
    }))
}
