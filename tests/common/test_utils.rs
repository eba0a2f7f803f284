use super::mocks::StubGenerator;
use askmedical::{
    config::ProviderConfig,
    server::{self, AppState},
};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_MODEL: &str = "test-org/test-model";

/// Create a router backed by the given stub generator
pub fn create_test_app(generator: &StubGenerator) -> Router {
    server::router(AppState::new(Arc::new(generator.clone()), TEST_MODEL))
}

/// Provider settings pointing at a local mock server
pub fn create_provider_config(base_url: &str) -> ProviderConfig {
    ProviderConfig {
        base_url: base_url.to_string(),
        api_key: "hf_test_key".to_string(),
        model: TEST_MODEL.to_string(),
        timeout_secs: 5,
    }
}

/// Build a JSON POST to /askmedical
pub fn ask_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/askmedical")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
