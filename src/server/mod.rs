pub mod handlers;
pub mod types;

pub use handlers::AppState;

use crate::{Result, config::Config, llm::HuggingFaceClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Builds the HTTP surface around the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/askmedical", post(handlers::ask_medical))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    if config.provider.api_key.trim().is_empty() {
        warn!("HUGGING_FACE_API_KEY is not set; /askmedical requests will fail");
    }

    // Initialize provider client
    let model = config.provider.model.clone();
    let generator = HuggingFaceClient::new(config.provider)?;

    let app = router(AppState::new(Arc::new(generator), model));

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Medical Query API server is listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
