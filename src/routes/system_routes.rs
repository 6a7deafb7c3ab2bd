use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::config::AppConfig;

pub fn routes(config: AppConfig) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .with_state(config)
}

/// GET /health
async fn health() -> &'static str {
    "alive"
}

/// GET /version
async fn version(State(config): State<AppConfig>) -> Json<serde_json::Value> {
    Json(json!({
        "version": config.server_version
    }))
}
