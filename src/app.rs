use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::AppConfig;
use crate::routes::{answer_routes, ranking_routes, system_routes};
use crate::state::tally::AnswerStore;

/// Build the complete Axum application:
/// - /stats, /correct_answer, /incorrect_answer   (per-user tallies)
/// - /user/{user_id}/...                          (older path layout)
/// - /ranking                                     (leaderboard)
/// - /health, /version                            (system)
///
/// `store` is cloned into each router that needs it.
pub fn build_app(store: AnswerStore, cfg: AppConfig) -> Router {
    Router::new()
        .merge(answer_routes::routes(store.clone()))
        .nest("/user", answer_routes::legacy_routes(store.clone()))
        .merge(ranking_routes::routes(store))
        .merge(system_routes::routes(cfg))
        .layer(cors_layer())
        // Logging middleware
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Any origin; GET, HEAD, POST, PUT and OPTIONS.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
}
