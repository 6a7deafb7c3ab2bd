use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::services::tally_service;
use crate::state::tally::{AnswerStore, Tally};

/// Per-user routes:
/// - GET  /stats/{user_id}
/// - POST /correct_answer/{user_id}
/// - POST /incorrect_answer/{user_id}
pub fn routes(store: AnswerStore) -> Router {
    Router::new()
        .route("/stats/:user_id", get(get_stats))
        .route("/correct_answer/:user_id", post(save_correct_answer))
        .route("/incorrect_answer/:user_id", post(save_incorrect_answer))
        .with_state(store)
}

/// The same handlers under the older `/user/{user_id}/...` layout.
/// Nested at `/user` by `app::build_app`.
pub fn legacy_routes(store: AnswerStore) -> Router {
    Router::new()
        .route("/:user_id/stats", get(get_stats))
        .route("/:user_id/correct_answer", post(save_correct_answer))
        .route("/:user_id/incorrect_answer", post(save_incorrect_answer))
        .with_state(store)
}

//
// ─────────────────────────────────────────────────────────────
// GET /stats/{user_id}
// Tally for the user, zeroed if unknown
// ─────────────────────────────────────────────────────────────
//
async fn get_stats(
    Path(user_id): Path<String>,
    State(store): State<AnswerStore>,
) -> Json<Tally>
{
    Json(tally_service::get_tally(&store, &user_id))
}

//
// ─────────────────────────────────────────────────────────────
// POST /correct_answer/{user_id}
// ─────────────────────────────────────────────────────────────
//
async fn save_correct_answer(
    Path(user_id): Path<String>,
    State(store): State<AnswerStore>,
) -> StatusCode
{
    tally_service::record_answer(&store, &user_id, true);
    StatusCode::CREATED
}

//
// ─────────────────────────────────────────────────────────────
// POST /incorrect_answer/{user_id}
// ─────────────────────────────────────────────────────────────
//
async fn save_incorrect_answer(
    Path(user_id): Path<String>,
    State(store): State<AnswerStore>,
) -> StatusCode
{
    tally_service::record_answer(&store, &user_id, false);
    StatusCode::CREATED
}
