use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::services::ranking_service;
use crate::state::tally::{AnswerStore, Tally};

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    pub limit: Option<usize>,
}

pub fn routes(store: AnswerStore) -> Router {
    Router::new()
        .route("/ranking", get(get_ranking))
        .with_state(store)
}

//
// ─────────────────────────────────────────────────────────────
// GET /ranking[?limit=N]
// Leaderboard, best first
// ─────────────────────────────────────────────────────────────
//
async fn get_ranking(
    Query(query): Query<RankingQuery>,
    State(store): State<AnswerStore>,
) -> Json<Vec<Tally>>
{
    let ranking = match query.limit {
        Some(limit) => ranking_service::top(&store, limit),
        None => ranking_service::rank(&store),
    };

    Json(ranking)
}
