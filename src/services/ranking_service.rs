use std::cmp::Ordering;

use crate::state::tally::{AnswerStore, Tally};

/// Leaderboard order: score desc, then correct answers desc, then user id asc.
///
/// The user id key makes the order total, so equal tallies always come out
/// in the same order regardless of map iteration order.
pub fn leaderboard_order(a: &Tally, b: &Tally) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| b.correct.cmp(&a.correct))
        .then_with(|| a.user_id.cmp(&b.user_id))
}

/// Snapshot every tally and return them in leaderboard order.
pub fn rank(store: &AnswerStore) -> Vec<Tally> {
    // Clone under the read lock, sort after releasing it.
    let mut ranking: Vec<Tally> = store.read().values().cloned().collect();

    ranking.sort_by(leaderboard_order);
    ranking
}

/// The first `limit` entries of [`rank`].
pub fn top(store: &AnswerStore, limit: usize) -> Vec<Tally> {
    let mut ranking = rank(store);
    ranking.truncate(limit);
    ranking
}
