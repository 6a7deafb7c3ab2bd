use tracing::debug;

use crate::state::tally::{AnswerStore, Tally};

/// Return the tally for `user_id`, or [`Tally::empty`] if the user never answered.
pub fn get_tally(store: &AnswerStore, user_id: &str) -> Tally {
    let map = store.read();

    match map.get(user_id) {
        Some(tally) => tally.clone(),
        None => Tally::empty(),
    }
}

/// Record one answer for `user_id` and return the updated tally.
///
/// Lookup, increment, score recomputation and write-back all happen while the
/// write lock is held, so concurrent calls never lose an update.
pub fn record_answer(store: &AnswerStore, user_id: &str, is_correct: bool) -> Tally {
    let updated = {
        let mut map = store.write();

        let mut tally = map
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| Tally::for_user(user_id));

        if is_correct {
            tally.correct += 1;
        } else {
            tally.incorrect += 1;
        }
        tally.recompute_score();

        map.insert(user_id.to_string(), tally.clone());
        tally
    };

    debug!(
        user_id,
        is_correct,
        correct = updated.correct,
        incorrect = updated.incorrect,
        score = updated.score,
        "Answer recorded"
    );

    updated
}

/// Number of correct answers recorded for `user_id` (0 if unknown).
pub fn correct_count(store: &AnswerStore, user_id: &str) -> u64 {
    store.read().get(user_id).map_or(0, |t| t.correct)
}

/// Number of incorrect answers recorded for `user_id` (0 if unknown).
pub fn incorrect_count(store: &AnswerStore, user_id: &str) -> u64 {
    store.read().get(user_id).map_or(0, |t| t.incorrect)
}

/// Return number of tracked users.
pub fn user_count(store: &AnswerStore) -> usize {
    store.read().len()
}
