use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

/// Running answer totals for a single user.
///
/// `score` is derived from the two counters and recomputed on every write,
/// see [`Tally::recompute_score`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tally {
    pub user_id: String,
    #[serde(rename = "correct_answers")]
    pub correct: u64,
    #[serde(rename = "incorrect_answers")]
    pub incorrect: u64,
    pub score: f64,
}

impl Tally {
    /// The record reported for a user that has never answered.
    pub fn empty() -> Self {
        Self {
            user_id: String::new(),
            correct: 0,
            incorrect: 0,
            score: 0.0,
        }
    }

    /// A zeroed record owned by `user_id`, used on first write.
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Self::empty()
        }
    }

    pub fn total(&self) -> u64 {
        self.correct + self.incorrect
    }

    /// `100 * correct / total`, or `0.0` when nothing has been answered yet.
    pub fn recompute_score(&mut self) {
        let total = self.total();
        self.score = if total == 0 {
            0.0
        } else {
            100.0 * self.correct as f64 / total as f64
        };
    }
}

/// Internal HashMap type.
pub type InnerMap = HashMap<String, Tally>;

/// Shared answer store, cloned into every handler.
///
/// A single `RwLock` guards the whole table: writers hold it for the full
/// read-modify-write of one tally, readers see a consistent table.
#[derive(Clone, Default)]
pub struct AnswerStore {
    inner: Arc<RwLock<InnerMap>>,
}

impl AnswerStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every write leaves a complete Tally behind, so a poisoned lock still
    // guards valid data.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, InnerMap> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, InnerMap> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
