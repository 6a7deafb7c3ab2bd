//! tallyboard: per-user quiz answer tallies and a global leaderboard over HTTP.
//!
//! State lives in a single in-memory [`state::AnswerStore`] built by the
//! binary and shared with every handler. Nothing is persisted.

pub mod app;
pub mod config;
pub mod errors;
pub mod routes;
pub mod services;
pub mod state;
