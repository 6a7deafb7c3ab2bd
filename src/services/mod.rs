pub mod ranking_service;
pub mod tally_service;
