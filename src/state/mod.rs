pub mod tally;

pub use tally::{AnswerStore, Tally};
