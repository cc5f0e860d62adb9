//! Scoring and end-of-game standings.

mod result;

pub use result::GameResult;
