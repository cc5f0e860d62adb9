//! Memory: find the pairs among face-down cards.
//!
//! - Cards are dealt face down in shuffled pairs
//! - On your turn, turn two cards face up
//! - A pair scores a point and you go again
//! - A mismatch is shown for a moment, turned back, and the turn passes
//! - The game ends when every pair is found; highest score wins
//!
//! Supports 1-255 players.

mod driver;
mod game;

pub use game::{FlipOutcome, IgnoreReason, MemoryGame};
