//! Core engine types: players, state, configuration, RNG, errors.
//!
//! These are the building blocks shared by the rules and the event layer.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::ActionRecord;
pub use config::{Difficulty, GameConfig, DEFAULT_MISMATCH_DELAY};
pub use error::{ConfigError, SnapshotError};
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use state::{GamePhase, GameState};
