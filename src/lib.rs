//! # memory-match
//!
//! The rules engine of a multi-player memory card game, decoupled from
//! rendering by a typed event bus.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: `MemoryGame` owns the only mutable state. Readers
//!    get snapshots or shared borrows, never a way to mutate.
//!
//! 2. **Invalid input is not an error**: flipping an unknown, face-up or
//!    matched card is silently ignored. Only a bad configuration fails.
//!
//! 3. **Events for everything**: every state transition is announced, so a
//!    front end can re-render from events alone.
//!
//! 4. **Explicit time**: the mismatch delay is a cancellable scheduled task
//!    driven by a pluggable clock, not a hidden timer.
//!
//! ## Modules
//!
//! - `core`: Players, state, configuration, RNG, errors
//! - `cards`: Cards, themes and dealing
//! - `events`: Event types and the subscriber bus
//! - `rules`: End-of-game standings
//! - `schedule`: Clocks and the deferred task queue
//! - `games`: The memory game engine

pub mod cards;
pub mod core;
pub mod events;
pub mod games;
pub mod rules;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    ActionRecord, ConfigError, Difficulty, GameConfig, GamePhase, GameRng, GameState, Player,
    PlayerId, PlayerMap, SnapshotError,
};

pub use crate::cards::{Card, CardId, Theme};

pub use crate::events::{
    CardFlipped, EventBus, EventKind, GameEvent, ListenerId, MatchFound, NoMatch, PlayerSwitch,
};

pub use crate::rules::GameResult;

pub use crate::schedule::{Clock, ManualClock, Scheduler, SystemClock, TaskId, TokioClock};

pub use crate::games::memory::{FlipOutcome, IgnoreReason, MemoryGame};
