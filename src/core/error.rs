//! Engine error types.
//!
//! Flipping cards never fails: invalid flips are ignored. Errors only arise
//! when a game is configured badly or a snapshot cannot be decoded.
//!
//! | Error | When |
//! |-------|------|
//! | [`ConfigError::NoPairs`] | `pair_count == 0` |
//! | [`ConfigError::NoPlayers`] | `player_count == 0` |
//! | [`ConfigError::TooManyPlayers`] | more than 255 players |
//! | [`ConfigError::ThemePoolExhausted`] | more pairs than the theme has symbols |
//! | [`SnapshotError`] | snapshot bytes are not a valid encoded state |

use thiserror::Error;

use crate::cards::Theme;

/// A game configuration that cannot be dealt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one pair of cards")]
    NoPairs,

    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("{requested} players requested, at most {max} supported")]
    TooManyPlayers { requested: usize, max: usize },

    #[error("theme {theme} has {available} symbols, {requested} pairs requested")]
    ThemePoolExhausted {
        theme: Theme,
        requested: usize,
        available: usize,
    },
}

/// Snapshot bytes could not be decoded.
#[derive(Debug, Error)]
#[error("invalid game snapshot: {0}")]
pub struct SnapshotError(#[from] bincode::Error);
