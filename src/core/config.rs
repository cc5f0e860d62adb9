//! Game configuration types.
//!
//! A game is configured once, before the board is dealt:
//! - how many pairs and players
//! - which theme supplies card faces
//! - how long a mismatched pair stays face up
//!
//! The configuration is immutable once a game has been built from it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::MAX_PLAYERS;
use crate::cards::Theme;

/// How long a mismatched pair stays face up before it is turned back.
pub const DEFAULT_MISMATCH_DELAY: Duration = Duration::from_millis(1000);

/// Difficulty level.
///
/// Reserved for tuning; the rules do not read it yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Complete game configuration.
///
/// ```
/// use std::time::Duration;
/// use memory_match::cards::Theme;
/// use memory_match::core::{Difficulty, GameConfig};
///
/// let config = GameConfig::new(6, 2, Theme::Emojis)
///     .with_difficulty(Difficulty::Easy)
///     .with_mismatch_delay(Duration::from_millis(500))
///     .with_seed(7);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.card_count(), 12);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs on the board.
    pub pair_count: usize,

    /// Number of players (1-255).
    pub player_count: usize,

    /// Where card faces come from.
    pub theme: Theme,

    /// Optional difficulty, currently informational.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    /// Delay before a mismatched pair is turned back and the turn passes.
    #[serde(default = "default_mismatch_delay")]
    pub mismatch_delay: Duration,

    /// Shuffle seed. `None` draws a fresh seed for every deal.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_mismatch_delay() -> Duration {
    DEFAULT_MISMATCH_DELAY
}

impl GameConfig {
    /// Create a new game configuration.
    ///
    /// Nothing is checked here; games call [`GameConfig::validate`] before
    /// dealing.
    pub fn new(pair_count: usize, player_count: usize, theme: Theme) -> Self {
        Self {
            pair_count,
            player_count,
            theme,
            difficulty: None,
            mismatch_delay: DEFAULT_MISMATCH_DELAY,
            seed: None,
        }
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check that this configuration can be dealt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pair_count == 0 {
            return Err(ConfigError::NoPairs);
        }
        if self.player_count == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(ConfigError::TooManyPlayers {
                requested: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        self.theme.check_capacity(self.pair_count)
    }
}
