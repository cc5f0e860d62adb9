//! Card face themes and their symbol pools.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

const EMOJI_POOL: [&str; 10] = ["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯"];

const COLOR_POOL: [&str; 10] = [
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "brown", "gray", "cyan",
];

/// Source of card face values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// "1", "2", ... up to the pair count. Never runs out.
    #[default]
    Numbers,
    /// Ten animal emojis.
    Emojis,
    /// Ten color names.
    Colors,
}

impl Theme {
    /// Size of the fixed symbol pool, `None` for unbounded themes.
    #[must_use]
    pub const fn pool_size(self) -> Option<usize> {
        match self {
            Theme::Numbers => None,
            Theme::Emojis => Some(EMOJI_POOL.len()),
            Theme::Colors => Some(COLOR_POOL.len()),
        }
    }

    /// Lowercase theme name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Numbers => "numbers",
            Theme::Emojis => "emojis",
            Theme::Colors => "colors",
        }
    }

    /// Check that the theme can supply `pair_count` distinct symbols.
    pub fn check_capacity(self, pair_count: usize) -> Result<(), ConfigError> {
        match self.pool_size() {
            Some(available) if pair_count > available => Err(ConfigError::ThemePoolExhausted {
                theme: self,
                requested: pair_count,
                available,
            }),
            _ => Ok(()),
        }
    }

    /// The first `pair_count` symbols of this theme, in pool order.
    ///
    /// ```
    /// use memory_match::cards::Theme;
    ///
    /// assert_eq!(Theme::Numbers.symbols(3).unwrap(), vec!["1", "2", "3"]);
    /// assert_eq!(Theme::Colors.symbols(2).unwrap(), vec!["red", "blue"]);
    /// assert!(Theme::Emojis.symbols(11).is_err());
    /// ```
    pub fn symbols(self, pair_count: usize) -> Result<Vec<String>, ConfigError> {
        self.check_capacity(pair_count)?;

        let symbols = match self {
            Theme::Numbers => (1..=pair_count).map(|n| n.to_string()).collect(),
            Theme::Emojis => pool_prefix(&EMOJI_POOL, pair_count),
            Theme::Colors => pool_prefix(&COLOR_POOL, pair_count),
        };
        Ok(symbols)
    }
}

fn pool_prefix(pool: &[&str], count: usize) -> Vec<String> {
    pool.iter().take(count).map(|s| (*s).to_string()).collect()
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
