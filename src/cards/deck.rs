//! Dealing a shuffled board of pairs.

use im::Vector;

use super::card::{Card, CardId};
use super::theme::Theme;
use crate::core::{ConfigError, GameRng};

/// Build `pair_count` pairs from the theme's symbols and shuffle them.
///
/// Each symbol appears on exactly two cards. Fails when the theme's
/// symbol pool is smaller than `pair_count`.
pub fn deal(theme: Theme, pair_count: usize, rng: &mut GameRng) -> Result<Vector<Card>, ConfigError> {
    let symbols = theme.symbols(pair_count)?;

    let mut cards = Vec::with_capacity(pair_count * 2);
    for (i, symbol) in symbols.into_iter().enumerate() {
        let first = CardId::new((i * 2) as u32);
        let second = CardId::new((i * 2 + 1) as u32);
        cards.push(Card::new(first, symbol.clone()));
        cards.push(Card::new(second, symbol));
    }

    rng.shuffle(&mut cards);
    Ok(cards.into_iter().collect())
}
