//! Card identity and face-up/matched flags.

use serde::{Deserialize, Serialize};

/// Card identifier, unique within a deal.
///
/// The two cards of the i-th symbol get ids `2i` and `2i + 1` before
/// shuffling, so ids carry no information about board position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
///
/// The identity and face value never change. `flipped` and `matched` are
/// only mutated by the engine; a matched card always stays flipped.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    value: String,
    flipped: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    pub fn new(id: CardId, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
            flipped: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// The face symbol shared with exactly one other card.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can this card be turned face up right now?
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Do two cards show the same symbol?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.value == other.value
    }

    pub(crate) fn flip(&mut self) {
        self.flipped = true;
    }

    pub(crate) fn unflip(&mut self) {
        debug_assert!(!self.matched, "matched cards stay face up");
        self.flipped = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.flipped = true;
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(7);
        assert_eq!(id.raw(), 7);
        assert_eq!(format!("{}", id), "Card(7)");
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardId::new(0), "red");
        assert_eq!(card.value(), "red");
        assert!(!card.is_flipped());
        assert!(!card.is_matched());
        assert!(card.is_selectable());
    }

    #[test]
    fn test_flip_cycle() {
        let mut card = Card::new(CardId::new(0), "1");
        card.flip();
        assert!(card.is_flipped());
        assert!(!card.is_selectable());

        card.unflip();
        assert!(!card.is_flipped());
        assert!(card.is_selectable());
    }

    #[test]
    fn test_matched_card_is_face_up() {
        let mut card = Card::new(CardId::new(0), "1");
        card.flip();
        card.mark_matched();
        assert!(card.is_flipped());
        assert!(card.is_matched());
        assert!(!card.is_selectable());
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardId::new(0), "🐶");
        let b = Card::new(CardId::new(1), "🐶");
        let c = Card::new(CardId::new(2), "🐱");
        assert!(a.pairs_with(&b));
        assert!(!a.pairs_with(&c));
    }
}
