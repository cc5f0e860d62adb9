//! Game event types.
//!
//! Every state transition of a memory game produces exactly one of these.
//! Each variant carries its own payload struct, so handlers match on the
//! variant instead of probing for fields.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{GameState, PlayerId};

/// The five kinds of event a game emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    CardFlipped,
    MatchFound,
    NoMatch,
    PlayerSwitch,
    GameOver,
}

impl EventKind {
    /// Every kind, in declaration order.
    pub const ALL: [EventKind; 5] = [
        EventKind::CardFlipped,
        EventKind::MatchFound,
        EventKind::NoMatch,
        EventKind::PlayerSwitch,
        EventKind::GameOver,
    ];

    /// Stable camelCase name used by front ends.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::CardFlipped => "cardFlip",
            EventKind::MatchFound => "matchFound",
            EventKind::NoMatch => "noMatch",
            EventKind::PlayerSwitch => "playerSwitch",
            EventKind::GameOver => "gameOver",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A card was turned face up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardFlipped {
    pub card_id: CardId,
    /// The player whose turn it was.
    pub player_id: PlayerId,
}

/// Two face-up cards showed the same symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchFound {
    /// In flip order.
    pub card_ids: [CardId; 2],
    pub player_id: PlayerId,
    /// The player's score after this match.
    pub score: u32,
}

/// A mismatched pair was turned back face down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoMatch {
    /// In flip order.
    pub card_ids: [CardId; 2],
}

/// The turn passed to the next player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerSwitch {
    pub previous_player: PlayerId,
    pub next_player: PlayerId,
}

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CardFlipped(CardFlipped),
    MatchFound(MatchFound),
    NoMatch(NoMatch),
    PlayerSwitch(PlayerSwitch),
    /// The last pair was found. Carries the final state.
    GameOver(Box<GameState>),
}

impl GameEvent {
    /// The kind this event is dispatched under.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::CardFlipped(_) => EventKind::CardFlipped,
            GameEvent::MatchFound(_) => EventKind::MatchFound,
            GameEvent::NoMatch(_) => EventKind::NoMatch,
            GameEvent::PlayerSwitch(_) => EventKind::PlayerSwitch,
            GameEvent::GameOver(_) => EventKind::GameOver,
        }
    }

    /// Card ids mentioned by this event, if any.
    #[must_use]
    pub fn card_ids(&self) -> &[CardId] {
        match self {
            GameEvent::CardFlipped(e) => std::slice::from_ref(&e.card_id),
            GameEvent::MatchFound(e) => &e.card_ids,
            GameEvent::NoMatch(e) => &e.card_ids,
            GameEvent::PlayerSwitch(_) | GameEvent::GameOver(_) => &[],
        }
    }
}

impl From<CardFlipped> for GameEvent {
    fn from(payload: CardFlipped) -> Self {
        GameEvent::CardFlipped(payload)
    }
}

impl From<MatchFound> for GameEvent {
    fn from(payload: MatchFound) -> Self {
        GameEvent::MatchFound(payload)
    }
}

impl From<NoMatch> for GameEvent {
    fn from(payload: NoMatch) -> Self {
        GameEvent::NoMatch(payload)
    }
}

impl From<PlayerSwitch> for GameEvent {
    fn from(payload: PlayerSwitch) -> Self {
        GameEvent::PlayerSwitch(payload)
    }
}
