//! Game state: the board, the players and whose turn it is.
//!
//! ## Ownership
//!
//! The engine owns the only mutable `GameState`. Everyone else gets either
//! a shared borrow (inside event handlers) or an owned snapshot. Cards are
//! stored in an `im::Vector`, so a snapshot clone shares structure with the
//! live board instead of copying it.
//!
//! ## Invariants
//!
//! - a matched card is always face up
//! - `current_player` names a seated player
//! - exactly one player is active while the game is in progress
//! - `game_over` holds exactly when every card is matched
//! - the scores add up to the number of matched pairs

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::ActionRecord;
use super::config::GameConfig;
use super::error::{ConfigError, SnapshotError};
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{self, Card, CardId};
use crate::events::GameEvent;
use crate::rules::GameResult;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pairs remain to be found.
    InProgress,
    /// Every card is matched. Terminal.
    GameOver,
}

/// Complete state of one memory game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board in display order.
    cards: Vector<Card>,

    players: PlayerMap<Player>,

    /// Whose turn it is.
    current_player: PlayerId,

    game_over: bool,

    last_action: Option<ActionRecord>,
}

impl GameState {
    /// Deal a fresh board for `config`.
    ///
    /// Player 0 starts. Fails if the configuration is invalid.
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let cards = cards::deal(config.theme, config.pair_count, rng)?;
        let mut players = PlayerMap::new(config.player_count, Player::new);
        let first = PlayerId::new(0);
        players[first].set_active(true);

        Ok(Self {
            cards,
            players,
            current_player: first,
            game_over: false,
            last_action: None,
        })
    }

    // === Cards ===

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// Check if every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    // === Players ===

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Look up a player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Sum of all scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.players.values().map(Player::score).sum()
    }

    // === Progress ===

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else {
            GamePhase::InProgress
        }
    }

    /// The most recent recorded transition.
    #[must_use]
    pub fn last_action(&self) -> Option<&ActionRecord> {
        self.last_action.as_ref()
    }

    /// Final standings, or `None` while the game is in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.game_over.then(|| GameResult::from_players(&self.players))
    }

    // === Snapshots ===

    /// Encode this state as compact bytes.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by [`GameState::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    // === Engine mutation ===

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let pos = self.cards.iter().position(|c| c.id() == id)?;
        self.cards.get_mut(pos)
    }

    /// Give the current player one pair and return their new score.
    pub(crate) fn award_current_player(&mut self) -> u32 {
        self.players[self.current_player].award_pair()
    }

    /// Hand the turn to the next seat and return `(previous, next)`.
    pub(crate) fn advance_turn(&mut self) -> (PlayerId, PlayerId) {
        let previous = self.current_player;
        let next = previous.next(self.player_count());

        self.players[previous].set_active(false);
        self.players[next].set_active(true);
        self.current_player = next;
        (previous, next)
    }

    pub(crate) fn finish(&mut self) {
        self.game_over = true;
    }

    pub(crate) fn record(&mut self, event: &GameEvent) {
        self.last_action = Some(ActionRecord::now(event.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Theme;

    fn dealt(pairs: usize, players: usize) -> GameState {
        let config = GameConfig::new(pairs, players, Theme::Numbers);
        GameState::deal(&config, &mut GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_deal_initial_state() {
        let state = dealt(3, 2);

        assert_eq!(state.cards().len(), 6);
        assert!(state.cards().iter().all(Card::is_selectable));
        assert_eq!(state.current_player(), PlayerId::new(0));
        assert!(state.players()[PlayerId::new(0)].is_active());
        assert!(!state.players()[PlayerId::new(1)].is_active());
        assert_eq!(state.total_score(), 0);
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert!(state.last_action().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_deal_rejects_bad_config() {
        let config = GameConfig::new(11, 2, Theme::Emojis);
        assert!(GameState::deal(&config, &mut GameRng::new(1)).is_err());
    }

    #[test]
    fn test_card_lookup() {
        let state = dealt(2, 1);
        assert_eq!(state.card(CardId::new(3)).map(Card::id), Some(CardId::new(3)));
        assert!(state.card(CardId::new(4)).is_none());
    }

    #[test]
    fn test_advance_turn_wraps() {
        let mut state = dealt(2, 3);

        assert_eq!(state.advance_turn(), (PlayerId::new(0), PlayerId::new(1)));
        assert_eq!(state.advance_turn(), (PlayerId::new(1), PlayerId::new(2)));
        assert_eq!(state.advance_turn(), (PlayerId::new(2), PlayerId::new(0)));

        let active: Vec<_> = state
            .players()
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(id, _)| id)
            .collect();
        assert_eq!(active, vec![PlayerId::new(0)]);
    }

    #[test]
    fn test_award_current_player() {
        let mut state = dealt(2, 2);
        state.advance_turn();
        assert_eq!(state.award_current_player(), 1);
        assert_eq!(state.players()[PlayerId::new(1)].score(), 1);
        assert_eq!(state.total_score(), 1);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut state = dealt(2, 1);
        let snapshot = state.clone();

        let id = state.cards()[0].id();
        state.card_mut(id).unwrap().flip();

        assert!(state.card(id).unwrap().is_flipped());
        assert!(!snapshot.card(id).unwrap().is_flipped());
    }

    #[test]
    fn test_encode_decode() {
        let state = dealt(4, 2);
        let bytes = state.encode().unwrap();
        assert_eq!(GameState::decode(&bytes).unwrap(), state);
        assert!(GameState::decode(&[0xff]).is_err());
    }
}
