//! The memory game engine.

use std::time::Instant;

use smallvec::SmallVec;

use crate::cards::CardId;
use crate::core::{ConfigError, GameConfig, GamePhase, GameRng, GameState};
use crate::events::{
    CardFlipped, EventBus, EventKind, GameEvent, ListenerId, MatchFound, NoMatch, PlayerSwitch,
};
use crate::rules::GameResult;
use crate::schedule::{Clock, Scheduler, SystemClock};

/// Why a flip was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// No card has this ID.
    UnknownCard,
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is already face up.
    AlreadyFlipped,
    /// Two cards are already waiting to be compared.
    SelectionFull,
    /// The game has ended.
    GameOver,
}

/// What a call to [`MemoryGame::flip_card`] did.
///
/// Purely informational: ignored flips are not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlipOutcome {
    /// Nothing changed and no event was emitted.
    Ignored(IgnoreReason),
    /// The card was turned up as the first of a pair.
    Flipped,
    /// The card completed a pair.
    Matched { game_over: bool },
    /// The card did not match; the pair will be turned back later.
    Mismatched,
}

/// A mismatched pair waiting to be turned back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct MismatchResolution {
    card_ids: [CardId; 2],
}

/// A memory game: the board, the turn order and the event bus.
///
/// All state changes go through [`flip_card`](Self::flip_card) and the
/// deferred mismatch resolution it schedules. Every change is announced to
/// subscribers synchronously, on the caller's thread.
///
/// ## Mismatch timing
///
/// When a second card does not match, the pending selection is cleared at
/// once, but the two cards stay face up and the turn does not pass until
/// the configured delay has elapsed. Flips of other cards inside the delay
/// are accepted and credited to the player who made the mismatch.
///
/// Every call to [`flip_card`](Self::flip_card) first turns back the pairs
/// whose delay has already passed, so a late flip always sees the turn that
/// follows them. Between flips, [`resolve_due`](Self::resolve_due) or
/// [`settle`](Self::settle) deliver the resolutions on time.
///
/// ## Example
///
/// ```
/// use memory_match::cards::Theme;
/// use memory_match::core::GameConfig;
/// use memory_match::games::memory::{FlipOutcome, MemoryGame};
///
/// let mut game = MemoryGame::new(GameConfig::new(1, 1, Theme::Numbers)).unwrap();
/// let ids: Vec<_> = game.state_ref().cards().iter().map(|c| c.id()).collect();
///
/// assert_eq!(game.flip_card(ids[0]), FlipOutcome::Flipped);
/// assert_eq!(game.flip_card(ids[1]), FlipOutcome::Matched { game_over: true });
/// assert!(game.state_ref().is_game_over());
/// ```
pub struct MemoryGame {
    config: GameConfig,
    state: GameState,
    /// Face-up cards awaiting comparison, in flip order.
    pending: SmallVec<[CardId; 2]>,
    resolutions: Scheduler<MismatchResolution>,
    bus: EventBus,
    clock: Box<dyn Clock>,
    /// Seed of the current deal.
    seed: u64,
}

impl MemoryGame {
    /// Deal a new game on the system clock.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }

    /// Deal a new game that reads time from `clock`.
    pub fn with_clock(config: GameConfig, clock: impl Clock + 'static) -> Result<Self, ConfigError> {
        let (state, seed) = Self::deal(&config)?;

        tracing::debug!(
            pairs = config.pair_count,
            players = config.player_count,
            theme = %config.theme,
            seed,
            "dealt new game"
        );

        Ok(Self {
            config,
            state,
            pending: SmallVec::new(),
            resolutions: Scheduler::new(),
            bus: EventBus::new(),
            clock: Box::new(clock),
            seed,
        })
    }

    /// Deal from the configured seed, or from fresh entropy when unset.
    fn deal(config: &GameConfig) -> Result<(GameState, u64), ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let state = GameState::deal(config, &mut rng)?;
        Ok((state, rng.seed()))
    }

    // === Subscriptions ===

    /// Register a handler for one kind of event.
    ///
    /// Handlers run synchronously in registration order and see the live
    /// state through a shared borrow.
    pub fn add_event_listener<F>(&mut self, kind: EventKind, handler: F) -> ListenerId
    where
        F: FnMut(&GameEvent, &GameState) + 'static,
    {
        self.bus.subscribe(kind, handler)
    }

    /// Remove a handler. Returns false if it was not registered for `kind`.
    pub fn remove_event_listener(&mut self, kind: EventKind, id: ListenerId) -> bool {
        self.bus.unsubscribe(kind, id)
    }

    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.bus.listener_count(kind)
    }

    // === Reading ===

    /// Owned snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Borrow the current state.
    #[must_use]
    pub fn state_ref(&self) -> &GameState {
        &self.state
    }

    /// Owned copy of the configuration.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config.clone()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    /// Final standings, or `None` while the game is in progress.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result()
    }

    /// Face-up cards waiting for comparison, in flip order.
    #[must_use]
    pub fn pending_selection(&self) -> &[CardId] {
        &self.pending
    }

    /// Number of mismatched pairs waiting to be turned back.
    #[must_use]
    pub fn pending_resolutions(&self) -> usize {
        self.resolutions.len()
    }

    /// When the next mismatched pair is due to be turned back.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.resolutions.next_due()
    }

    /// Seed the current board was dealt from.
    ///
    /// Passing it to [`GameConfig::with_seed`] replays the same deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub(crate) fn now(&self) -> Instant {
        self.clock.now()
    }

    // === Playing ===

    /// Turn a card face up.
    ///
    /// Overdue mismatch resolutions run first. The flip is then ignored
    /// without any event when the card does not exist, is already matched
    /// or face up, when two cards are already pending, or once the game is
    /// over. Otherwise emits `CardFlipped` and, on the second card of a
    /// pair, compares the two.
    pub fn flip_card(&mut self, card_id: CardId) -> FlipOutcome {
        self.resolve_due();

        if let Some(reason) = self.check_flip(card_id) {
            tracing::debug!(card = %card_id, ?reason, "flip ignored");
            return FlipOutcome::Ignored(reason);
        }

        if let Some(card) = self.state.card_mut(card_id) {
            card.flip();
        }
        self.pending.push(card_id);

        let player_id = self.state.current_player();
        tracing::debug!(card = %card_id, player = %player_id, "card flipped");
        self.emit(CardFlipped { card_id, player_id }.into());

        if self.pending.len() < 2 {
            return FlipOutcome::Flipped;
        }
        self.check_match()
    }

    fn check_flip(&self, card_id: CardId) -> Option<IgnoreReason> {
        if self.state.is_game_over() {
            return Some(IgnoreReason::GameOver);
        }
        let Some(card) = self.state.card(card_id) else {
            return Some(IgnoreReason::UnknownCard);
        };
        if card.is_matched() {
            return Some(IgnoreReason::AlreadyMatched);
        }
        if card.is_flipped() {
            return Some(IgnoreReason::AlreadyFlipped);
        }
        if self.pending.len() >= 2 {
            return Some(IgnoreReason::SelectionFull);
        }
        None
    }

    /// Compare the two pending cards. Clears the selection either way.
    fn check_match(&mut self) -> FlipOutcome {
        let card_ids = [self.pending[0], self.pending[1]];
        self.pending.clear();

        let (Some(first), Some(second)) =
            (self.state.card(card_ids[0]), self.state.card(card_ids[1]))
        else {
            tracing::error!(first = %card_ids[0], second = %card_ids[1], "selected card missing from board");
            return FlipOutcome::Flipped;
        };

        if !first.pairs_with(second) {
            let due = self.now() + self.config.mismatch_delay;
            let task = self.resolutions.schedule(due, MismatchResolution { card_ids });
            tracing::debug!(first = %card_ids[0], second = %card_ids[1], %task, "no match, resolution scheduled");
            return FlipOutcome::Mismatched;
        }

        for id in card_ids {
            if let Some(card) = self.state.card_mut(id) {
                card.mark_matched();
            }
        }
        let player_id = self.state.current_player();
        let score = self.state.award_current_player();
        tracing::info!(player = %player_id, score, "match found");
        self.emit(MatchFound { card_ids, player_id, score }.into());

        let game_over = self.state.all_matched();
        if game_over {
            self.state.finish();
            tracing::info!(matched_pairs = self.state.matched_pairs(), "game over");
            let snapshot = Box::new(self.state.clone());
            self.emit(GameEvent::GameOver(snapshot));
        }
        FlipOutcome::Matched { game_over }
    }

    /// Turn back every mismatched pair whose delay has elapsed.
    ///
    /// Each resolution emits `NoMatch` and then passes the turn. Returns
    /// how many pairs were turned back.
    pub fn resolve_due(&mut self) -> usize {
        let now = self.now();
        let mut resolved = 0;
        while let Some(task) = self.resolutions.pop_due(now) {
            self.resolve_mismatch(task.payload);
            resolved += 1;
        }
        resolved
    }

    fn resolve_mismatch(&mut self, resolution: MismatchResolution) {
        let card_ids = resolution.card_ids;
        for id in card_ids {
            if let Some(card) = self.state.card_mut(id) {
                card.unflip();
            }
        }
        self.emit(NoMatch { card_ids }.into());
        self.switch_player();
    }

    fn switch_player(&mut self) {
        let (previous_player, next_player) = self.state.advance_turn();
        tracing::info!(from = %previous_player, to = %next_player, "turn passed");
        self.emit(
            PlayerSwitch {
                previous_player,
                next_player,
            }
            .into(),
        );
    }

    /// Deal a fresh board with the same configuration.
    ///
    /// A configured seed deals the same board again; otherwise a new seed is
    /// drawn. Scores and turn order start over, listeners are kept, and every
    /// pending mismatch resolution is cancelled so it cannot fire into the
    /// new game.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        let (state, seed) = Self::deal(&self.config)?;
        let cancelled = self.resolutions.cancel_all();
        self.pending.clear();
        self.state = state;
        self.seed = seed;
        tracing::debug!(cancelled, seed, "game reset");
        Ok(())
    }

    fn emit(&mut self, event: GameEvent) {
        if event.kind() != EventKind::GameOver {
            self.state.record(&event);
        }
        self.bus.emit(&event, &self.state);
    }
}

impl std::fmt::Debug for MemoryGame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryGame")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("resolutions", &self.resolutions.len())
            .field("seed", &self.seed)
            .field("bus", &self.bus)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Theme;
    use crate::core::PlayerId;
    use crate::schedule::ManualClock;
    use std::time::Duration;

    fn game(pairs: usize, players: usize) -> (MemoryGame, ManualClock) {
        let clock = ManualClock::new();
        let config = GameConfig::new(pairs, players, Theme::Numbers).with_seed(42);
        let game = MemoryGame::with_clock(config, clock.clone()).unwrap();
        (game, clock)
    }

    /// Card ids grouped by value: `pairs[v]` holds the two ids showing `v + 1`.
    fn pairs(game: &MemoryGame) -> Vec<[CardId; 2]> {
        let n = game.config().pair_count;
        (1..=n)
            .map(|v| {
                let value = v.to_string();
                let ids: Vec<_> = game
                    .state_ref()
                    .cards()
                    .iter()
                    .filter(|c| c.value() == value)
                    .map(|c| c.id())
                    .collect();
                [ids[0], ids[1]]
            })
            .collect()
    }

    #[test]
    fn test_first_flip() {
        let (mut game, _) = game(2, 1);
        let [a, _] = pairs(&game)[0];

        assert_eq!(game.flip_card(a), FlipOutcome::Flipped);
        assert!(game.state_ref().card(a).unwrap().is_flipped());
        assert_eq!(game.pending_selection(), &[a]);
    }

    #[test]
    fn test_ignored_flips() {
        let (mut game, _) = game(3, 1);
        let p = pairs(&game);

        assert_eq!(
            game.flip_card(CardId::new(99)),
            FlipOutcome::Ignored(IgnoreReason::UnknownCard)
        );

        game.flip_card(p[0][0]);
        assert_eq!(
            game.flip_card(p[0][0]),
            FlipOutcome::Ignored(IgnoreReason::AlreadyFlipped)
        );

        game.flip_card(p[0][1]);
        assert_eq!(
            game.flip_card(p[0][1]),
            FlipOutcome::Ignored(IgnoreReason::AlreadyMatched)
        );
    }

    #[test]
    fn test_match_keeps_turn() {
        let (mut game, _) = game(2, 2);
        let [a, b] = pairs(&game)[0];

        game.flip_card(a);
        assert_eq!(game.flip_card(b), FlipOutcome::Matched { game_over: false });

        assert!(game.pending_selection().is_empty());
        assert_eq!(game.state_ref().current_player(), PlayerId::new(0));
        assert_eq!(game.state_ref().players()[PlayerId::new(0)].score(), 1);
        assert_eq!(game.pending_resolutions(), 0);
    }

    #[test]
    fn test_mismatch_is_deferred() {
        let (mut game, clock) = game(2, 2);
        let p = pairs(&game);

        game.flip_card(p[0][0]);
        assert_eq!(game.flip_card(p[1][0]), FlipOutcome::Mismatched);

        // Selection clears at once, the cards stay up until the delay passes.
        assert!(game.pending_selection().is_empty());
        assert_eq!(game.pending_resolutions(), 1);
        assert!(game.state_ref().card(p[0][0]).unwrap().is_flipped());
        assert_eq!(game.resolve_due(), 0);

        clock.advance(Duration::from_millis(999));
        assert_eq!(game.resolve_due(), 0);
        assert_eq!(game.state_ref().current_player(), PlayerId::new(0));

        clock.advance(Duration::from_millis(1));
        assert_eq!(game.resolve_due(), 1);
        assert!(!game.state_ref().card(p[0][0]).unwrap().is_flipped());
        assert!(!game.state_ref().card(p[1][0]).unwrap().is_flipped());
        assert_eq!(game.state_ref().current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_next_deadline_uses_configured_delay() {
        let clock = ManualClock::new();
        let config = GameConfig::new(2, 1, Theme::Numbers)
            .with_seed(1)
            .with_mismatch_delay(Duration::from_millis(250));
        let mut game = MemoryGame::with_clock(config, clock.clone()).unwrap();
        let p = pairs(&game);

        assert_eq!(game.next_deadline(), None);
        game.flip_card(p[0][0]);
        game.flip_card(p[1][0]);
        assert_eq!(
            game.next_deadline(),
            Some(clock.now() + Duration::from_millis(250))
        );
    }

    #[test]
    fn test_reset_cancels_resolutions() {
        let (mut game, clock) = game(2, 2);
        let p = pairs(&game);

        game.flip_card(p[0][0]);
        game.flip_card(p[1][0]);
        game.reset().unwrap();

        assert_eq!(game.pending_resolutions(), 0);
        clock.advance(Duration::from_secs(5));
        assert_eq!(game.resolve_due(), 0);
        assert_eq!(game.state_ref().current_player(), PlayerId::new(0));
        assert!(game.state_ref().cards().iter().all(|c| c.is_selectable()));
    }

    #[test]
    fn test_reset_with_seed_deals_same_board() {
        let (mut game, _) = game(4, 2);
        let before = game.state();
        let [a, b] = pairs(&game)[0];
        game.flip_card(a);
        game.flip_card(b);

        game.reset().unwrap();
        assert_eq!(game.state(), before);
    }

    #[test]
    fn test_last_action_is_recorded() {
        let (mut game, _) = game(2, 1);
        let [a, _] = pairs(&game)[0];

        game.flip_card(a);
        let record = game.state_ref().last_action().unwrap();
        assert_eq!(record.kind, EventKind::CardFlipped);
    }

    #[test]
    fn test_flip_runs_overdue_resolution_first() {
        let (mut game, clock) = game(3, 2);
        let p = pairs(&game);

        game.flip_card(p[0][0]);
        game.flip_card(p[1][0]);
        clock.advance(Duration::from_millis(1500));

        assert_eq!(game.flip_card(p[0][0]), FlipOutcome::Flipped);
        assert_eq!(game.pending_resolutions(), 0);
        assert_eq!(game.state_ref().current_player(), PlayerId::new(1));
        assert!(!game.state_ref().card(p[1][0]).unwrap().is_flipped());
    }

    #[test]
    fn test_seed_replays_entropy_deal() {
        let game = MemoryGame::new(GameConfig::new(6, 2, Theme::Emojis)).unwrap();
        let replay = MemoryGame::new(game.config().with_seed(game.seed())).unwrap();

        assert_eq!(replay.seed(), game.seed());
        assert_eq!(replay.state_ref().cards(), game.state_ref().cards());
    }

    #[test]
    fn test_configured_seed_is_reported() {
        let (mut game, _) = game(2, 1);
        assert_eq!(game.seed(), 42);

        game.reset().unwrap();
        assert_eq!(game.seed(), 42);
    }

    #[test]
    fn test_missing_selected_card_schedules_nothing() {
        let (mut game, _) = game(2, 2);
        let [a, _] = pairs(&game)[0];

        game.pending.push(CardId::new(99));
        assert_eq!(game.flip_card(a), FlipOutcome::Flipped);

        assert!(game.pending_selection().is_empty());
        assert_eq!(game.pending_resolutions(), 0);
        assert_eq!(game.state_ref().current_player(), PlayerId::new(0));
        assert_eq!(game.state_ref().total_score(), 0);
    }
}
