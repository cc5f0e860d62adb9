//! Final standings of a finished game.

use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerId, PlayerMap};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// One player has the highest score.
    Winner(PlayerId),
    /// Several players share the highest score, in seat order.
    Tie(Vec<PlayerId>),
}

impl GameResult {
    /// Rank players by score.
    #[must_use]
    pub fn from_players(players: &PlayerMap<Player>) -> Self {
        let best = players.values().map(Player::score).max().unwrap_or(0);
        let mut leaders: Vec<_> = players
            .iter()
            .filter(|(_, p)| p.score() == best)
            .map(|(id, _)| id)
            .collect();

        if leaders.len() == 1 {
            GameResult::Winner(leaders.remove(0))
        } else {
            GameResult::Tie(leaders)
        }
    }

    /// Every player holding the top score.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            GameResult::Winner(p) => std::slice::from_ref(p),
            GameResult::Tie(ps) => ps,
        }
    }

    /// Check if a player won or shared the win.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }

    /// End-of-game message for display.
    ///
    /// ```
    /// use memory_match::core::{Player, PlayerId, PlayerMap};
    /// use memory_match::rules::GameResult;
    ///
    /// let players = PlayerMap::new(2, Player::new);
    /// let result = GameResult::from_players(&players);
    /// assert_eq!(result.describe(&players), "It's a tie between Player 1 and Player 2!");
    /// ```
    #[must_use]
    pub fn describe(&self, players: &PlayerMap<Player>) -> String {
        match self {
            GameResult::Winner(id) => match players.get(*id) {
                Some(p) => format!("{} wins with {} points!", p.name(), p.score()),
                None => format!("{id} wins!"),
            },
            GameResult::Tie(ids) => {
                let names: Vec<_> = ids
                    .iter()
                    .filter_map(|&id| players.get(id))
                    .map(Player::name)
                    .collect();
                format!("It's a tie between {}!", names.join(" and "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players_with_scores(scores: &[u32]) -> PlayerMap<Player> {
        let mut players = PlayerMap::new(scores.len(), Player::new);
        for (i, &score) in scores.iter().enumerate() {
            for _ in 0..score {
                players[PlayerId::new(i as u8)].award_pair();
            }
        }
        players
    }

    #[test]
    fn test_single_winner() {
        let players = players_with_scores(&[1, 3, 2]);
        let result = GameResult::from_players(&players);

        assert_eq!(result, GameResult::Winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert_eq!(result.describe(&players), "Player 2 wins with 3 points!");
    }

    #[test]
    fn test_tie() {
        let players = players_with_scores(&[2, 1, 2]);
        let result = GameResult::from_players(&players);

        assert_eq!(result, GameResult::Tie(vec![PlayerId::new(0), PlayerId::new(2)]));
        assert_eq!(result.winners().len(), 2);
        assert_eq!(result.describe(&players), "It's a tie between Player 1 and Player 3!");
    }

    #[test]
    fn test_solo_game_always_wins() {
        let players = players_with_scores(&[4]);
        let result = GameResult::from_players(&players);
        assert_eq!(result, GameResult::Winner(PlayerId::new(0)));
        assert_eq!(result.describe(&players), "Player 1 wins with 4 points!");
    }
}
