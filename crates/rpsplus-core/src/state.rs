use crate::model::{RoundRecord, Score, Winner};

/// Mutable record of one game. Owned by a single [`Engine`](crate::engine::Engine).
#[derive(Debug, Clone, Default)]
pub struct GameState {
    round_num: u32,
    bomb_used: bool,
    user_score: u32,
    bot_score: u32,
    rounds_history: Vec<RoundRecord>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_round(&mut self) {
        self.round_num += 1;
    }

    /// Marks the bomb as spent. Never reset within a game.
    pub fn use_bomb(&mut self) {
        self.bomb_used = true;
    }

    pub fn update_score(&mut self, winner: Winner) {
        match winner {
            Winner::User => self.user_score += 1,
            Winner::Bot => self.bot_score += 1,
            Winner::Draw => {}
        }
    }

    pub fn record_round(&mut self, record: RoundRecord) {
        self.rounds_history.push(record);
    }

    pub fn round_num(&self) -> u32 {
        self.round_num
    }

    pub fn bomb_used(&self) -> bool {
        self.bomb_used
    }

    pub fn score(&self) -> Score {
        Score {
            user: self.user_score,
            bot: self.bot_score,
        }
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.rounds_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let s = GameState::new();
        assert_eq!(s.round_num(), 0);
        assert!(!s.bomb_used());
        assert_eq!(s.score(), Score::default());
        assert!(s.history().is_empty());
    }

    #[test]
    fn use_bomb_is_idempotent() {
        let mut s = GameState::new();
        s.use_bomb();
        s.use_bomb();
        assert!(s.bomb_used());
    }

    #[test]
    fn draw_leaves_scores_unchanged() {
        let mut s = GameState::new();
        s.update_score(Winner::Draw);
        assert_eq!(s.score(), Score::default());
        s.update_score(Winner::User);
        s.update_score(Winner::Bot);
        s.update_score(Winner::Bot);
        assert_eq!(s.score(), Score { user: 1, bot: 2 });
    }
}
