//! Round orchestration.
//!
//! One [`Engine`] owns one game: its [`GameState`], its judge and its bot.
//! Independent engines never share state.

use crate::config::GameConfig;
use crate::errors::ConfigResult;
use crate::judge::JudgeService;
use crate::model::{FinalResult, Move, RoundRecord, RoundResult, Verdict};
use crate::providers::llm;
use crate::state::GameState;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use tracing::info;

/// Chooses the bot's move. Implementations must never return [`Move::Bomb`].
pub trait BotPolicy: Send {
    fn choose(&mut self) -> Move;
}

/// Uniform choice over rock, paper and scissors.
#[derive(Clone, Debug)]
pub struct RandomBot {
    rng: ChaCha8Rng,
}

impl RandomBot {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl BotPolicy for RandomBot {
    fn choose(&mut self) -> Move {
        *Move::BASIC
            .choose(&mut self.rng)
            .unwrap_or(&Move::Rock)
    }
}

/// Plays a fixed sequence of moves, cycling when it runs out.
#[derive(Clone, Debug)]
pub struct FixedBot {
    moves: VecDeque<Move>,
}

impl FixedBot {
    pub fn repeat(m: Move) -> Self {
        Self::sequence([m])
    }

    /// Bomb entries are dropped; an empty sequence plays rock.
    pub fn sequence(moves: impl IntoIterator<Item = Move>) -> Self {
        let mut moves: VecDeque<Move> = moves.into_iter().filter(|m| *m != Move::Bomb).collect();
        if moves.is_empty() {
            moves.push_back(Move::Rock);
        }
        Self { moves }
    }
}

impl BotPolicy for FixedBot {
    fn choose(&mut self) -> Move {
        let m = self.moves.pop_front().unwrap_or(Move::Rock);
        self.moves.push_back(m);
        m
    }
}

pub struct Engine {
    judge: JudgeService,
    state: GameState,
    bot: Box<dyn BotPolicy>,
}

impl Engine {
    pub fn with_bot(judge: JudgeService, bot: Box<dyn BotPolicy>) -> Self {
        Self {
            judge,
            state: GameState::new(),
            bot,
        }
    }

    /// Builds the configured provider, judge and bot.
    pub fn from_config(cfg: &GameConfig) -> ConfigResult<Self> {
        let client = llm::from_config(cfg)?;
        let judge = JudgeService::new(client, cfg.judge_mode);
        Ok(Self::with_bot(judge, Box::new(RandomBot::new(cfg.seed))))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays one round. Always produces a result; judging failures resolve
    /// to the fallback judgment.
    pub async fn play_round(&mut self, user_input: &str) -> RoundResult {
        self.state.increment_round();
        let bot_move = self.bot.choose();

        let judgment = self
            .judge
            .judge_move(user_input, bot_move, &self.state)
            .await;

        if judgment.bomb_used_this_round {
            self.state.use_bomb();
        }
        self.state.update_score(judgment.round_winner);

        let round = self.state.round_num();
        self.state.record_round(RoundRecord {
            round,
            user_input: user_input.to_string(),
            user_move: judgment.user_move,
            bot_move,
            validity: judgment.move_validity,
            winner: judgment.round_winner,
            reasoning: judgment.reasoning.clone(),
        });

        info!(
            round,
            validity = %judgment.move_validity,
            winner = %judgment.round_winner,
            bot_move = %bot_move,
            bomb_used = self.state.bomb_used(),
            "round judged"
        );

        RoundResult {
            round_number: round,
            user_input: user_input.to_string(),
            user_move: judgment.user_move,
            bot_move,
            validity: judgment.move_validity,
            winner: judgment.round_winner,
            reasoning: judgment.reasoning,
            explanation: judgment.round_explanation,
            current_score: self.state.score(),
        }
    }

    pub fn get_final_result(&self) -> FinalResult {
        let score = self.state.score();
        FinalResult {
            result: Verdict::from_score(score),
            final_score: score,
            rounds_played: self.state.round_num(),
            history: self.state.history().to_vec(),
        }
    }
}
