mod judge_internal;

use crate::errors::JudgeError;
use crate::model::{Judgment, Move};
use crate::providers::llm::LlmClient;
use crate::state::GameState;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Who decides validity and the round winner.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JudgeMode {
    /// The model applies the rules and decides the round.
    #[default]
    Referee,
    /// The model only extracts the intended move; [`crate::rules`] decides.
    Intent,
}

/// Turns free-text moves into judgments via one completion call per round.
#[derive(Clone)]
pub struct JudgeService {
    client: Arc<dyn LlmClient>,
    mode: JudgeMode,
}

impl JudgeService {
    pub fn new(client: Arc<dyn LlmClient>, mode: JudgeMode) -> Self {
        Self { client, mode }
    }

    pub fn mode(&self) -> JudgeMode {
        self.mode
    }

    /// Judges one round. Never fails: any service error, empty reply or
    /// malformed reply yields [`Judgment::fallback`].
    pub async fn judge_move(&self, user_input: &str, bot_move: Move, state: &GameState) -> Judgment {
        match self.try_judge(user_input, bot_move, state).await {
            Ok(judgment) => judgment,
            Err(e) => {
                warn!(
                    round = state.round_num(),
                    kind = e.kind(),
                    error = %e,
                    "judge call failed; bot wins by default"
                );
                Judgment::fallback(&e)
            }
        }
    }

    /// Like [`judge_move`](Self::judge_move) but surfaces the failure.
    pub async fn try_judge(
        &self,
        user_input: &str,
        bot_move: Move,
        state: &GameState,
    ) -> Result<Judgment, JudgeError> {
        judge_internal::run::judge_impl(self, user_input, bot_move, state).await
    }
}
