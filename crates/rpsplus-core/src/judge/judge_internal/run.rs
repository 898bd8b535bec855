use crate::errors::JudgeError;
use crate::judge::{JudgeMode, JudgeService};
use crate::model::{Judgment, Move};
use crate::rules;
use crate::state::GameState;
use tracing::warn;

pub(crate) async fn judge_impl(
    svc: &JudgeService,
    user_input: &str,
    bot_move: Move,
    state: &GameState,
) -> Result<Judgment, JudgeError> {
    match svc.mode {
        JudgeMode::Referee => {
            let prompt = super::prompt::build_referee_prompt_impl(
                state.round_num(),
                state.bomb_used(),
                user_input,
                bot_move,
            );
            let reply = super::client::call_judge_impl(
                svc,
                &prompt,
                super::prompt::REFEREE_SYSTEM_PROMPT,
            )
            .await?;
            let judgment = super::validate::validate_judgment_impl(&reply);

            // Reported only; the referee owns bomb bookkeeping in this mode.
            if state.bomb_used() && judgment.bomb_used_this_round {
                warn!(
                    round = state.round_num(),
                    "judge reported a fresh bomb although the bomb was already used"
                );
            }
            Ok(judgment)
        }
        JudgeMode::Intent => {
            let prompt = super::prompt::build_intent_prompt_impl(user_input);
            let reply =
                super::client::call_judge_impl(svc, &prompt, super::prompt::INTENT_SYSTEM_PROMPT)
                    .await?;
            let extracted = super::validate::validate_intent_impl(&reply);
            Ok(rules::adjudicate(&extracted, bot_move, state.bomb_used()))
        }
    }
}
