//! Deterministic game rules.
//!
//! Win table: rock beats scissors, scissors beats paper, paper beats rock,
//! bomb beats every basic move, bomb vs bomb is a draw. The bomb is usable once
//! per game, by the user only.
//!
//! [`adjudicate`] turns an extracted intent into a full [`Judgment`]; it backs
//! [`JudgeMode::Intent`](crate::judge::JudgeMode::Intent).

use crate::model::{Judgment, Move, Validity, Winner};

impl Move {
    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Scissors, Move::Paper)
                | (Move::Paper, Move::Rock)
                | (Move::Bomb, Move::Rock)
                | (Move::Bomb, Move::Paper)
                | (Move::Bomb, Move::Scissors)
        )
    }
}

/// Outcome of a move pair, from the user's point of view.
pub fn resolve(user: Move, bot: Move) -> Winner {
    if user.beats(&bot) {
        Winner::User
    } else if bot.beats(&user) {
        Winner::Bot
    } else {
        Winner::Draw
    }
}

/// What the user meant, as extracted from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Clear(Move),
    Ambiguous,
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedIntent {
    pub intent: MoveIntent,
    pub reasoning: Option<String>,
}

/// Decides a round from the extracted intent and the current bomb flag.
///
/// Invalid and unclear moves waste the turn: the bot wins the round.
/// A second bomb is invalid and never reports bomb use.
pub fn adjudicate(extracted: &ExtractedIntent, bot_move: Move, bomb_used: bool) -> Judgment {
    let wasted = |validity: Validity, why: &str| Judgment {
        move_validity: validity,
        user_move: None,
        reasoning: extracted.reasoning.clone(),
        round_winner: Winner::Bot,
        round_explanation: Some(format!(
            "{} - turn wasted, bot wins with {}.",
            why, bot_move
        )),
        bomb_used_this_round: false,
    };

    match extracted.intent {
        MoveIntent::Unrecognized => wasted(Validity::Invalid, "Not a valid move"),
        MoveIntent::Ambiguous => wasted(Validity::Unclear, "Move was unclear"),
        MoveIntent::Clear(Move::Bomb) if bomb_used => wasted(
            Validity::Invalid,
            "The bomb was already used this game",
        ),
        MoveIntent::Clear(user_move) => {
            let winner = resolve(user_move, bot_move);
            let explanation = match winner {
                Winner::User => format!("{} beats {} - you win this round!", user_move, bot_move),
                Winner::Bot => format!("{} beats {} - bot wins this round.", bot_move, user_move),
                Winner::Draw => format!("Both played {} - this round is a draw.", user_move),
            };
            Judgment {
                move_validity: Validity::Valid,
                user_move: Some(user_move),
                reasoning: extracted.reasoning.clone(),
                round_winner: winner,
                round_explanation: Some(explanation),
                bomb_used_this_round: user_move == Move::Bomb,
            }
        }
    }
}
