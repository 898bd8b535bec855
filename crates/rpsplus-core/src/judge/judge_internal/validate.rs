use super::client::json_kind;
use crate::model::{Judgment, Move, Validity, Winner};
use crate::rules::{ExtractedIntent, MoveIntent};
use serde_json::{Map, Value};
use tracing::warn;

/// Normalises a decoded referee reply. Total: any object yields a judgment.
///
/// Unknown or missing validity becomes INVALID and unknown or missing winner
/// becomes bot, so a non-conforming reply never counts as a user win.
pub(crate) fn validate_judgment_impl(obj: &Map<String, Value>) -> Judgment {
    let move_validity = obj
        .get("move_validity")
        .and_then(Value::as_str)
        .and_then(Validity::from_wire)
        .unwrap_or_else(|| {
            warn!(
                raw = ?obj.get("move_validity"),
                "judge returned unrecognised move_validity; forcing INVALID"
            );
            Validity::Invalid
        });

    let round_winner = obj
        .get("round_winner")
        .and_then(Value::as_str)
        .and_then(Winner::from_wire)
        .unwrap_or_else(|| {
            warn!(
                raw = ?obj.get("round_winner"),
                "judge returned unrecognised round_winner; forcing bot"
            );
            Winner::Bot
        });

    Judgment {
        move_validity,
        user_move: move_field(obj),
        reasoning: text_field(obj, "reasoning"),
        round_winner,
        round_explanation: text_field(obj, "round_explanation"),
        bomb_used_this_round: bool_field(obj, "bomb_used_this_round"),
    }
}

/// Normalises a decoded intent-extraction reply.
///
/// CLEAR without a recognised move is treated as UNRECOGNIZED.
pub(crate) fn validate_intent_impl(obj: &Map<String, Value>) -> ExtractedIntent {
    let reasoning = text_field(obj, "reasoning");
    let intent = match obj.get("intent").and_then(Value::as_str) {
        Some("CLEAR") => match move_field(obj) {
            Some(m) => MoveIntent::Clear(m),
            None => MoveIntent::Unrecognized,
        },
        Some("AMBIGUOUS") => MoveIntent::Ambiguous,
        Some("UNRECOGNIZED") => MoveIntent::Unrecognized,
        other => {
            warn!(raw = ?other, "intent reply has unrecognised intent; treating as UNRECOGNIZED");
            MoveIntent::Unrecognized
        }
    };
    ExtractedIntent { intent, reasoning }
}

fn move_field(obj: &Map<String, Value>) -> Option<Move> {
    match obj.get("user_move") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => match s.parse::<Move>() {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(error = %e, "judge returned unknown user_move; dropping it");
                None
            }
        },
        Some(other) => {
            warn!(kind = json_kind(other), "judge returned non-string user_move; dropping it");
            None
        }
    }
}

fn text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn bool_field(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        None | Some(Value::Null) => false,
        Some(other) => {
            warn!(field = key, kind = json_kind(other), "judge returned non-boolean flag; treating as false");
            false
        }
    }
}
