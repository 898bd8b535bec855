//! Human-readable rendering of game output.

use rpsplus_core::{FinalResult, RoundResult};
use std::fmt::Write;

const RULE: &str = "============================================================";

pub fn banner() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "ROCK-PAPER-SCISSORS PLUS - AI Judge Edition");
    let _ = writeln!(out, "{RULE}");
    out.push_str(&rules_text());
    let _ = writeln!(out, "{RULE}");
    out
}

pub fn rules_text() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nRules:");
    let _ = writeln!(out, "- Valid moves: rock, paper, scissors, bomb");
    let _ = writeln!(out, "- bomb beats everything but can only be used ONCE");
    let _ = writeln!(out, "- Invalid/unclear moves waste your turn");
    let _ = writeln!(out, "- Describe your move in your own words\n");
    out
}

pub fn round(r: &RoundResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "ROUND {}", r.round_number);
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Your input: '{}'", r.user_input);
    let _ = writeln!(out, "Move validity: {}", r.validity);
    if let Some(m) = r.user_move {
        let _ = writeln!(out, "Your move: {}", m);
    }
    let _ = writeln!(out, "Bot's move: {}", r.bot_move);
    let _ = writeln!(out, "\nReasoning: {}", r.reasoning.as_deref().unwrap_or("-"));
    let _ = writeln!(
        out,
        "Explanation: {}",
        r.explanation.as_deref().unwrap_or("-")
    );
    let _ = writeln!(out, "\nRound winner: {}", r.winner.as_str().to_uppercase());
    let _ = writeln!(
        out,
        "Score - You: {} | Bot: {}",
        r.current_score.user, r.current_score.bot
    );
    let _ = writeln!(out, "{RULE}");
    out
}

pub fn final_result(f: &FinalResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "GAME OVER");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "\n{}", f.result);
    let _ = writeln!(
        out,
        "Final Score - You: {} | Bot: {}",
        f.final_score.user, f.final_score.bot
    );
    let _ = writeln!(out, "Rounds played: {}\n", f.rounds_played);
    let _ = writeln!(out, "{RULE}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpsplus_core::model::{Score, Verdict};
    use rpsplus_core::{Move, Validity, Winner};

    fn sample_round(user_move: Option<Move>) -> RoundResult {
        RoundResult {
            round_number: 2,
            user_input: "paper!".into(),
            user_move,
            bot_move: Move::Rock,
            validity: Validity::Valid,
            winner: Winner::User,
            reasoning: Some("clear paper".into()),
            explanation: None,
            current_score: Score { user: 1, bot: 1 },
        }
    }

    #[test]
    fn round_shows_move_only_when_resolved() {
        let text = round(&sample_round(Some(Move::Paper)));
        assert!(text.contains("ROUND 2"));
        assert!(text.contains("Your move: paper"));
        assert!(text.contains("Bot's move: rock"));
        assert!(text.contains("Round winner: USER"));
        assert!(text.contains("Explanation: -"));
        assert!(text.contains("Score - You: 1 | Bot: 1"));

        let text = round(&sample_round(None));
        assert!(!text.contains("Your move:"));
    }

    #[test]
    fn final_shows_verdict_and_rounds() {
        let f = FinalResult {
            result: Verdict::BotWins,
            final_score: Score { user: 1, bot: 3 },
            rounds_played: 4,
            history: Vec::new(),
        };
        let text = final_result(&f);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("Bot wins!"));
        assert!(text.contains("Final Score - You: 1 | Bot: 3"));
        assert!(text.contains("Rounds played: 4"));
    }
}
