//! Engine-level behaviour with a scripted referee and a fixed bot.

use rpsplus_core::engine::{Engine, FixedBot};
use rpsplus_core::providers::llm::fake::ScriptedClient;
use rpsplus_core::{JudgeMode, JudgeService, Move, Validity, Winner};
use serde_json::json;
use std::sync::Arc;

fn reply(validity: &str, user_move: Option<&str>, winner: &str, bomb: bool) -> String {
    json!({
        "move_validity": validity,
        "user_move": user_move,
        "reasoning": format!("judged as {}", validity),
        "round_winner": winner,
        "round_explanation": format!("{} takes the round", winner),
        "bomb_used_this_round": bomb
    })
    .to_string()
}

fn engine(client: Arc<ScriptedClient>, bot: FixedBot) -> Engine {
    let judge = JudgeService::new(client, JudgeMode::Referee);
    Engine::with_bot(judge, Box::new(bot))
}

#[tokio::test]
async fn bot_win_scores_for_bot_only() {
    let client = Arc::new(ScriptedClient::new([reply(
        "VALID",
        Some("scissors"),
        "bot",
        false,
    )]));
    let mut game = engine(client, FixedBot::repeat(Move::Rock));

    let round = game.play_round("scissors").await;
    assert_eq!(round.round_number, 1);
    assert_eq!(round.bot_move, Move::Rock);
    assert_eq!(round.user_move, Some(Move::Scissors));
    assert_eq!(round.validity, Validity::Valid);
    assert_eq!(round.winner, Winner::Bot);
    assert_eq!(round.current_score.bot, 1);
    assert_eq!(round.current_score.user, 0);
    assert!(!game.state().bomb_used());
}

#[tokio::test]
async fn reported_bomb_is_consumed_regardless_of_winner() {
    let client = Arc::new(ScriptedClient::new([
        reply("VALID", Some("bomb"), "draw", true),
        reply("VALID", Some("rock"), "user", false),
    ]));
    let mut game = engine(client, FixedBot::repeat(Move::Scissors));

    game.play_round("bomb").await;
    assert!(game.state().bomb_used());
    assert_eq!(game.state().score().user, 0);
    assert_eq!(game.state().score().bot, 0);

    game.play_round("rock").await;
    assert!(game.state().bomb_used(), "bomb flag must never reset");
}

#[tokio::test]
async fn split_rounds_end_in_a_draw_with_ordered_history() {
    let client = Arc::new(ScriptedClient::new([
        reply("VALID", Some("rock"), "bot", false),
        reply("VALID", Some("rock"), "user", false),
    ]));
    let mut game = engine(client, FixedBot::sequence([Move::Paper, Move::Scissors]));

    game.play_round("rock").await;
    game.play_round("rock again").await;

    let result = game.get_final_result();
    assert_eq!(result.result.to_string(), "Draw!");
    assert_eq!(result.rounds_played, 2);
    assert_eq!(result.history.len(), 2);
    assert_eq!(result.history[0].round, 1);
    assert_eq!(result.history[0].user_input, "rock");
    assert_eq!(result.history[0].bot_move, Move::Paper);
    assert_eq!(result.history[0].winner, Winner::Bot);
    assert_eq!(result.history[1].round, 2);
    assert_eq!(result.history[1].user_input, "rock again");
    assert_eq!(result.history[1].bot_move, Move::Scissors);
    assert_eq!(result.history[1].winner, Winner::User);

    let v = serde_json::to_value(&result).unwrap();
    assert_eq!(v["result"], "Draw!");
    assert_eq!(v["final_score"], json!({ "user": 1, "bot": 1 }));
}

#[tokio::test]
async fn missing_reasoning_is_a_null_placeholder() {
    let client = Arc::new(ScriptedClient::new([r#"{
        "move_validity": "VALID",
        "user_move": "paper",
        "round_winner": "user",
        "round_explanation": "paper covers rock",
        "bomb_used_this_round": false
    }"#]));
    let mut game = engine(client, FixedBot::repeat(Move::Rock));

    let round = game.play_round("paper").await;
    assert_eq!(round.reasoning, None);
    assert_eq!(round.explanation.as_deref(), Some("paper covers rock"));
    assert_eq!(game.state().history()[0].reasoning, None);
}

#[tokio::test]
async fn service_failure_still_produces_a_round() {
    let client = Arc::new(ScriptedClient::default());
    client.push_failure("network unreachable");
    let mut game = engine(client, FixedBot::repeat(Move::Paper));

    let round = game.play_round("rock").await;
    assert_eq!(round.winner, Winner::Bot);
    assert_eq!(round.validity, Validity::Invalid);
    assert_eq!(round.user_move, None);
    assert_eq!(round.current_score.bot, 1);
    assert_eq!(game.state().history().len(), 1);
}

#[tokio::test]
async fn malformed_and_off_schema_replies_never_favour_the_user() {
    let client = Arc::new(ScriptedClient::new([
        "```json\n{ this is not json }\n```".to_string(),
        r#"{"move_validity": "DEFINITELY", "round_winner": "everyone"}"#.to_string(),
        "[1, 2, 3]".to_string(),
    ]));
    let mut game = engine(client, FixedBot::repeat(Move::Rock));

    for input in ["rock", "paper", "scissors"] {
        let round = game.play_round(input).await;
        assert_eq!(round.winner, Winner::Bot);
        assert_eq!(round.validity, Validity::Invalid);
    }
    assert_eq!(game.get_final_result().result.to_string(), "Bot wins!");
}

#[tokio::test]
async fn state_invariants_hold_over_a_mixed_game() {
    let client = Arc::new(ScriptedClient::new([
        reply("VALID", Some("paper"), "user", false),
        reply("UNCLEAR", None, "bot", false),
        reply("VALID", Some("bomb"), "user", true),
        reply("INVALID", None, "bot", false),
        reply("VALID", Some("rock"), "draw", false),
    ]));
    client.push_failure("timeout");
    let mut game = engine(client, FixedBot::repeat(Move::Rock));

    let mut prev_round = 0;
    let mut prev_score = game.state().score();
    let mut bomb_seen = false;
    for (i, input) in ["paper", "rock or paper", "BOMB", "bomb", "rock", "rock"]
        .iter()
        .enumerate()
    {
        let round = game.play_round(input).await;
        assert_eq!(round.round_number, prev_round + 1);
        prev_round = round.round_number;

        let score = round.current_score;
        let user_delta = score.user - prev_score.user;
        let bot_delta = score.bot - prev_score.bot;
        assert!(user_delta + bot_delta <= 1, "at most one point per round");
        prev_score = score;

        if bomb_seen {
            assert!(game.state().bomb_used());
        }
        bomb_seen |= game.state().bomb_used();

        assert_eq!(game.state().history().len(), i + 1);
    }

    let result = game.get_final_result();
    assert_eq!(result.rounds_played, 6);
    assert_eq!(result.final_score.user, 2);
    assert_eq!(result.final_score.bot, 3);
    assert_eq!(result.result.to_string(), "Bot wins!");
    assert!(bomb_seen);
}

#[tokio::test]
async fn independent_games_do_not_interfere() {
    let a_client = Arc::new(ScriptedClient::new([reply("VALID", Some("paper"), "user", true)]));
    let b_client = Arc::new(ScriptedClient::new([reply("VALID", Some("rock"), "bot", false)]));
    let mut a = engine(a_client, FixedBot::repeat(Move::Rock));
    let mut b = engine(b_client, FixedBot::repeat(Move::Paper));

    let (ra, rb) = tokio::join!(a.play_round("paper"), b.play_round("rock"));
    assert_eq!(ra.winner, Winner::User);
    assert_eq!(rb.winner, Winner::Bot);
    assert!(a.state().bomb_used());
    assert!(!b.state().bomb_used());
}

#[tokio::test]
async fn intent_mode_enforces_single_bomb() {
    let intent = r#"{"intent": "CLEAR", "user_move": "bomb", "reasoning": "bomb"}"#;
    let client = Arc::new(ScriptedClient::new([intent, intent]));
    let judge = JudgeService::new(client, JudgeMode::Intent);
    let mut game = Engine::with_bot(judge, Box::new(FixedBot::repeat(Move::Paper)));

    let first = game.play_round("bomb").await;
    assert_eq!(first.winner, Winner::User);
    assert!(game.state().bomb_used());

    let second = game.play_round("bomb").await;
    assert_eq!(second.validity, Validity::Invalid);
    assert_eq!(second.winner, Winner::Bot);
    assert_eq!(game.state().score().user, 1);
    assert_eq!(game.state().score().bot, 1);
}
