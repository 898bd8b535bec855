use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A user or bot move. The bot only ever plays the three basic moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// Moves the bot may choose from.
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            "bomb" => Ok(Move::Bomb),
            other => Err(format!("unknown move '{}'", other)),
        }
    }
}

/// Classification of the user's input for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Validity {
    Valid,
    Invalid,
    Unclear,
}

impl Validity {
    /// Exact wire names only; anything else is `None`.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "VALID" => Some(Validity::Valid),
            "INVALID" => Some(Validity::Invalid),
            "UNCLEAR" => Some(Validity::Unclear),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Validity::Valid => "VALID",
            Validity::Invalid => "INVALID",
            Validity::Unclear => "UNCLEAR",
        }
    }
}

impl fmt::Display for Validity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl Winner {
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Winner::User),
            "bot" => Some(Winner::Bot),
            "draw" => Some(Winner::Draw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::User => "user",
            Winner::Bot => "bot",
            Winner::Draw => "draw",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured outcome decision for one round.
///
/// Produced by the judge, consumed once by the engine. Only its fields survive
/// the round, copied into a [`RoundRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    pub move_validity: Validity,
    pub user_move: Option<Move>,
    pub reasoning: Option<String>,
    pub round_winner: Winner,
    pub round_explanation: Option<String>,
    pub bomb_used_this_round: bool,
}

impl Judgment {
    /// Fixed outcome substituted when the judging call fails.
    pub fn fallback(error: impl fmt::Display) -> Self {
        Self {
            move_validity: Validity::Invalid,
            user_move: None,
            reasoning: Some(format!("Error processing move: {}", error)),
            round_winner: Winner::Bot,
            round_explanation: Some("Technical error - bot wins by default".to_string()),
            bomb_used_this_round: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub user: u32,
    pub bot: u32,
}

/// History entry for one played round. Never mutated after it is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub user_input: String,
    pub user_move: Option<Move>,
    pub bot_move: Move,
    pub validity: Validity,
    pub winner: Winner,
    pub reasoning: Option<String>,
}

/// What the shell displays after each round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_number: u32,
    pub user_input: String,
    pub user_move: Option<Move>,
    pub bot_move: Move,
    pub validity: Validity,
    pub winner: Winner,
    pub reasoning: Option<String>,
    pub explanation: Option<String>,
    pub current_score: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    UserWins,
    BotWins,
    Draw,
}

impl Verdict {
    pub fn from_score(score: Score) -> Self {
        match score.user.cmp(&score.bot) {
            std::cmp::Ordering::Greater => Verdict::UserWins,
            std::cmp::Ordering::Less => Verdict::BotWins,
            std::cmp::Ordering::Equal => Verdict::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::UserWins => "User wins!",
            Verdict::BotWins => "Bot wins!",
            Verdict::Draw => "Draw!",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// End-of-game summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinalResult {
    pub result: Verdict,
    pub final_score: Score,
    pub rounds_played: u32,
    pub history: Vec<RoundRecord>,
}

/// Raw completion returned by an [`LlmClient`](crate::providers::llm::LlmClient).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}
