//! Rock-Paper-Scissors Plus with a language-model referee.
//!
//! The crate implements the judgment pipeline of the game:
//!
//! - Request construction for the external reasoning service
//! - Response parsing (markdown fence stripping + JSON decode)
//! - Defensive validation of untrusted model output into closed enums
//! - The state transitions a judgment drives (bomb consumption, scoring, history)
//!
//! # Quick Start
//!
//! ```no_run
//! use rpsplus_core::config::GameConfig;
//! use rpsplus_core::engine::Engine;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default().with_api_key("secret");
//! let mut engine = Engine::from_config(&config)?;
//!
//! let round = engine.play_round("I'll go with paper").await;
//! println!("round {} won by {}", round.round_number, round.winner);
//!
//! let result = engine.get_final_result();
//! println!("{}", result.result);
//! # Ok(())
//! # }
//! ```
//!
//! # Judging modes
//!
//! | Mode | Who decides validity and winner |
//! |------|----------------------------------|
//! | `referee` (default) | the model, validated with conservative defaults |
//! | `intent` | the model extracts the move, [`rules`] decides the round |

pub mod config;
pub mod engine;
pub mod errors;
pub mod judge;
pub mod model;
pub mod providers;
pub mod rules;
pub mod state;

pub use config::GameConfig;
pub use engine::Engine;
pub use errors::{ConfigError, JudgeError};
pub use judge::{JudgeMode, JudgeService};
pub use model::{FinalResult, Judgment, Move, RoundRecord, RoundResult, Score, Validity, Winner};
pub use state::GameState;
