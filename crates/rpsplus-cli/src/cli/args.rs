use clap::{Parser, Subcommand, ValueEnum};
use rpsplus_core::config::{GameConfig, ProviderKind};
use rpsplus_core::JudgeMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rpsplus",
    version,
    about = "Rock-Paper-Scissors Plus, refereed by a language model"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG wins when set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Play a game against the bot
    Play(PlayArgs),
    /// Print the game rules
    Rules,
    Version,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderArg {
    Gemini,
    Openai,
}

impl From<ProviderArg> for ProviderKind {
    fn from(p: ProviderArg) -> Self {
        match p {
            ProviderArg::Gemini => ProviderKind::Gemini,
            ProviderArg::Openai => ProviderKind::OpenAi,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum JudgeModeArg {
    /// The model decides validity and winner
    Referee,
    /// The model only reads the move; rules are applied locally
    Intent,
}

impl From<JudgeModeArg> for JudgeMode {
    fn from(m: JudgeModeArg) -> Self {
        match m {
            JudgeModeArg::Referee => JudgeMode::Referee,
            JudgeModeArg::Intent => JudgeMode::Intent,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args, Clone, Debug)]
pub struct PlayArgs {
    /// YAML config file; flags override its values
    #[arg(long, env = "RPSPLUS_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model identifier (provider-specific)
    #[arg(long)]
    pub model: Option<String>,

    /// Override the provider API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// API key; falls back to GEMINI_API_KEY / OPENAI_API_KEY
    #[arg(long, env = "RPSPLUS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, value_enum)]
    pub judge_mode: Option<JudgeModeArg>,

    /// Number of rounds to play
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Seed for the bot's move selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Request timeout for the referee call
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long)]
    pub temperature: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl PlayArgs {
    /// File (or defaults) first, then flags.
    pub fn resolve_config(&self) -> anyhow::Result<GameConfig> {
        let mut cfg = match &self.config {
            Some(path) => GameConfig::from_path(path)?,
            None => GameConfig::default(),
        };

        if let Some(p) = self.provider {
            cfg.provider = p.into();
        }
        if let Some(m) = &self.model {
            cfg.model = Some(m.clone());
        }
        if let Some(u) = &self.base_url {
            cfg.base_url = Some(u.clone());
        }
        if let Some(k) = &self.api_key {
            cfg.api_key = Some(k.clone());
        }
        if let Some(m) = self.judge_mode {
            cfg.judge_mode = m.into();
        }
        if let Some(r) = self.rounds {
            cfg.max_rounds = r;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(t) = self.timeout_secs {
            cfg.timeout_secs = t;
        }
        if let Some(t) = self.temperature {
            cfg.sampling.temperature = t;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
