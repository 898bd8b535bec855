//! Game configuration.
//!
//! Values come from (lowest to highest precedence): built-in defaults, an
//! optional YAML file, CLI flags. The API key falls back to the provider's
//! environment variable.
//!
//! ```yaml
//! provider: gemini
//! model: gemini-flash-latest
//! judge_mode: referee
//! max_rounds: 5
//! timeout_secs: 60
//! sampling:
//!   temperature: 0.1
//!   top_p: 0.95
//!   top_k: 40
//!   max_tokens: 1024
//! ```

use crate::errors::{ConfigError, ConfigResult};
use crate::judge::JudgeMode;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Gemini,
    #[serde(alias = "open_ai")]
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
        }
    }

    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GEMINI_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini-flash-latest",
            ProviderKind::OpenAi => "gpt-4o-mini",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            ProviderKind::OpenAi => "https://api.openai.com/v1",
        }
    }
}

/// Low-randomness sampling so the referee applies the rules consistently.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    pub temperature: f64,
    pub top_p: f64,
    /// Ignored by providers without top-k sampling.
    pub top_k: u32,
    pub max_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.1,
            top_p: 0.95,
            top_k: 40,
            max_tokens: 1024,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub provider: ProviderKind,
    /// Defaults to the provider's model when unset.
    pub model: Option<String>,
    pub base_url: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub sampling: SamplingConfig,
    pub timeout_secs: u64,
    pub judge_mode: JudgeMode,
    pub max_rounds: u32,
    /// Seed for the bot's move selection; random when unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: None,
            base_url: None,
            api_key: None,
            sampling: SamplingConfig::default(),
            timeout_secs: 60,
            judge_mode: JudgeMode::default(),
            max_rounds: 5,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg: GameConfig = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }

    /// Explicit key first, then the provider's environment variable.
    pub fn resolve_api_key(&self) -> ConfigResult<String> {
        let explicit = self.api_key.clone().filter(|k| !k.trim().is_empty());
        let from_env = || {
            std::env::var(self.provider.api_key_env())
                .ok()
                .filter(|k| !k.trim().is_empty())
        };
        explicit
            .or_else(from_env)
            .map(|k| k.trim().to_string())
            .ok_or(ConfigError::MissingApiKey {
                provider: self.provider.as_str(),
                env_var: self.provider.api_key_env(),
            })
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let s = &self.sampling;
        if !(0.0..=2.0).contains(&s.temperature) {
            return Err(ConfigError::Invalid {
                field: "sampling.temperature",
                message: format!("{} is outside 0.0..=2.0", s.temperature),
            });
        }
        if !(s.top_p > 0.0 && s.top_p <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "sampling.top_p",
                message: format!("{} is outside (0.0, 1.0]", s.top_p),
            });
        }
        if s.max_tokens == 0 {
            return Err(ConfigError::Invalid {
                field: "sampling.max_tokens",
                message: "must be at least 1".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn defaults_are_low_randomness() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.provider, ProviderKind::Gemini);
        assert_eq!(cfg.model(), "gemini-flash-latest");
        assert_eq!(cfg.sampling.temperature, 0.1);
        assert_eq!(cfg.sampling.top_p, 0.95);
        assert_eq!(cfg.sampling.top_k, 40);
        assert_eq!(cfg.sampling.max_tokens, 1024);
        assert_eq!(cfg.max_rounds, 5);
        assert_eq!(cfg.judge_mode, JudgeMode::Referee);
        cfg.validate().unwrap();
    }

    #[test]
    fn loads_partial_yaml_over_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            f,
            "provider: openai\njudge_mode: intent\nsampling:\n  temperature: 0.0\nseed: 7"
        )
        .unwrap();

        let cfg = GameConfig::from_path(f.path()).unwrap();
        assert_eq!(cfg.provider, ProviderKind::OpenAi);
        assert_eq!(cfg.model(), "gpt-4o-mini");
        assert_eq!(cfg.base_url(), "https://api.openai.com/v1");
        assert_eq!(cfg.judge_mode, JudgeMode::Intent);
        assert_eq!(cfg.sampling.temperature, 0.0);
        assert_eq!(cfg.sampling.max_tokens, 1024);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn rejects_out_of_range_sampling() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "sampling:\n  top_p: 1.5").unwrap();
        let err = GameConfig::from_path(f.path()).unwrap_err();
        assert!(err.to_string().contains("sampling.top_p"));
    }

    #[test]
    fn parse_error_names_the_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "provider: [not, a, provider]").unwrap();
        let err = GameConfig::from_path(f.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let cfg = GameConfig::default().with_base_url("http://localhost:9000/");
        assert_eq!(cfg.base_url(), "http://localhost:9000");
    }

    #[test]
    #[serial]
    fn api_key_falls_back_to_provider_env() {
        let previous = std::env::var("GEMINI_API_KEY").ok();
        std::env::set_var("GEMINI_API_KEY", "from-env");

        let cfg = GameConfig::default();
        assert_eq!(cfg.resolve_api_key().unwrap(), "from-env");
        let cfg = GameConfig::default().with_api_key("explicit");
        assert_eq!(cfg.resolve_api_key().unwrap(), "explicit");

        std::env::remove_var("GEMINI_API_KEY");
        let err = GameConfig::default().resolve_api_key().unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        if let Some(v) = previous {
            std::env::set_var("GEMINI_API_KEY", v);
        }
    }
}
