pub mod fake;
pub mod gemini;
pub mod openai;
pub mod tracing;

use crate::config::{GameConfig, ProviderKind, SamplingConfig};
use crate::errors::{ConfigError, ConfigResult};
use crate::model::LlmResponse;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Text-completion service used as the game's referee.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// One completion. `system` carries the fixed instruction block.
    async fn complete(&self, prompt: &str, system: Option<&str>) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;
}

/// Connection and sampling settings shared by the HTTP providers.
#[derive(Clone, Debug)]
pub struct ClientSettings {
    pub model: String,
    pub api_key: String,
    pub base_url: String,
    pub sampling: SamplingConfig,
    pub timeout: Duration,
}

impl ClientSettings {
    pub fn from_config(cfg: &GameConfig) -> ConfigResult<Self> {
        Ok(Self {
            model: cfg.model().to_string(),
            api_key: cfg.resolve_api_key()?,
            base_url: cfg.base_url().to_string(),
            sampling: cfg.sampling.clone(),
            timeout: Duration::from_secs(cfg.timeout_secs),
        })
    }
}

const USER_AGENT_VALUE: &str = concat!("rpsplus/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_http_client(timeout: Duration) -> ConfigResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT_VALUE)
        .build()
        .map_err(ConfigError::HttpClient)
}

/// Builds the configured provider, wrapped in request tracing.
pub fn from_config(cfg: &GameConfig) -> ConfigResult<Arc<dyn LlmClient>> {
    cfg.validate()?;
    let settings = ClientSettings::from_config(cfg)?;
    let inner: Arc<dyn LlmClient> = match cfg.provider {
        ProviderKind::Gemini => Arc::new(gemini::GeminiClient::new(settings)?),
        ProviderKind::OpenAi => Arc::new(openai::OpenAIClient::new(settings)?),
    };
    Ok(Arc::new(tracing::TracingLlmClient::new(inner)))
}

/// Reads the error body of a failed response without failing again.
pub(crate) async fn error_body(resp: reqwest::Response) -> String {
    resp.text().await.unwrap_or_else(|_| String::new())
}
