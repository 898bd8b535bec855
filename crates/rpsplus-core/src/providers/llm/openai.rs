use super::{build_http_client, error_body, ClientSettings, LlmClient};
use crate::errors::ConfigResult;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// OpenAI-compatible chat completions client.
pub struct OpenAIClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(settings: ClientSettings) -> ConfigResult<Self> {
        let client = build_http_client(settings.timeout)?;
        Ok(Self { settings, client })
    }
}

#[async_trait]
impl LlmClient for OpenAIClient {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> anyhow::Result<LlmResponse> {
        let url = format!("{}/chat/completions", self.settings.base_url);

        let mut messages = Vec::new();
        if let Some(sys) = system {
            messages.push(json!({
                "role": "system",
                "content": sys
            }));
        }
        messages.push(json!({
            "role": "user",
            "content": prompt
        }));

        let s = &self.settings.sampling;
        let body = json!({
            "model": self.settings.model,
            "messages": messages,
            "temperature": s.temperature,
            "top_p": s.top_p,
            "max_tokens": s.max_tokens,
        });
        debug!(url = %url, prompt_chars = prompt.len(), "sending chat completion request");

        let resp = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = error_body(resp).await;
            anyhow::bail!(
                "OpenAI chat API error (status {}): {}",
                status.as_u16(),
                error_text
            );
        }

        let json: serde_json::Value = resp.json().await?;

        // Parse choices[0].message.content
        let text = json
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("OpenAI API response missing content"))?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: "openai".to_string(),
            model: self.settings.model.clone(),
            meta: json!({ "usage": json.get("usage").cloned() }),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}
