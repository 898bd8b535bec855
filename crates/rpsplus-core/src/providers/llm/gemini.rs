use super::{build_http_client, error_body, ClientSettings, LlmClient};
use crate::errors::ConfigResult;
use crate::model::LlmResponse;
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

/// Google Gemini `generateContent` client.
///
/// Gemini has no separate system slot in this call shape, so the instruction
/// block and the round context are sent as one text part separated by a
/// blank line.
pub struct GeminiClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(settings: ClientSettings) -> ConfigResult<Self> {
        let client = build_http_client(settings.timeout)?;
        Ok(Self { settings, client })
    }

    fn url(&self) -> String {
        let model = self
            .settings
            .model
            .strip_prefix("models/")
            .unwrap_or(&self.settings.model);
        format!("{}/models/{}:generateContent", self.settings.base_url, model)
    }

    fn body(&self, prompt: &str, system: Option<&str>) -> serde_json::Value {
        let text = match system {
            Some(sys) => format!("{}\n\n{}", sys, prompt),
            None => prompt.to_string(),
        };
        let s = &self.settings.sampling;
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": text }]
            }],
            "generationConfig": {
                "temperature": s.temperature,
                "topP": s.top_p,
                "topK": s.top_k,
                "maxOutputTokens": s.max_tokens,
            }
        })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> anyhow::Result<LlmResponse> {
        let url = self.url();
        let body = self.body(prompt, system);
        debug!(url = %url, prompt_chars = prompt.len(), "sending gemini request");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = error_body(resp).await;
            anyhow::bail!("Gemini API error (status {}): {}", status.as_u16(), error_text);
        }

        let json: serde_json::Value = resp.json().await?;

        let text = json
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                let reason = json
                    .pointer("/promptFeedback/blockReason")
                    .and_then(|v| v.as_str())
                    .unwrap_or("no candidates");
                anyhow::anyhow!("Gemini API response missing content ({})", reason)
            })?
            .to_string();

        Ok(LlmResponse {
            text,
            provider: "gemini".to_string(),
            model: self.settings.model.clone(),
            meta: json!({ "usage": json.get("usageMetadata").cloned() }),
        })
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
