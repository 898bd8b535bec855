use crate::model::LlmResponse;
use crate::providers::llm::LlmClient;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info_span, Instrument};

/// Wraps a client so every completion runs inside an `llm.request` span.
///
/// Prompt text is never recorded, only its length.
pub struct TracingLlmClient {
    inner: Arc<dyn LlmClient>,
}

impl TracingLlmClient {
    pub fn new(inner: Arc<dyn LlmClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LlmClient for TracingLlmClient {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> anyhow::Result<LlmResponse> {
        let span = info_span!(
            "llm.request",
            "llm.provider" = self.inner.provider_name(),
            "llm.prompt_chars" = prompt.len(),
            "llm.model" = tracing::field::Empty,
            "llm.response_chars" = tracing::field::Empty,
            "duration_ms" = tracing::field::Empty,
            "error" = tracing::field::Empty,
            "error.message" = tracing::field::Empty
        );

        async move {
            let start = std::time::Instant::now();
            let result = self.inner.complete(prompt, system).await;
            let span = tracing::Span::current();
            span.record("duration_ms", start.elapsed().as_millis() as u64);

            match &result {
                Ok(resp) => {
                    span.record("llm.model", resp.model.as_str());
                    span.record("llm.response_chars", resp.text.len());
                }
                Err(e) => {
                    span.record("error", true);
                    span.record("error.message", e.to_string().as_str());
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::llm::fake::ScriptedClient;

    #[tokio::test]
    async fn passes_results_through() {
        let inner = Arc::new(ScriptedClient::new(["first"]));
        let client = TracingLlmClient::new(inner.clone());

        let resp = client.complete("hello", Some("sys")).await.unwrap();
        assert_eq!(resp.text, "first");
        assert_eq!(client.provider_name(), "scripted");

        let err = client.complete("hello", None).await.unwrap_err();
        assert!(err.to_string().contains("no more scripted responses"));
        assert_eq!(inner.calls(), 2);
    }
}
