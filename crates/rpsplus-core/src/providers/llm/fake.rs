use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum ScriptedReply {
    Text(String),
    Fail(String),
}

/// A recorded `complete` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub prompt: String,
    pub system: Option<String>,
}

/// Offline client that replays queued replies in order.
///
/// Errors once the queue is empty. Used by tests and demos; never talks to
/// the network.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies = texts
            .into_iter()
            .map(|t| ScriptedReply::Text(t.into()))
            .collect();
        Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_text(&self, text: impl Into<String>) -> &Self {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(ScriptedReply::Text(text.into()));
        self
    }

    /// Queues a service failure with the given message.
    pub fn push_failure(&self, message: impl Into<String>) -> &Self {
        self.replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(ScriptedReply::Fail(message.into()));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> anyhow::Result<LlmResponse> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedCall {
                prompt: prompt.to_string(),
                system: system.map(str::to_string),
            });

        let next = self
            .replies
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        match next {
            Some(ScriptedReply::Text(text)) => Ok(LlmResponse {
                text,
                provider: self.provider_name().to_string(),
                model: "scripted".to_string(),
                meta: serde_json::Value::Null,
            }),
            Some(ScriptedReply::Fail(message)) => Err(anyhow::anyhow!(message)),
            None => anyhow::bail!("no more scripted responses"),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}
