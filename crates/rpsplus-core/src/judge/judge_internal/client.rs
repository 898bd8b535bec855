use crate::errors::JudgeError;
use crate::judge::JudgeService;
use serde_json::{Map, Value};
use tracing::debug;

pub(crate) async fn call_judge_impl(
    svc: &JudgeService,
    prompt: &str,
    system: &str,
) -> Result<Map<String, Value>, JudgeError> {
    let resp = svc
        .client
        .complete(prompt, Some(system))
        .await
        .map_err(JudgeError::Service)?;

    if resp.text.trim().is_empty() {
        return Err(JudgeError::Service(anyhow::anyhow!(
            "empty response from {}",
            resp.provider
        )));
    }
    debug!(
        provider = %resp.provider,
        reply_chars = resp.text.len(),
        "judge reply received"
    );

    parse_reply_impl(&resp.text)
}

/// Removes surrounding whitespace and a markdown code fence, if any.
///
/// Leading "```json" then leading "```" then trailing "```", in that order.
pub(crate) fn strip_code_fence_impl(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    }
    if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

pub(crate) fn parse_reply_impl(text: &str) -> Result<Map<String, Value>, JudgeError> {
    let body = strip_code_fence_impl(text);
    let value: Value =
        serde_json::from_str(body).map_err(|source| JudgeError::MalformedReply { source })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(JudgeError::NotAnObject {
            kind: json_kind(&other),
        }),
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
