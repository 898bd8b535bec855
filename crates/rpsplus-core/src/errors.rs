//! Error types for judging and configuration.

use std::path::PathBuf;

/// Why a judging call could not produce a usable reply.
///
/// Every variant is recovered into [`Judgment::fallback`](crate::model::Judgment::fallback)
/// by [`JudgeService::judge_move`](crate::judge::JudgeService::judge_move).
#[derive(Debug, thiserror::Error)]
pub enum JudgeError {
    /// Transport, status or provider-side failure.
    #[error("{0:#}")]
    Service(#[source] anyhow::Error),

    /// Reply text did not decode as JSON.
    #[error("malformed judge reply: {source}")]
    MalformedReply {
        #[source]
        source: serde_json::Error,
    },

    /// Reply decoded, but not to a JSON object.
    #[error("judge reply is not a JSON object (got {kind})")]
    NotAnObject { kind: &'static str },
}

impl JudgeError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Service(_) => "service",
            Self::MalformedReply { .. } => "malformed_reply",
            Self::NotAnObject { .. } => "not_an_object",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing API key for provider '{provider}' (set {env_var} or pass --api-key)")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },

    #[error("invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },

    #[error("failed to create HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
