use thiserror::Error;

/// Rejections raised before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide adText and goal")]
    MissingInput,
    #[error("invalid request body: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("LLM API error: {status} {detail}")]
    Api {
        status: reqwest::StatusCode,
        detail: String,
    },
    #[error("LLM response missing choices")]
    MissingChoices,
    #[error("LLM response was empty")]
    EmptyResponse,
    #[error("LLM call timed out after {0} ms")]
    Timeout(u128),
    #[error("LLM client misconfigured: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
