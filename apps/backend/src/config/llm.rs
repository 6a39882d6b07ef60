//! Completion backend settings.

use std::env;
use std::time::Duration;

use crate::error::AppError;
use crate::logging::Secret;

/// Volcengine Ark, the OpenAI-compatible endpoint the game was built against.
pub const DEFAULT_LLM_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// Connection settings for an OpenAI-compatible chat completions API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Secret,
    pub base_url: String,
    pub model: String,
    /// Per-request deadline; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key),
            base_url: DEFAULT_LLM_BASE_URL.to_string(),
            model: model.into(),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load from `LLM_API_KEY`, `LLM_MODEL`, `LLM_BASE_URL` and `LLM_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = required("LLM_API_KEY")?;
        let model = required("LLM_MODEL")?;

        let mut config = Self::new(api_key, model);

        if let Some(base_url) = optional("LLM_BASE_URL") {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(AppError::config(format!(
                    "LLM_BASE_URL must be an http(s) URL, got: {base_url}"
                )));
            }
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = optional("LLM_TIMEOUT_SECS") {
            let secs = raw.parse::<u64>().map_err(|_| {
                AppError::config(format!("LLM_TIMEOUT_SECS must be a whole number, got: {raw}"))
            })?;
            if secs == 0 {
                return Err(AppError::config("LLM_TIMEOUT_SECS must be greater than zero"));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn required(name: &str) -> Result<String, AppError> {
    optional(name).ok_or_else(|| AppError::config(format!("{name} must be set")))
}

/// Unset and blank are treated the same.
pub(crate) fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
