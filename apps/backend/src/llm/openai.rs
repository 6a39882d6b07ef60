//! Client for OpenAI-compatible `/chat/completions` endpoints
//! (Volcengine Ark, OpenAI, local proxies).

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{BackendError, CompletionBackend};
use crate::config::LlmConfig;
use crate::domain::{Role, Turn};
use crate::error::AppError;
use crate::logging::{redact, Secret};

/// Longest slice of an error body carried into the error detail.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// [`CompletionBackend`] speaking the OpenAI chat completions protocol.
#[derive(Clone)]
pub struct OpenAiCompatBackend {
    http: reqwest::Client,
    api_key: Secret,
    endpoint: String,
    model: String,
}

impl std::fmt::Debug for OpenAiCompatBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompatBackend")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl OpenAiCompatBackend {
    pub fn new(config: &LlmConfig) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> Result<HeaderMap, BackendError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose()))
            .map_err(|_| BackendError::Transport("API key is not a valid header value".into()))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

#[async_trait]
impl CompletionBackend for OpenAiCompatBackend {
    async fn complete(&self, transcript: &[Turn]) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: &self.model,
            messages: transcript
                .iter()
                .map(|turn| WireMessage {
                    role: turn.role(),
                    content: turn.content(),
                })
                .collect(),
        };

        debug!(
            model = %self.model,
            message_count = request.messages.len(),
            "sending chat completion"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .headers(self.headers()?)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let body = truncate(&redact(&body), MAX_ERROR_BODY_CHARS);
            warn!(status = status.as_u16(), body = %body, "chat completion rejected");
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout
            } else {
                BackendError::Decode(e.to_string())
            }
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(BackendError::EmptyReply)
    }
}

fn map_transport_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Transport(redact(&err.to_string()))
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}
