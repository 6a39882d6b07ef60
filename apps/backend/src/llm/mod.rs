//! Completion backend abstraction.
//!
//! The orchestrator only needs `complete(transcript) -> text`. Concrete
//! backends live in submodules; tests inject their own implementation.

mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use openai::OpenAiCompatBackend;

use crate::domain::Turn;
use crate::errors::{BackendErrorKind, DomainError};

/// Failure talking to the completion service.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to completion service failed: {0}")]
    Transport(String),
    #[error("completion service did not answer in time")]
    Timeout,
    #[error("completion service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode completion response: {0}")]
    Decode(String),
    #[error("completion response contained no message")]
    EmptyReply,
}

impl BackendError {
    pub fn kind(&self) -> BackendErrorKind {
        match self {
            BackendError::Transport(_) => BackendErrorKind::Transport,
            BackendError::Timeout => BackendErrorKind::Timeout,
            BackendError::Status { status, .. } => BackendErrorKind::Status(*status),
            BackendError::Decode(_) => BackendErrorKind::Decode,
            BackendError::EmptyReply => BackendErrorKind::EmptyReply,
        }
    }
}

impl From<BackendError> for DomainError {
    fn from(err: BackendError) -> Self {
        DomainError::backend(err.kind(), err.to_string())
    }
}

/// A stateless chat completion service.
///
/// One call is one request: the whole transcript goes out, one reply comes
/// back. Implementations must not retry on their own behalf unless the
/// request is known to be idempotent.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, transcript: &[Turn]) -> Result<String, BackendError>;
}
