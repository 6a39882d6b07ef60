use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{Transcript, Turn};
use crate::llm::{BackendError, CompletionBackend};

/// Completion backend that plays back queued outcomes in order and records
/// every transcript it was asked to complete.
///
/// When the queue is empty the backend answers `EmptyReply`.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    script: Mutex<VecDeque<Result<String, BackendError>>>,
    calls: Mutex<Vec<Transcript>>,
    delay: Mutex<Duration>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replying<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Self::new();
        for reply in replies {
            backend.push_reply(reply);
        }
        backend
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        self.script_mut().push_back(Ok(reply.into()));
    }

    pub fn push_error(&self, err: BackendError) {
        self.script_mut().push_back(Err(err));
    }

    /// Sleep this long before answering; the transcript is recorded first.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap_or_else(|e| e.into_inner()) = delay;
    }

    /// Transcripts seen so far, oldest first.
    pub fn calls(&self) -> Vec<Transcript> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn script_mut(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, BackendError>>> {
        self.script.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn complete(&self, transcript: &[Turn]) -> Result<String, BackendError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Transcript::from_turns(transcript.to_vec()));

        let delay = *self.delay.lock().unwrap_or_else(|e| e.into_inner());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        self.script_mut()
            .pop_front()
            .unwrap_or(Err(BackendError::EmptyReply))
    }
}
