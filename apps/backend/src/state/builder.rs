use std::sync::Arc;

use crate::config::LlmConfig;
use crate::error::AppError;
use crate::llm::{CompletionBackend, OpenAiCompatBackend};
use crate::services::ConversationOrchestrator;
use crate::sessions::{InMemorySessionStore, SessionStore};
use crate::state::app_state::AppState;

pub const ERR_MISSING_BACKEND: &str =
    "no completion backend configured: call with_backend or with_llm_config";

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store: Option<Arc<dyn SessionStore>>,
    backend: Option<Arc<dyn CompletionBackend>>,
    llm_config: Option<LlmConfig>,
    system_prompt: Option<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            backend: None,
            llm_config: None,
            system_prompt: None,
        }
    }

    /// Defaults to a fresh [`InMemorySessionStore`].
    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// An explicit backend wins over `with_llm_config`.
    pub fn with_backend(mut self, backend: Arc<dyn CompletionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_llm_config(mut self, config: LlmConfig) -> Self {
        self.llm_config = Some(config);
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn build(self) -> Result<AppState, AppError> {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemorySessionStore::new()));

        let backend: Arc<dyn CompletionBackend> = match (self.backend, self.llm_config) {
            (Some(backend), _) => backend,
            (None, Some(config)) => Arc::new(OpenAiCompatBackend::new(&config)?),
            (None, None) => return Err(AppError::config(ERR_MISSING_BACKEND)),
        };

        let mut orchestrator = ConversationOrchestrator::new(store, backend);
        if let Some(prompt) = self.system_prompt {
            orchestrator = orchestrator.with_system_prompt(prompt);
        }

        Ok(AppState::new(orchestrator))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
