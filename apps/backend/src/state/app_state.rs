use std::sync::Arc;

use crate::services::ConversationOrchestrator;

/// Shared resources handed to every handler through `web::Data`.
#[derive(Debug, Clone)]
pub struct AppState {
    orchestrator: Arc<ConversationOrchestrator>,
}

impl AppState {
    pub fn new(orchestrator: ConversationOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }

    pub fn orchestrator(&self) -> &ConversationOrchestrator {
        &self.orchestrator
    }
}
