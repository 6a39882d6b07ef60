#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod llm;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod sessions;
pub mod state;
pub mod trace_ctx;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{AppConfig, LlmConfig};
pub use domain::{Role, RoomId, Transcript, Turn};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use extractors::{RoomIdParam, UserPrompt};
pub use llm::{BackendError, CompletionBackend, OpenAiCompatBackend};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use services::{ConversationOrchestrator, RoomView};
pub use sessions::{InMemorySessionStore, SessionStore};
pub use state::{build_state, AppState, StateBuilder};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
