//! Process configuration read from the environment.

pub mod app;
pub mod llm;

pub use app::AppConfig;
pub use llm::LlmConfig;
