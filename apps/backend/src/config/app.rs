use crate::config::llm::{optional, LlmConfig};
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8123;

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed by CORS; empty falls back to local dev servers.
    pub allowed_origins: Vec<String>,
    pub llm: LlmConfig,
}

impl AppConfig {
    /// Environment variables must be provided by the runtime (docker env_file,
    /// or sourced manually for local development).
    pub fn from_env() -> Result<Self, AppError> {
        let host = optional("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match optional("BACKEND_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got: {raw}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            allowed_origins: parse_origins(&optional("ALLOWED_ORIGINS").unwrap_or_default()),
            llm: LlmConfig::from_env()?,
        })
    }
}

/// Comma-separated http(s) origins; blanks and `null` are ignored.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}
