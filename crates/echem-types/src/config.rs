//! Global configuration types for the e-Chem assistant.
//!
//! `GlobalConfig` represents the optional `echem.toml` read once at
//! process start. All fields have defaults so a missing or partial file
//! still yields a runnable configuration. Environment overrides
//! (`ALLOWED_ORIGINS`, `ECHEM_WEB_DIR`) are applied by the loader in
//! echem-infra after parsing.

use serde::{Deserialize, Serialize};

/// Top-level configuration, loaded from `echem.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// HTTP server bind address and static asset location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the chat widget assets; skipped when absent.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_web_dir() -> String {
    "web".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            web_dir: default_web_dir(),
        }
    }
}

/// Completion provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier passed to the provider.
    #[serde(default = "default_model")]
    pub model: String,
    /// Upper bound on a single provider call. The handler holds a server
    /// worker for this long at most.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Cross-origin policy applied to every response.
///
/// No credentials are allowed and the preflight max-age is a fixed
/// 3600 seconds; only the origin list is configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}
