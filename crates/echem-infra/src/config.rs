//! Configuration loading for the e-Chem assistant.
//!
//! Reads the optional `echem.toml`, falls back to defaults when the file
//! is missing or malformed, then applies environment overrides. All of
//! this happens exactly once at process start; the resulting
//! [`GlobalConfig`] is applied identically to every request.
//!
//! Environment variables:
//! - `ALLOWED_ORIGINS` -- comma-separated CORS origin list
//! - `ECHEM_WEB_DIR` -- directory of the chat widget assets
//! - `GEMINI_API_KEY` -- provider credential, wrapped in `SecretString`

use std::path::Path;

use secrecy::SecretString;

use echem_types::config::GlobalConfig;

/// Comma-separated list of allowed CORS origins.
pub const ALLOWED_ORIGINS_ENV: &str = "ALLOWED_ORIGINS";

/// Directory the chat widget is served from.
pub const WEB_DIR_ENV: &str = "ECHEM_WEB_DIR";

/// The Gemini API credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Load configuration from `path`, then apply environment overrides.
///
/// - Missing file: defaults.
/// - Unreadable or unparsable file: logs a warning, uses defaults.
/// - `ALLOWED_ORIGINS` and `ECHEM_WEB_DIR` override the file either way.
pub async fn load_global_config(path: &Path) -> GlobalConfig {
    let mut config = match tokio::fs::read_to_string(path).await {
        Ok(content) => match toml::from_str::<GlobalConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
                GlobalConfig::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            GlobalConfig::default()
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            GlobalConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    config
}

/// Apply `ALLOWED_ORIGINS` and `ECHEM_WEB_DIR` on top of a parsed config.
pub fn apply_env_overrides(config: &mut GlobalConfig) {
    if let Ok(raw) = std::env::var(ALLOWED_ORIGINS_ENV) {
        let origins = parse_origin_list(&raw);
        if origins.is_empty() {
            tracing::warn!(
                "{} is set but contains no origins, keeping configured list",
                ALLOWED_ORIGINS_ENV
            );
        } else {
            config.cors.allowed_origins = origins;
        }
    }

    if let Ok(dir) = std::env::var(WEB_DIR_ENV) {
        if !dir.is_empty() {
            config.server.web_dir = dir;
        }
    }
}

/// Split a comma-separated origin list, trimming entries and dropping
/// empty segments.
pub fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the Gemini API key from the environment.
///
/// Returns `None` when unset so the caller can fail startup with a clear
/// message. The key is wrapped immediately and never logged.
pub fn gemini_api_key_from_env() -> Option<SecretString> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => Some(SecretString::from(key)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(&tmp.path().join("echem.toml")).await;
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.llm.model, "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("echem.toml");
        tokio::fs::write(
            &config_path,
            r#"
[server]
port = 9000

[llm]
request_timeout_secs = 15
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(&config_path).await;
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.llm.request_timeout_secs, 15);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("echem.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(&config_path).await;
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn parse_origin_list_splits_and_trims() {
        let origins = parse_origin_list("http://localhost:3000, https://chat.echem.lk ,");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://chat.echem.lk"]
        );
    }

    #[test]
    fn parse_origin_list_empty_input() {
        assert!(parse_origin_list("").is_empty());
        assert!(parse_origin_list(" , ,").is_empty());
    }

    #[test]
    fn apply_env_overrides_replaces_origin_list() {
        // SAFETY: this test sets and removes its env var around the call;
        // no other test in this crate reads ALLOWED_ORIGINS.
        unsafe {
            std::env::set_var(ALLOWED_ORIGINS_ENV, "https://a.example, https://b.example")
        };

        let mut config = GlobalConfig::default();
        apply_env_overrides(&mut config);

        unsafe { std::env::remove_var(ALLOWED_ORIGINS_ENV) };

        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn gemini_api_key_missing_returns_none() {
        // Uses the real variable name; skip the assertion when the
        // environment already carries a key.
        if std::env::var(API_KEY_ENV).is_err() {
            assert!(gemini_api_key_from_env().is_none());
        }
    }
}
