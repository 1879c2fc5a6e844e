//! Server configuration from environment variables

use std::env;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

/// Invalid configuration value
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid socket address: {value}")]
    InvalidAddr { key: &'static str, value: String },
    #[error("{key} is not a valid number of seconds: {value}")]
    InvalidSeconds { key: &'static str, value: String },
}

/// Allowed CORS origin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigin {
    Any,
    Exact(String),
}

/// Settings for the OpenAI web-search augmentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub http_addr: SocketAddr,
    pub cors_origin: CorsOrigin,
    /// None when no API key is configured
    pub ai: Option<AiConfig>,
}

impl Config {
    /// Read configuration from the process environment
    ///
    /// Environment:
    /// - CLINIC_DATA_DIR: directory holding doctors.json and articles.json (default: ./data)
    /// - CLINIC_HTTP_ADDR: listen address (default: 0.0.0.0:3001)
    /// - CLINIC_CORS_ORIGIN: allowed origin, `*` for any (default: *)
    /// - OPENAI_API_KEY or OPENAI_API: enables AI augmentation
    /// - CLINIC_AI_MODEL: model name (default: gpt-4o-mini)
    /// - CLINIC_AI_TIMEOUT_SECS: request timeout (default: 60)
    pub fn from_env() -> Result<Self, ConfigError> {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::from_lookup(&current_dir, |key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(base_dir: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = match var("CLINIC_DATA_DIR") {
            Some(path) if Path::new(&path).is_absolute() => PathBuf::from(path),
            Some(path) => base_dir.join(path),
            None => base_dir.join(DEFAULT_DATA_DIR),
        };

        let addr = var("CLINIC_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string());
        let http_addr: SocketAddr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
            key: "CLINIC_HTTP_ADDR",
            value: addr.clone(),
        })?;

        let cors_origin = match var("CLINIC_CORS_ORIGIN") {
            Some(origin) if origin.trim() != "*" => CorsOrigin::Exact(origin.trim().to_string()),
            _ => CorsOrigin::Any,
        };

        let ai = match var("OPENAI_API_KEY").or_else(|| var("OPENAI_API")) {
            Some(api_key) => {
                let timeout = match var("CLINIC_AI_TIMEOUT_SECS") {
                    Some(secs) => secs.trim().parse::<u64>().map_err(|_| ConfigError::InvalidSeconds {
                        key: "CLINIC_AI_TIMEOUT_SECS",
                        value: secs.clone(),
                    })?,
                    None => DEFAULT_AI_TIMEOUT_SECS,
                };
                Some(AiConfig {
                    api_key,
                    model: var("CLINIC_AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
                    timeout: Duration::from_secs(timeout),
                })
            }
            None => None,
        };

        Ok(Self {
            data_dir,
            http_addr,
            cors_origin,
            ai,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(Path::new("/srv/clinic"), |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/clinic/data"));
        assert_eq!(config.http_addr.port(), 3001);
        assert_eq!(config.cors_origin, CorsOrigin::Any);
        assert!(config.ai.is_none());
    }

    #[test]
    fn test_relative_and_absolute_data_dir() {
        let config = config_with(&[("CLINIC_DATA_DIR", "fixtures")]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/clinic/fixtures"));

        let config = config_with(&[("CLINIC_DATA_DIR", "/var/lib/clinic")]).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/clinic"));
    }

    #[test]
    fn test_ai_config_from_either_key() {
        let config = config_with(&[("OPENAI_API", "sk-test")]).unwrap();
        let ai = config.ai.unwrap();
        assert_eq!(ai.api_key, "sk-test");
        assert_eq!(ai.model, DEFAULT_AI_MODEL);
        assert_eq!(ai.timeout, Duration::from_secs(DEFAULT_AI_TIMEOUT_SECS));

        let config = config_with(&[
            ("OPENAI_API_KEY", "sk-primary"),
            ("OPENAI_API", "sk-legacy"),
            ("CLINIC_AI_MODEL", "gpt-4o"),
            ("CLINIC_AI_TIMEOUT_SECS", "15"),
        ])
        .unwrap();
        let ai = config.ai.unwrap();
        assert_eq!(ai.api_key, "sk-primary");
        assert_eq!(ai.model, "gpt-4o");
        assert_eq!(ai.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_blank_api_key_disables_ai() {
        let config = config_with(&[("OPENAI_API_KEY", "  ")]).unwrap();
        assert!(config.ai.is_none());
    }

    #[test]
    fn test_cors_origin() {
        let config = config_with(&[("CLINIC_CORS_ORIGIN", "http://localhost:3000")]).unwrap();
        assert_eq!(
            config.cors_origin,
            CorsOrigin::Exact("http://localhost:3000".to_string())
        );
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_with(&[("CLINIC_HTTP_ADDR", "not-an-addr")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            config_with(&[("OPENAI_API_KEY", "k"), ("CLINIC_AI_TIMEOUT_SECS", "soon")]),
            Err(ConfigError::InvalidSeconds { .. })
        ));
    }
}
