//! Service configuration
//!
//! Read once at startup from the environment (optionally seeded from a `.env`
//! file):
//! - `SUPABASE_URL` / `SUPABASE_SERVICE_ROLE_KEY` - hosted task store. Both or
//!   neither; without them tasks live in process memory.
//! - `TODOS_TABLE` - table name. Defaults to `todos`.
//! - `COHERE_API_KEY` - text-generation credential.
//! - `COHERE_API_URL` - generate endpoint. Defaults to Cohere's `/v1/generate`.
//! - `COHERE_MODEL` - generation model. Defaults to `command`.
//! - `SLACK_WEBHOOK_URL` - where summaries are posted.
//! - `HOST` - bind address. Defaults to `0.0.0.0`.
//! - `PORT` - listen port. Defaults to `5000`.

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;
use todo_core::summary::CohereConfig;
use todo_core::task::SupabaseConfig;

const DEFAULT_TABLE: &str = "todos";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is set but {1} is not")]
    Incomplete(&'static str, &'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase: Option<SupabaseConfig>,
    pub cohere: Option<CohereConfig>,
    pub slack_webhook_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let supabase = match (get("SUPABASE_URL"), get("SUPABASE_SERVICE_ROLE_KEY")) {
            (Some(url), Some(service_role_key)) => Some(SupabaseConfig {
                url,
                service_role_key,
                table: get("TODOS_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string()),
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::Incomplete(
                    "SUPABASE_URL",
                    "SUPABASE_SERVICE_ROLE_KEY",
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::Incomplete(
                    "SUPABASE_SERVICE_ROLE_KEY",
                    "SUPABASE_URL",
                ))
            }
        };

        let cohere = get("COHERE_API_KEY").map(|api_key| {
            let mut cohere = CohereConfig::new(api_key);
            if let Some(url) = get("COHERE_API_URL") {
                cohere.api_url = url;
            }
            if let Some(model) = get("COHERE_MODEL") {
                cohere.model = model;
            }
            cohere
        });

        let host = match get("HOST") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidValue("HOST", format!("{}", e)))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match get("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidValue("PORT", format!("{}", e)))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            supabase,
            cohere,
            slack_webhook_url: get("SLACK_WEBHOOK_URL"),
            host,
            port,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert!(config.supabase.is_none());
        assert!(config.cohere.is_none());
        assert!(config.slack_webhook_url.is_none());
        assert_eq!(config.listen_addr().to_string(), "0.0.0.0:5000");
    }

    #[test]
    fn test_full_configuration() {
        let config = load(&[
            ("SUPABASE_URL", "https://xyz.supabase.co"),
            ("SUPABASE_SERVICE_ROLE_KEY", "service"),
            ("COHERE_API_KEY", "cohere"),
            ("COHERE_MODEL", "command-light"),
            ("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/x"),
            ("PORT", "8080"),
        ])
        .unwrap();

        let supabase = config.supabase.unwrap();
        assert_eq!(supabase.url, "https://xyz.supabase.co");
        assert_eq!(supabase.table, "todos");

        let cohere = config.cohere.unwrap();
        assert_eq!(cohere.api_key, "cohere");
        assert_eq!(cohere.model, "command-light");
        assert_eq!(cohere.api_url, "https://api.cohere.ai/v1/generate");

        assert_eq!(
            config.slack_webhook_url.as_deref(),
            Some("https://hooks.slack.com/services/x")
        );
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = load(&[("COHERE_API_KEY", "  "), ("SLACK_WEBHOOK_URL", "")]).unwrap();
        assert!(config.cohere.is_none());
        assert!(config.slack_webhook_url.is_none());
    }

    #[test]
    fn test_half_configured_store_is_rejected() {
        let err = load(&[("SUPABASE_URL", "https://xyz.supabase.co")]).unwrap_err();
        assert!(matches!(err, ConfigError::Incomplete("SUPABASE_URL", _)));
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PORT", "fivethousand")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("PORT", _)));
    }
}
