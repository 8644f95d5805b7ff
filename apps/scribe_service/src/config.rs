use std::time::Duration;

use scribe_llm::SubstitutionStrategy;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 5000;

/// Origins allowed to call the API from a browser.
pub const ALLOWED_ORIGINS: &[&str] = &["https://script-studio.vercel.app", "http://localhost:5173"];

pub const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(10 * 60);
pub const RATE_LIMIT_MAX_REQUESTS: usize = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub window: Duration,
    pub max_requests: usize,
    /// Key clients by the first `X-Forwarded-For` hop instead of the peer
    /// address. Only safe behind a proxy that overwrites the header.
    pub trust_proxy: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window: RATE_LIMIT_WINDOW,
            max_requests: RATE_LIMIT_MAX_REQUESTS,
            trust_proxy: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub port: u16,
    pub environment: String,
    pub substitution: SubstitutionStrategy,
    pub provider_base_url: Option<String>,
    pub allowed_origins: Vec<String>,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("GEMINI_API_KEY"))?;

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                reason: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let substitution = match lookup("PROMPT_SUBSTITUTION") {
            Some(value) => value
                .parse::<SubstitutionStrategy>()
                .map_err(|reason| ConfigError::Invalid {
                    name: "PROMPT_SUBSTITUTION",
                    reason,
                })?,
            None => SubstitutionStrategy::default(),
        };

        let trust_proxy = match lookup("TRUST_PROXY") {
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::Invalid {
                name: "TRUST_PROXY",
                reason: format!("expected true or false, got {value}"),
            })?,
            None => false,
        };

        Ok(Self {
            api_key,
            port,
            environment: lookup("APP_ENVIRONMENT").unwrap_or_else(|| "dev".to_string()),
            substitution,
            provider_base_url: lookup("GEMINI_BASE_URL").filter(|url| !url.trim().is_empty()),
            allowed_origins: ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
            rate_limit: RateLimitConfig {
                trust_proxy,
                ..RateLimitConfig::default()
            },
        })
    }

    pub fn is_dev(&self) -> bool {
        self.environment == "dev"
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = AppConfig::from_lookup(lookup(&[("PORT", "8080")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("GEMINI_API_KEY")));
    }

    #[test]
    fn blank_api_key_is_fatal() {
        let err = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn defaults_apply() {
        let config = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.is_dev());
        assert_eq!(config.substitution, SubstitutionStrategy::Scan);
        assert_eq!(config.provider_base_url, None);
        assert_eq!(config.rate_limit.max_requests, 100);
        assert_eq!(config.rate_limit.window, Duration::from_secs(600));
        assert!(!config.rate_limit.trust_proxy);
        assert_eq!(config.allowed_origins.len(), ALLOWED_ORIGINS.len());
    }

    #[test]
    fn overrides_are_read() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("PORT", "8080"),
            ("APP_ENVIRONMENT", "prod"),
            ("PROMPT_SUBSTITUTION", "sequential"),
            ("GEMINI_BASE_URL", "http://localhost:9999"),
            ("TRUST_PROXY", "true"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert!(!config.is_dev());
        assert_eq!(config.substitution, SubstitutionStrategy::Sequential);
        assert_eq!(config.provider_base_url.as_deref(), Some("http://localhost:9999"));
        assert!(config.rate_limit.trust_proxy);
    }

    #[test]
    fn invalid_trust_proxy_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "k"),
            ("TRUST_PROXY", "sometimes"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "TRUST_PROXY", .. }));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "k"), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }
}
