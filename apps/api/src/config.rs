use anyhow::{Context, Result};

use crate::llm_client::{LlmConfig, DEFAULT_BASE_URL};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let groq_api_key = get("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .context("Required environment variable 'GROQ_API_KEY' is not set")?;

        Ok(Config {
            groq_api_key,
            groq_base_url: get("GROQ_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Credentials and endpoint for the completion client.
    pub fn llm_config(&self) -> LlmConfig {
        LlmConfig {
            base_url: self.groq_base_url.clone(),
            ..LlmConfig::new(self.groq_api_key.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_apply_when_only_key_is_set() {
        let config = Config::from_lookup(lookup(&[("GROQ_API_KEY", "gsk_test")])).unwrap();
        assert_eq!(config.groq_api_key, "gsk_test");
        assert_eq!(config.groq_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_fails() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn test_blank_api_key_fails() {
        assert!(Config::from_lookup(lookup(&[("GROQ_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let result = Config::from_lookup(lookup(&[("GROQ_API_KEY", "k"), ("PORT", "http")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_llm_config_carries_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GROQ_API_KEY", "k"),
            ("GROQ_BASE_URL", "http://localhost:9999/v1"),
            ("PORT", "3000"),
        ]))
        .unwrap();
        let llm = config.llm_config();
        assert_eq!(llm.api_key, "k");
        assert_eq!(llm.base_url, "http://localhost:9999/v1");
        assert_eq!(config.port, 3000);
    }
}
