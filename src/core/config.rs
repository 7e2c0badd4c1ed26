//! Configuration management

use tracing::warn;

use crate::core::errors::{ProxyError, Result};
use crate::core::models::ProviderCredentials;

/// Default Azure Translator endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

/// Environment variable holding the provider key
pub const API_KEY_VAR: &str = "AZURE_TRANSLATOR_KEY";

/// Environment variable holding the provider region
pub const REGION_VAR: &str = "AZURE_TRANSLATOR_REGION";

/// Configuration for the proxy, loaded once at startup
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Provider subscription key
    pub api_key: Option<String>,
    /// Provider subscription region
    pub region: Option<String>,
    /// Provider base URL, without trailing slash
    pub api_endpoint: String,
    /// Outbound request timeout; none by default
    pub timeout_ms: Option<u64>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            region: None,
            api_endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_ms: None,
        }
    }
}

impl ProxyConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR).filter(|v| !v.is_empty());
        let region = lookup(REGION_VAR).filter(|v| !v.is_empty());

        let api_endpoint = lookup("TRANSLATOR_ENDPOINT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_ms = match lookup("REQUEST_TIMEOUT_MS") {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| anyhow::anyhow!("REQUEST_TIMEOUT_MS is invalid: {}", e))?,
            ),
            None => None,
        };

        let config = Self {
            api_key,
            region,
            api_endpoint,
            timeout_ms,
        };

        if config.credentials().is_err() {
            warn!(
                "{} or {} not set; translation requests will be rejected",
                API_KEY_VAR, REGION_VAR
            );
        }

        Ok(config)
    }

    /// Set the provider key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the provider region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the provider endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Resolve credentials; both key and region must be non-empty
    pub fn credentials(&self) -> Result<ProviderCredentials> {
        match (self.api_key.as_deref(), self.region.as_deref()) {
            (Some(api_key), Some(region)) if !api_key.is_empty() && !region.is_empty() => {
                Ok(ProviderCredentials {
                    api_key: api_key.to_string(),
                    region: region.to_string(),
                })
            }
            _ => Err(ProxyError::MissingCredentials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_ms, None);
        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_credentials_resolved() {
        let config = ProxyConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "key"),
            (REGION_VAR, "westeurope"),
        ]))
        .unwrap();

        let creds = config.credentials().unwrap();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.region, "westeurope");
    }

    #[test]
    fn test_empty_credentials_are_missing() {
        let config =
            ProxyConfig::from_lookup(lookup(&[(API_KEY_VAR, "key"), (REGION_VAR, "")])).unwrap();
        assert!(matches!(
            config.credentials(),
            Err(ProxyError::MissingCredentials)
        ));

        let config = ProxyConfig::default().with_api_key("").with_region("eastus");
        assert!(config.credentials().is_err());
    }

    #[test]
    fn test_endpoint_and_timeout() {
        let config = ProxyConfig::from_lookup(lookup(&[
            ("TRANSLATOR_ENDPOINT", "http://localhost:9000/"),
            ("REQUEST_TIMEOUT_MS", "2500"),
        ]))
        .unwrap();
        assert_eq!(config.api_endpoint, "http://localhost:9000");
        assert_eq!(config.timeout_ms, Some(2500));
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(ProxyConfig::from_lookup(lookup(&[("REQUEST_TIMEOUT_MS", "soon")])).is_err());
    }
}
