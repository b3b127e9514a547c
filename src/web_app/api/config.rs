// web_app/api/config.rs - Remote API configuration
//
// Settings come from the environment (optionally via a `.env` file).

use std::env;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com/products";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DUMMYJSON_BASE_URL must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("DUMMYJSON_TIMEOUT_SECS must be a positive integer, got '{0}'")]
    InvalidTimeout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Products collection root, e.g. `https://dummyjson.com/products`
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl CatalogConfig {
    /// Load from `DUMMYJSON_BASE_URL` and `DUMMYJSON_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_values(
            env::var("DUMMYJSON_BASE_URL").ok(),
            env::var("DUMMYJSON_TIMEOUT_SECS").ok(),
        )
    }

    pub fn from_values(
        base_url: Option<String>,
        timeout: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            let url = url.trim().trim_end_matches('/').to_string();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidBaseUrl(url));
            }
            config.base_url = url;
        }

        if let Some(raw) = timeout.filter(|t| !t.trim().is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::from_values(None, None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let base = Some("http://localhost:8080/products/".to_string());
        let config = CatalogConfig::from_values(base, None).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/products");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            CatalogConfig::from_values(Some("ftp://example.com".to_string()), None),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            CatalogConfig::from_values(None, Some("0".to_string())),
            Err(ConfigError::InvalidTimeout(_))
        ));
        assert!(matches!(
            CatalogConfig::from_values(None, Some("soon".to_string())),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }
}
