//! # Quote Client Configuration
//!
//! Where the quote request goes and how long it may take.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FREIGHT_API_ENDPOINT=https://staging.example/api/frete             │
//! │     FREIGHT_API_TIMEOUT_SECS=10                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/freight-quote/quote.toml (Linux)                         │
//! │     ~/Library/Application Support/com.freight.quote/quote.toml (macOS) │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Production endpoint, 30 second timeout                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # quote.toml
//! [api]
//! endpoint = "https://aromasraizesapi.vercel.app/api/frete"
//! timeout_secs = 30
//! user_agent = "freight-quote/0.1.0"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

/// Production quoting endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://aromasraizesapi.vercel.app/api/frete";

// =============================================================================
// API Settings
// =============================================================================

/// Settings for the quoting endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Full URL the quote request is POSTed to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout (seconds), covering connect and body.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("freight-quote/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete quote client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Quoting endpoint settings.
    #[serde(default)]
    pub api: ApiSettings,
}

impl QuoteConfig {
    /// Creates a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config pointing at a specific endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        QuoteConfig {
            api: ApiSettings {
                endpoint: endpoint.into(),
                ..ApiSettings::default()
            },
        }
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (quote.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading quote config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load quote config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document.
    pub fn from_toml(contents: &str) -> ClientResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Quote config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.api.endpoint)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ClientError::InvalidUrl(format!(
                "Endpoint must use http:// or https://, got: {}",
                self.api.endpoint
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("FREIGHT_API_ENDPOINT") {
            debug!(endpoint = %endpoint, "Overriding endpoint from environment");
            self.api.endpoint = endpoint;
        }

        if let Some(timeout) = lookup("FREIGHT_API_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(timeout = %timeout, "Ignoring non-numeric timeout in environment"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "freight", "quote")
            .map(|dirs| dirs.config_dir().join("quote.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.api.endpoint
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = QuoteConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.api.user_agent.starts_with("freight-quote/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = QuoteConfig::with_endpoint("ftp://example.com/frete");
        assert!(matches!(config.validate(), Err(ClientError::InvalidUrl(_))));

        config.api.endpoint = "not a url".into();
        assert!(matches!(config.validate(), Err(ClientError::InvalidUrl(_))));

        config.api.endpoint = "http://localhost:8080/api/frete".into();
        assert!(config.validate().is_ok());

        config.api.timeout_secs = 0;
        assert!(matches!(config.validate(), Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = QuoteConfig::from_toml("[api]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);

        let empty = QuoteConfig::from_toml("").unwrap();
        assert_eq!(empty, QuoteConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            QuoteConfig::from_toml("[api]\ntimeout_secs = \"soon\"\n"),
            Err(ClientError::ConfigLoadFailed(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("FREIGHT_API_ENDPOINT", "http://127.0.0.1:9000/frete"),
            ("FREIGHT_API_TIMEOUT_SECS", "7"),
        ]
        .into_iter()
        .collect();

        let mut config = QuoteConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.endpoint(), "http://127.0.0.1:9000/frete");
        assert_eq!(config.api.timeout_secs, 7);
    }

    #[test]
    fn test_bad_timeout_override_is_ignored() {
        let mut config = QuoteConfig::default();
        config.apply_overrides(|key| (key == "FREIGHT_API_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_toml_serialization() {
        let config = QuoteConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("endpoint"));
    }
}
