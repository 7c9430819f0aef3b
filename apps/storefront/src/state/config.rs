//! # Configuration State
//!
//! Store configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ROCKETSHOES_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use rocketshoes_api::{ApiConfig, ApiError, DEFAULT_TIMEOUT};
use rocketshoes_storage::DEFAULT_STORAGE_KEY;
use thiserror::Error;
use url::Url;

use super::cart::StockPolicy;

/// Configuration errors. Reported by the binary with a non-zero exit code.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL ('{value}'): {reason}")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },

    #[error("{var} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be 'any' or 'requested', got '{value}'")]
    InvalidStockPolicy { var: &'static str, value: String },

    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    #[error("Could not determine app data directory; set ROCKETSHOES_DATA_DIR")]
    NoDataDir,

    #[error("Failed to build API client: {0}")]
    Api(#[from] ApiError),
}

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backend base URL.
    /// Default: http://localhost:3333
    pub api_url: String,

    /// Per-request timeout for catalog and stock calls.
    /// Default: 10 seconds
    pub http_timeout: Duration,

    /// Slot the cart is persisted under.
    /// Default: "@RocketShoes:cart"
    pub storage_key: String,

    /// Directory for the file-backed slot. `None` means the platform data
    /// directory.
    pub data_dir: Option<PathBuf>,

    /// How stock levels gate add and update.
    pub stock_policy: StockPolicy,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Separator between whole units and cents (for display)
    pub decimal_separator: char,
}

impl Default for StoreConfig {
    /// Returns defaults suitable for the local development backend.
    fn default() -> Self {
        StoreConfig {
            api_url: "http://localhost:3333".to_string(),
            http_timeout: DEFAULT_TIMEOUT,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
            stock_policy: StockPolicy::default(),
            currency_symbol: "R$".to_string(),
            decimal_separator: ',',
        }
    }
}

impl StoreConfig {
    pub const API_URL: &'static str = "ROCKETSHOES_API_URL";
    pub const HTTP_TIMEOUT_SECS: &'static str = "ROCKETSHOES_HTTP_TIMEOUT_SECS";
    pub const STORAGE_KEY: &'static str = "ROCKETSHOES_STORAGE_KEY";
    pub const DATA_DIR: &'static str = "ROCKETSHOES_DATA_DIR";
    pub const STOCK_POLICY: &'static str = "ROCKETSHOES_STOCK_POLICY";
    pub const CURRENCY_SYMBOL: &'static str = "ROCKETSHOES_CURRENCY_SYMBOL";

    /// Creates a StoreConfig from environment variables and defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Creates a StoreConfig from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(value) = lookup(Self::API_URL) {
            Url::parse(&value).map_err(|e| ConfigError::InvalidUrl {
                var: Self::API_URL,
                value: value.clone(),
                reason: e.to_string(),
            })?;
            config.api_url = value;
        }

        if let Some(value) = lookup(Self::HTTP_TIMEOUT_SECS) {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    var: Self::HTTP_TIMEOUT_SECS,
                    value: value.clone(),
                })?;
            config.http_timeout = Duration::from_secs(secs);
        }

        if let Some(value) = lookup(Self::STORAGE_KEY) {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty {
                    var: Self::STORAGE_KEY,
                });
            }
            config.storage_key = value;
        }

        if let Some(value) = lookup(Self::DATA_DIR) {
            if !value.is_empty() {
                config.data_dir = Some(PathBuf::from(value));
            }
        }

        if let Some(value) = lookup(Self::STOCK_POLICY) {
            config.stock_policy = match value.trim().to_ascii_lowercase().as_str() {
                "any" => StockPolicy::AnyAvailable,
                "requested" => StockPolicy::CoverRequested,
                _ => {
                    return Err(ConfigError::InvalidStockPolicy {
                        var: Self::STOCK_POLICY,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(Self::CURRENCY_SYMBOL) {
            config.currency_symbol = value;
        }

        Ok(config)
    }

    /// Backend settings for [`rocketshoes_api::ApiClient`].
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        Ok(ApiConfig::new(&self.api_url)?.timeout(self.http_timeout))
    }

    /// Directory for the cart slot.
    ///
    /// ## Per-Platform Paths
    /// - **macOS**: `~/Library/Application Support/com.rocketshoes.rocketshoes`
    /// - **Windows**: `%APPDATA%\rocketshoes\rocketshoes\data`
    /// - **Linux**: `~/.local/share/rocketshoes`
    pub fn resolve_data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        ProjectDirs::from("com", "rocketshoes", "rocketshoes")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(ConfigError::NoDataDir)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use rocketshoes_storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(17990), "R$ 179,90");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let whole = (cents / 100).unsigned_abs();
        let frac = (cents % 100).unsigned_abs();

        format!(
            "{}{} {}{}{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            whole,
            self.decimal_separator,
            frac
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StoreConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.api_url, "http://localhost:3333");
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.storage_key, "@RocketShoes:cart");
        assert_eq!(config.stock_policy, StockPolicy::AnyAvailable);
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("ROCKETSHOES_API_URL", "https://api.rocketshoes.dev"),
            ("ROCKETSHOES_HTTP_TIMEOUT_SECS", "3"),
            ("ROCKETSHOES_STORAGE_KEY", "cart-test"),
            ("ROCKETSHOES_DATA_DIR", "/tmp/rocketshoes"),
            ("ROCKETSHOES_STOCK_POLICY", "requested"),
            ("ROCKETSHOES_CURRENCY_SYMBOL", "US$"),
        ])
        .unwrap();

        assert_eq!(config.api_url, "https://api.rocketshoes.dev");
        assert_eq!(config.http_timeout, Duration::from_secs(3));
        assert_eq!(config.storage_key, "cart-test");
        assert_eq!(
            config.resolve_data_dir().unwrap(),
            PathBuf::from("/tmp/rocketshoes")
        );
        assert_eq!(config.stock_policy, StockPolicy::CoverRequested);
        assert_eq!(config.currency_symbol, "US$");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("ROCKETSHOES_API_URL", "not a url")]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            config_from(&[("ROCKETSHOES_HTTP_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            config_from(&[("ROCKETSHOES_HTTP_TIMEOUT_SECS", "ten")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            config_from(&[("ROCKETSHOES_STOCK_POLICY", "always")]),
            Err(ConfigError::InvalidStockPolicy { .. })
        ));
        assert!(matches!(
            config_from(&[("ROCKETSHOES_STORAGE_KEY", " ")]),
            Err(ConfigError::Empty { .. })
        ));
    }

    #[test]
    fn test_api_config() {
        let config = config_from(&[("ROCKETSHOES_HTTP_TIMEOUT_SECS", "4")]).unwrap();
        let api = config.api_config().unwrap();

        assert_eq!(api.base_url.as_str(), "http://localhost:3333/");
        assert_eq!(api.timeout, Duration::from_secs(4));
    }

    #[test]
    fn test_format_currency() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(17990), "R$ 179,90");
        assert_eq!(config.format_currency(5), "R$ 0,05");
        assert_eq!(config.format_currency(0), "R$ 0,00");
        assert_eq!(config.format_currency(-1234), "-R$ 12,34");
    }
}
