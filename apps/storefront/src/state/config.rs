//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Config file (`--config <path>` or `<config dir>/storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Example
//! ```toml
//! [storage]
//! dir = "/var/lib/storefront"
//! cart_key = "@storefront:cart"
//!
//! [catalog]
//! base_url = "http://localhost:3333"
//! timeout_secs = 10
//!
//! [currency]
//! symbol = "R$ "
//! decimal_separator = ","
//! thousands_separator = "."
//! ```
//!
//! Configuration is read-only after startup.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use storefront_catalog::CatalogConfig;
use storefront_core::{Money, DEFAULT_CART_KEY};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub currency: CurrencySettings,
}

/// Where the cart is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory for the cart file. Default: the platform data directory.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Storage key for the cart slot.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_cart_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            dir: None,
            cart_key: default_cart_key(),
        }
    }
}

/// How prices are displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencySettings {
    pub symbol: String,
    pub decimal_separator: String,
    pub thousands_separator: String,
}

impl Default for CurrencySettings {
    /// US dollars: `$1,234.56`.
    fn default() -> Self {
        CurrencySettings {
            symbol: "$".to_string(),
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
        }
    }
}

impl CurrencySettings {
    /// Formats an amount, e.g. `$1,234.56` or `-$0.05`.
    pub fn format(&self, money: Money) -> String {
        let cents = money.cents();
        let whole = (cents / 100).unsigned_abs();
        let frac = (cents % 100).unsigned_abs();

        format!(
            "{}{}{}{}{:02}",
            if cents < 0 { "-" } else { "" },
            self.symbol,
            group_thousands(whole, &self.thousands_separator),
            self.decimal_separator,
            frac
        )
    }
}

fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Loading
// =============================================================================

impl AppConfig {
    /// Loads configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `path` must exist. The default path is optional.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => {
                    debug!("No config file, using defaults");
                    AppConfig::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML config file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoadFailed(format!("{}: {}", path.display(), e)))?;
        let config: AppConfig = toml::from_str(&contents)?;
        info!(?path, "Config file loaded");
        Ok(config)
    }

    /// Writes the config as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Applies `STOREFRONT_*` environment variables.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_DATA_DIR`: cart storage directory
    /// - `STOREFRONT_CART_KEY`: cart storage key
    /// - `STOREFRONT_CATALOG_URL`: catalog base URL
    /// - `STOREFRONT_CATALOG_TIMEOUT`: request timeout in seconds
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("STOREFRONT_DATA_DIR") {
            self.storage.dir = Some(PathBuf::from(dir));
        }

        if let Some(key) = lookup("STOREFRONT_CART_KEY") {
            self.storage.cart_key = key;
        }

        if let Some(url) = lookup("STOREFRONT_CATALOG_URL") {
            self.catalog.base_url = url;
        }

        if let Some(timeout) = lookup("STOREFRONT_CATALOG_TIMEOUT") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.catalog.timeout_secs = Some(secs),
                Err(_) => debug!(%timeout, "Ignoring unparsable STOREFRONT_CATALOG_TIMEOUT"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        if self.storage.cart_key.trim().is_empty() {
            return Err(AppError::InvalidConfig("storage.cart_key cannot be empty".into()));
        }

        self.catalog.validate()?;
        Ok(())
    }

    /// Returns the cart storage directory.
    ///
    /// ## Platform-Specific Paths
    /// - **macOS**: `~/Library/Application Support/com.storefront.cart`
    /// - **Windows**: `%APPDATA%\storefront\cart\data`
    /// - **Linux**: `~/.local/share/cart`
    pub fn data_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.storage.dir {
            return Ok(dir.clone());
        }

        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(AppError::NoDataDir)
    }
}

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "storefront", "cart")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage.cart_key, "@storefront:cart");
        assert_eq!(config.catalog.base_url, "http://localhost:3333");
        assert_eq!(config.catalog.timeout_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let usd = CurrencySettings::default();
        assert_eq!(usd.format(Money::from_cents(1234)), "$12.34");
        assert_eq!(usd.format(Money::from_cents(123_456_789)), "$1,234,567.89");
        assert_eq!(usd.format(Money::from_cents(1)), "$0.01");
        assert_eq!(usd.format(Money::from_cents(0)), "$0.00");
        assert_eq!(usd.format(Money::from_cents(-5)), "-$0.05");

        let brl = CurrencySettings {
            symbol: "R$ ".to_string(),
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
        };
        assert_eq!(brl.format(Money::from_price(1799.9)), "R$ 1.799,90");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [catalog]
            timeout_secs = 5

            [currency]
            symbol = "€"
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.base_url, "http://localhost:3333");
        assert_eq!(config.catalog.timeout_secs, Some(5));
        assert_eq!(config.currency.symbol, "€");
        assert_eq!(config.currency.decimal_separator, ".");
        assert_eq!(config.storage.cart_key, "@storefront:cart");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("STOREFRONT_DATA_DIR", "/tmp/cart"),
            ("STOREFRONT_CART_KEY", "@shop:cart"),
            ("STOREFRONT_CATALOG_URL", "http://catalog:8080"),
            ("STOREFRONT_CATALOG_TIMEOUT", "7"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.storage.dir, Some(PathBuf::from("/tmp/cart")));
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/cart"));
        assert_eq!(config.storage.cart_key, "@shop:cart");
        assert_eq!(config.catalog.base_url, "http://catalog:8080");
        assert_eq!(config.catalog.timeout_secs, Some(7));
    }

    #[test]
    fn test_bad_timeout_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(|name| {
            (name == "STOREFRONT_CATALOG_TIMEOUT").then(|| "soon".to_string())
        });
        assert_eq!(config.catalog.timeout_secs, None);
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.storage.cart_key = "  ".to_string();
        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));

        let mut config = AppConfig::default();
        config.catalog.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(AppError::Catalog(_))));

        let mut config = AppConfig::default();
        config.catalog.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_round_trip_and_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf").join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.storage.dir = Some(dir.path().join("data"));
        config.catalog.timeout_secs = Some(3);
        config.save(&path).unwrap();

        assert_eq!(AppConfig::from_file(&path).unwrap(), config);

        let missing = AppConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(AppError::ConfigLoadFailed(_))));

        std::fs::write(&path, "[catalog\n").unwrap();
        assert!(matches!(
            AppConfig::from_file(&path),
            Err(AppError::ConfigLoadFailed(_))
        ));
    }
}
