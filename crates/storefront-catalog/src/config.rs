//! # Catalog Configuration
//!
//! ```toml
//! [catalog]
//! base_url = "http://localhost:3333"
//! # Unset: requests wait as long as the server takes.
//! timeout_secs = 10
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{CatalogError, CatalogResult};

/// Default catalog location (a local json-server style API).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Catalog client settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Root URL the `products/` and `stock/` paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds. `None` means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

impl CatalogConfig {
    /// Creates a config pointing at `base_url` with no timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        CatalogConfig {
            base_url: base_url.into(),
            timeout_secs: None,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CatalogResult<()> {
        self.parsed_base_url()?;

        if self.timeout_secs == Some(0) {
            return Err(CatalogError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Parses the base URL, guaranteeing a trailing slash so relative paths
    /// join under it instead of replacing its last segment.
    pub fn parsed_base_url(&self) -> CatalogResult<Url> {
        let mut url = Url::parse(&self.base_url)?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CatalogError::InvalidUrl(format!(
                "Catalog URL must start with http:// or https://, got: {}",
                self.base_url
            )));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(url)
    }

    /// Returns the request timeout, if configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.base_url, "http://localhost:3333");
        assert_eq!(config.timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = CatalogConfig::new("http://shop.example.com/api");
        let url = config.parsed_base_url().unwrap();
        assert_eq!(url.as_str(), "http://shop.example.com/api/");
        assert_eq!(
            url.join("stock/4").unwrap().as_str(),
            "http://shop.example.com/api/stock/4"
        );
    }

    #[test]
    fn test_config_validation() {
        assert!(CatalogConfig::new("ftp://example.com").validate().is_err());
        assert!(CatalogConfig::new("not a url").validate().is_err());

        let mut config = CatalogConfig::default();
        config.timeout_secs = Some(0);
        assert!(matches!(
            config.validate(),
            Err(CatalogError::InvalidConfig(_))
        ));
    }
}
