//! Runtime configuration, read from `STOREFRONT_*` environment variables.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use storefront_catalog::DEFAULT_PAGE_SIZE;
use storefront_orders::DEFAULT_TRANSACTIONS_PAGE_SIZE;

pub const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:1337";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name} value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Products per catalog page.
    pub page_size: usize,
    /// Rows per page in the transaction browser.
    pub transactions_page_size: usize,
    /// Saved CMS product listing; the demo catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    /// Prefix for relative CMS media URLs.
    pub asset_base_url: String,
    pub bcrypt_cost: u32,
    pub log_json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            transactions_page_size: DEFAULT_TRANSACTIONS_PAGE_SIZE,
            catalog_path: None,
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            bcrypt_cost: bcrypt_default_cost(),
            log_json: false,
        }
    }
}

fn bcrypt_default_cost() -> u32 {
    storefront_auth::PasswordHasher::default().cost()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            page_size: match get("STOREFRONT_PAGE_SIZE") {
                Some(v) => parse_page_size("STOREFRONT_PAGE_SIZE", v)?,
                None => defaults.page_size,
            },
            transactions_page_size: match get("STOREFRONT_TRANSACTIONS_PAGE_SIZE") {
                Some(v) => parse_page_size("STOREFRONT_TRANSACTIONS_PAGE_SIZE", v)?,
                None => defaults.transactions_page_size,
            },
            catalog_path: get("STOREFRONT_CATALOG_PATH").map(PathBuf::from),
            asset_base_url: get("STOREFRONT_ASSET_BASE_URL").unwrap_or(defaults.asset_base_url),
            bcrypt_cost: match get("STOREFRONT_BCRYPT_COST") {
                Some(v) => parse_bcrypt_cost(v)?,
                None => defaults.bcrypt_cost,
            },
            log_json: match get("STOREFRONT_LOG_JSON") {
                Some(v) => parse_bool("STOREFRONT_LOG_JSON", v)?,
                None => defaults.log_json,
            },
        })
    }
}

fn parse_page_size(name: &'static str, value: String) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::Invalid {
            name,
            value,
            reason: "must be at least 1",
        }),
        Ok(n) => Ok(n),
        Err(_) => Err(ConfigError::Invalid {
            name,
            value,
            reason: "expected a positive integer",
        }),
    }
}

fn parse_bcrypt_cost(value: String) -> Result<u32, ConfigError> {
    match value.trim().parse::<u32>() {
        Ok(cost) if (4..=31).contains(&cost) => Ok(cost),
        _ => Err(ConfigError::Invalid {
            name: "STOREFRONT_BCRYPT_COST",
            value,
            reason: "expected an integer between 4 and 31",
        }),
    }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            value,
            reason: "expected true or false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.page_size, 12);
        assert_eq!(cfg.transactions_page_size, 10);
        assert_eq!(cfg.asset_base_url, "http://localhost:1337");
        assert_eq!(cfg.catalog_path, None);
        assert!(!cfg.log_json);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = config(&[
            ("STOREFRONT_PAGE_SIZE", "24"),
            ("STOREFRONT_TRANSACTIONS_PAGE_SIZE", "5"),
            ("STOREFRONT_CATALOG_PATH", "/tmp/products.json"),
            ("STOREFRONT_ASSET_BASE_URL", "https://cms.example.com"),
            ("STOREFRONT_BCRYPT_COST", "4"),
            ("STOREFRONT_LOG_JSON", "true"),
        ])
        .unwrap();
        assert_eq!(cfg.page_size, 24);
        assert_eq!(cfg.transactions_page_size, 5);
        assert_eq!(cfg.catalog_path, Some(PathBuf::from("/tmp/products.json")));
        assert_eq!(cfg.asset_base_url, "https://cms.example.com");
        assert_eq!(cfg.bcrypt_cost, 4);
        assert!(cfg.log_json);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = config(&[("STOREFRONT_PAGE_SIZE", "  "), ("STOREFRONT_CATALOG_PATH", "")]).unwrap();
        assert_eq!(cfg.page_size, 12);
        assert_eq!(cfg.catalog_path, None);
    }

    #[test]
    fn invalid_values_are_rejected() {
        match config(&[("STOREFRONT_PAGE_SIZE", "0")]) {
            Err(ConfigError::Invalid { name, .. }) => assert_eq!(name, "STOREFRONT_PAGE_SIZE"),
            other => panic!("Expected Invalid error, got {other:?}"),
        }
        assert!(config(&[("STOREFRONT_TRANSACTIONS_PAGE_SIZE", "ten")]).is_err());
        assert!(config(&[("STOREFRONT_BCRYPT_COST", "3")]).is_err());
        assert!(config(&[("STOREFRONT_LOG_JSON", "maybe")]).is_err());
    }
}
