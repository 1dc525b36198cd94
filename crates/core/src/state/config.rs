//! # Storefront Configuration
//!
//! Layered settings: defaults, then `.storefront/config.json`, then
//! `STOREFRONT_*` environment variables. Command-line flags are applied on
//! top by the binary.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::DEFAULT_PAGE_SIZE;

pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products?limit=100";

const ENV_CATALOG_URL: &str = "STOREFRONT_CATALOG_URL";
const ENV_PAGE_SIZE: &str = "STOREFRONT_PAGE_SIZE";
const ENV_TIMEOUT_SECS: &str = "STOREFRONT_TIMEOUT_SECS";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Endpoint returning `{ "products": [...] }`
    pub catalog_url: String,
    /// Products per catalog page
    pub page_size: usize,
    /// HTTP timeout for the catalog request
    pub request_timeout_secs: u64,
    /// User-Agent header sent with the catalog request
    pub user_agent: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: 10,
            user_agent: format!("storefront/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl StorefrontConfig {
    /// Default location of the config file (`./.storefront/config.json`)
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".storefront")
            .join("config.json")
    }

    /// Load from a JSON file. A missing file yields the defaults; missing keys
    /// keep their default values.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    /// Reject settings the catalog request and pager cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        if self.catalog_url.trim().is_empty() {
            bail!("catalog_url must not be empty");
        }
        Ok(())
    }

    /// Save as pretty JSON, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply `STOREFRONT_*` variables from the process environment
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Numeric values that fail to parse, or are 0, are skipped with a warning.
    pub fn with_env_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_CATALOG_URL).filter(|v| !v.trim().is_empty()) {
            self.catalog_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => self.page_size = size,
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_PAGE_SIZE, raw),
            }
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.request_timeout_secs = secs,
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        self
    }

    pub fn with_catalog_url(mut self, url: impl Into<String>) -> Self {
        self.catalog_url = url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}
