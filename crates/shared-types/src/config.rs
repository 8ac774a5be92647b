use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::fabric::DEFAULT_PAGE_SIZE;

/// Debounce applied to search input when none is configured.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Backend used when none is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Top-level config file structure matching `config.toml`.
///
/// Every field defaults, so a missing or partial file still yields a
/// working configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

/// Where the marketplace API lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    #[serde(default = "default_api_base")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_api_base(),
        }
    }
}

impl ApiSettings {
    /// Join an absolute API path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

/// Fabric-library search tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
