//! Dashboard Configuration
//!
//! Where the `foods` collection lives and how chatty the console is.
//! Resolution order: an inline `<script id="dashboard-config">` JSON block in
//! `index.html`, then build-time `GO_RESTAURANT_API_URL` / `GO_RESTAURANT_LOG`,
//! then the defaults below.

use log::LevelFilter;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_COLLECTION: &str = "foods";
const CONFIG_ELEMENT_ID: &str = "dashboard-config";
/// `api_url` value that runs against an in-memory collection
pub const MEMORY_BACKEND: &str = "memory";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_url: String,
    pub collection: String,
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn load() -> Self {
        if let Some(raw) = Self::inline_json() {
            match Self::from_json(&raw) {
                Ok(config) => return config,
                Err(err) => log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, err),
            }
        }
        Self::from_build_env()
    }

    /// Defaults overridden by variables set when the bundle was built
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("GO_RESTAURANT_API_URL"),
            option_env!("GO_RESTAURANT_LOG"),
        )
    }

    fn with_overrides(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.filter(|url| !url.is_empty()) {
            config.api_url = url.to_string();
        }
        if let Some(level) = log_level.filter(|level| !level.is_empty()) {
            config.log_level = level.to_string();
        }
        config
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn inline_json() -> Option<String> {
        web_sys::window()?
            .document()?
            .get_element_by_id(CONFIG_ELEMENT_ID)?
            .text_content()
            .filter(|text| !text.trim().is_empty())
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    pub fn uses_memory_backend(&self) -> bool {
        self.api_url == MEMORY_BACKEND
    }

    pub fn describe_backend(&self) -> String {
        if self.uses_memory_backend() {
            "in-memory collection".to_string()
        } else {
            format!("{}/{}", self.api_url.trim_end_matches('/'), self.collection)
        }
    }
}
