use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::task::Priority;

pub const CONFIG_VERSION: u64 = 1;

/// Overrides `api_url` from the config file.
pub const API_URL_ENV: &str = "GARDEN_TASKS_API_URL";

fn default_api_url() -> String {
    "http://localhost:8000".into()
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("garden-tasks")
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct GardenConfig {
    pub version: u64,
    pub api_url: String,
    pub debug_logging: bool,
    /// Priority preselected in the input form.
    pub default_priority: Priority,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            api_url: default_api_url(),
            debug_logging: false,
            default_priority: Priority::Medium,
        }
    }
}

impl GardenConfig {
    pub fn path() -> PathBuf {
        config_dir().join("config.json")
    }

    /// Read the config at `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(format!("Failed to read {}: {}", path.display(), e)),
        };
        serde_json::from_str(&text).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Load the user config, falling back to defaults on any error, then apply
    /// the environment override.
    pub fn load() -> Self {
        let mut config = Self::load_from(&Self::path()).unwrap_or_else(|e| {
            log::warn!("{}; using defaults", e);
            Self::default()
        });
        config.apply_env(std::env::var(API_URL_ENV).ok());
        config
    }

    fn apply_env(&mut self, api_url: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
    }
}
