//! Configuration Management
//!
//! Handles persistent configuration storage for aventura.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default collection endpoint (local json-server).
pub const DEFAULT_API_URL: &str = "http://localhost:3000/aventuras";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Collection endpoint base URL
    #[serde(default)]
    pub api_url: Option<String>,
    /// Last viewed page
    #[serde(default)]
    pub last_page: Option<String>,
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aventura").join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }

    /// Get effective API URL (CLI > config > default)
    pub fn effective_api_url(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Set last viewed page and save
    pub fn set_last_page(&mut self, page: &str) -> Result<()> {
        self.last_page = Some(page.to_string());
        self.save()
    }
}
