use std::path::Path;

use anyhow::{Context, Result};
use filedrop_flow::FlowConfig;
use serde::{Deserialize, Serialize};

/// Host application settings, loaded from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Bundle identifier of the host app.
    pub app_id: String,
    /// Name shown above the content.
    pub app_name: String,
    /// Directory holding the web assets.
    pub web_dir: String,
    /// Download flow settings.
    pub flow: FlowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_id: "com.statusbar.app".to_owned(),
            app_name: "status-bar-overlay".to_owned(),
            web_dir: "dist".to_owned(),
            flow: FlowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read a config file; missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }
}
