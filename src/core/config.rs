//! Application configuration management

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::view_model::SortDirection;

/// View mode for the preview area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    Markup,
    Rendered,
    #[default]
    Split,
}

/// Application configuration.
///
/// Only durable preferences live here; session state (search query,
/// selection, preview buffer) is discarded on exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog file loaded instead of the embedded one
    pub catalog_path: Option<PathBuf>,
    /// Sort direction applied at startup
    pub default_sort: SortDirection,
    /// Preview view mode applied at startup
    pub view_mode: ViewMode,
    /// UI settings
    pub ui: UiConfig,
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme (light/dark)
    pub theme: String,
    /// Width of the catalog/selection panel
    pub panel_width: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_sort: SortDirection::default(),
            view_mode: ViewMode::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            panel_width: 320.0,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "docforge", "DocForge")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        tracing::info!("Saved config to: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig {
            catalog_path: Some(PathBuf::from("/tmp/notes.json")),
            default_sort: SortDirection::Descending,
            view_mode: ViewMode::Rendered,
            ui: UiConfig {
                theme: "light".to_string(),
                panel_width: 420.0,
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.catalog_path, config.catalog_path);
        assert_eq!(back.default_sort, SortDirection::Descending);
        assert_eq!(back.view_mode, ViewMode::Rendered);
        assert_eq!(back.ui.panel_width, 420.0);
    }

    #[test]
    fn test_view_mode_defaults_to_split() {
        assert_eq!(AppConfig::default().view_mode, ViewMode::Split);
    }
}
