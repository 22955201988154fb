//! Widget configuration
//!
//! Stores user preferences in `~/.config/softkeys/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_INDENT;
use crate::layout::DEFAULT_HOVER_SCALE;

/// Keyboard widget configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Layout document to load when none is given on the command line
    #[serde(default)]
    pub layout: Option<PathBuf>,

    /// Character inserted by Tab and removed by left-Tab
    #[serde(default = "default_indent")]
    pub indent: char,

    /// Scale factor of the hover overlay
    #[serde(default = "default_hover_scale")]
    pub hover_scale: f64,

    /// Modifier bits that start out locked (e.g. caps lock already engaged)
    #[serde(default)]
    pub locked_modifiers: u8,
}

fn default_indent() -> char {
    DEFAULT_INDENT
}

fn default_hover_scale() -> f64 {
    DEFAULT_HOVER_SCALE
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            layout: None,
            indent: default_indent(),
            hover_scale: default_hover_scale(),
            locked_modifiers: 0,
        }
    }
}

impl WidgetConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`. Missing or unreadable files fall back to
    /// defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<WidgetConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace values the widget cannot use with their defaults
    fn sanitized(mut self) -> Self {
        if !self.hover_scale.is_finite() || self.hover_scale < 1.0 {
            tracing::warn!(
                hover_scale = self.hover_scale,
                "hover_scale must be at least 1.0, using default"
            );
            self.hover_scale = default_hover_scale();
        }
        if self.indent == '\n' {
            tracing::warn!("indent cannot be a line break, using default");
            self.indent = default_indent();
        }
        self
    }
}
