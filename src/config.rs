//! Engine configuration persistence
//!
//! Stores user preferences in `~/.config/dsv-edit/config.yaml`

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dsv::{Dialect, MemoryLog, ModelOptions, DEFAULT_HISTORY_DEPTH};

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsvConfig {
    /// Dialect to open files with; detected from the file extension when unset
    #[serde(default)]
    pub dialect: Option<Dialect>,
    /// Number of undo steps kept in memory
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// How long an edit waits for the background re-parse
    #[serde(default = "default_barrier_timeout_ms")]
    pub barrier_timeout_ms: u64,
    /// Cell separator of pasted text
    #[serde(default = "default_paste_separator")]
    pub paste_separator: char,
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

fn default_barrier_timeout_ms() -> u64 {
    500
}

fn default_paste_separator() -> char {
    '\t'
}

impl Default for DsvConfig {
    fn default() -> Self {
        Self {
            dialect: None,
            history_depth: default_history_depth(),
            barrier_timeout_ms: default_barrier_timeout_ms(),
            paste_separator: default_paste_separator(),
        }
    }
}

impl DsvConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
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

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

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

    /// Model tunables derived from this config
    pub fn model_options(&self) -> ModelOptions {
        let paste_separator = if self.paste_separator.is_ascii() {
            self.paste_separator as u8
        } else {
            tracing::warn!(
                "Paste separator {:?} is not ASCII, using tab",
                self.paste_separator
            );
            b'\t'
        };
        ModelOptions {
            barrier_timeout: Duration::from_millis(self.barrier_timeout_ms),
            paste_separator,
        }
    }

    /// Empty transaction log sized by `history_depth`
    pub fn history(&self) -> MemoryLog {
        MemoryLog::new(self.history_depth)
    }
}
