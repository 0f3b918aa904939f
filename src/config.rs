//! Host options and engine preferences
//!
//! - [`TableInit`]/[`TableConfig`]: what the host passes in (camelCase, JSON or YAML)
//! - [`EngineConfig`]: user preferences stored in `~/.config/celltable/config.yaml`

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{Cell, ColumnHeader, Grid, GridError, RowHeader, DEFAULT_HISTORY_LIMIT};

/// Capability flags and size limits supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Table-wide edit switch; per-cell `editable: false` still applies when set
    #[serde(default = "default_true")]
    pub cells_editable: bool,
    #[serde(default)]
    pub can_add_rows: bool,
    #[serde(default)]
    pub can_add_columns: bool,
    #[serde(default)]
    pub can_delete_rows: bool,
    #[serde(default)]
    pub can_delete_columns: bool,
    /// `None` = unbounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_columns: Option<usize>,
    /// Row deletion never goes below `max(min_rows, 1)`
    #[serde(default)]
    pub min_rows: usize,
}

fn default_true() -> bool {
    true
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            cells_editable: true,
            can_add_rows: false,
            can_add_columns: false,
            can_delete_rows: false,
            can_delete_columns: false,
            max_rows: None,
            max_columns: None,
            min_rows: 0,
        }
    }
}

impl TableConfig {
    /// Everything allowed, no limits
    pub fn permissive() -> Self {
        Self {
            can_add_rows: true,
            can_add_columns: true,
            can_delete_rows: true,
            can_delete_columns: true,
            ..Self::default()
        }
    }

    /// Smallest row count deletion may leave
    pub fn row_floor(&self) -> usize {
        self.min_rows.max(1)
    }
}

/// Initial host data: the grid plus its configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInit {
    pub cells: Vec<Vec<Cell>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_headers: Option<Vec<ColumnHeader>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_headers: Option<Vec<RowHeader>>,
    #[serde(flatten)]
    pub config: TableConfig,
}

impl TableInit {
    /// Header-less init from plain values with default flags
    pub fn from_values<S: AsRef<str>>(values: &[Vec<S>]) -> Self {
        Self {
            cells: values
                .iter()
                .map(|row| row.iter().map(|v| Cell::with_value(v.as_ref())).collect())
                .collect(),
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate the cells and headers into a grid
    pub fn into_parts(self) -> Result<(Grid, TableConfig), GridError> {
        let grid = Grid::new(self.cells, self.column_headers, self.row_headers)?;
        Ok((grid, self.config))
    }
}

/// Errors from loading or saving configuration files
#[derive(Debug)]
pub enum ConfigError {
    /// No config directory could be determined
    NoConfigDir,
    Io(std::io::Error),
    Parse(String),
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "No config directory available"),
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

/// Engine preferences that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of undo steps kept
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Bridge copy/paste to the OS clipboard
    #[serde(default = "default_true")]
    pub system_clipboard: bool,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            system_clipboard: true,
        }
    }
}

impl EngineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = crate::config_paths::config_file().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
