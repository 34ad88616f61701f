use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{CastqError, Result};
use crate::results_grid::TableWidths;

/// Top-level configuration structure parsed from a TOML file.
///
/// Only display preferences live here; the connection target is fixed at
/// compile time and is deliberately not configurable.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub display: Option<DisplayConfig>,
}

/// Column-width overrides for the rendered tables.
#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    pub actor_id_width: Option<usize>,
    pub first_name_width: Option<usize>,
    pub last_name_width: Option<usize>,
    pub category_id_width: Option<usize>,
    pub category_name_width: Option<usize>,
}

impl Config {
    /// Resolves the configured widths against the built-in defaults.
    pub fn table_widths(&self) -> TableWidths {
        let defaults = TableWidths::default();
        match &self.display {
            Some(display) => TableWidths {
                actor_id: display.actor_id_width.unwrap_or(defaults.actor_id),
                first_name: display.first_name_width.unwrap_or(defaults.first_name),
                last_name: display.last_name_width.unwrap_or(defaults.last_name),
                category_id: display.category_id_width.unwrap_or(defaults.category_id),
                category_name: display.category_name_width.unwrap_or(defaults.category_name),
            },
            None => defaults,
        }
    }
}

/// Default configuration file location under the user's config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("castq").join("config.toml"))
}

/// Loads configuration from a TOML file at the given path.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(&path).map_err(|e| {
        CastqError::Config(format!("failed to read {}: {}", path.as_ref().display(), e))
    })?;
    toml::from_str(&content).map_err(|e| {
        CastqError::Config(format!("failed to parse {}: {}", path.as_ref().display(), e))
    })
}

/// Loads the default configuration file if one exists, otherwise the
/// built-in defaults. A present-but-malformed file is an error rather
/// than silently ignored.
pub fn load_default() -> Result<Config> {
    match default_path() {
        Some(path) if path.exists() => load_config(path),
        _ => Ok(Config::default()),
    }
}
