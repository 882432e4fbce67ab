//! Configuration file support for easel.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/easel/config.toml`. Settings include drawing defaults,
//! canvas size, history depth, and export preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, HistoryConfig};

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_SIDE: u32 = 16_384;
const MAX_HISTORY_DEPTH: usize = 500;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_brush_size = 8
/// default_tool = "star"
///
/// [canvas]
/// width = 1024
/// height = 768
///
/// [history]
/// max_depth = 20
///
/// [export]
/// save_directory = "~/Pictures/Easel"
/// postscript_fallback = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing defaults (color, brush size, background, tool)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Undo/redo depth
    #[serde(default)]
    pub history: HistoryConfig,

    /// Export location and format
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps numeric configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    /// Colors are validated later by the drawing settings.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 1 - 50
    /// - `canvas.width` / `canvas.height`: 1 - 16384
    /// - `history.max_depth`: 1 - 500
    ///
    /// An `export.filename_template` chrono cannot format is replaced by the default.
    fn validate_and_clamp(&mut self) {
        use crate::settings::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to {}-{} range",
                self.drawing.default_brush_size,
                MIN_BRUSH_SIZE,
                MAX_BRUSH_SIZE
            );
            self.drawing.default_brush_size = self
                .drawing
                .default_brush_size
                .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }

        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width,
                MAX_CANVAS_SIDE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_SIDE);
        }

        if !(1..=MAX_CANVAS_SIDE).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height,
                MAX_CANVAS_SIDE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_SIDE);
        }

        if !(1..=MAX_HISTORY_DEPTH).contains(&self.history.max_depth) {
            log::warn!(
                "Invalid history max_depth {}, clamping to 1-{} range",
                self.history.max_depth,
                MAX_HISTORY_DEPTH
            );
            self.history.max_depth = self.history.max_depth.clamp(1, MAX_HISTORY_DEPTH);
        }

        if StrftimeItems::new(&self.export.filename_template)
            .any(|item| matches!(item, Item::Error))
        {
            let fallback = ExportConfig::default().filename_template;
            log::warn!(
                "Invalid export filename_template '{}', using '{}'",
                self.export.filename_template,
                fallback
            );
            self.export.filename_template = fallback;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/easel/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("easel");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if a config file already exists at the target path, or
    /// the directory or file cannot be written.
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
