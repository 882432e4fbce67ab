//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use crate::tools::ToolKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing defaults applied when a session starts.
///
/// Users can change these values at runtime through the drawing actions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default stroke color: `#rgb`/`#rrggbb` hex, a named color (black, white,
    /// red, green, blue) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default brush size in pixels (valid range: 1 - 50)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,

    /// Canvas background: hex, black or white
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Tool selected at startup
    #[serde(default = "default_tool")]
    pub default_tool: ToolKind,

    /// Skip zero-length lines and zero-radius circles instead of recording them
    #[serde(default)]
    pub suppress_degenerate_shapes: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_brush_size: default_brush_size(),
            background: default_background(),
            default_tool: default_tool(),
            suppress_degenerate_shapes: false,
        }
    }
}

/// Canvas dimensions used for export.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Width in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Height in pixels (valid range: 1 - 16384)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Undo/redo settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryConfig {
    /// Number of snapshots kept; the oldest is dropped past this (valid range: 1 - 500)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory for drawings saved without an explicit path (supports `~`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template with chrono format specifiers, without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,

    /// Format for generated filenames: "png" or "ps"
    #[serde(default = "default_export_format")]
    pub format: ExportFormat,

    /// Retry as PostScript when the raster export fails
    #[serde(default = "default_postscript_fallback")]
    pub postscript_fallback: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
            format: default_export_format(),
            postscript_fallback: default_postscript_fallback(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("#FFFFFF".to_string())
}

fn default_tool() -> ToolKind {
    ToolKind::Oval
}

fn default_canvas_width() -> u32 {
    800
}

fn default_canvas_height() -> u32 {
    600
}

fn default_max_depth() -> usize {
    crate::history::DEFAULT_MAX_DEPTH
}

fn default_save_directory() -> String {
    "~/Pictures/Easel".to_string()
}

fn default_filename_template() -> String {
    "drawing_%Y-%m-%d_%H%M%S".to_string()
}

fn default_export_format() -> ExportFormat {
    ExportFormat::Png
}

fn default_postscript_fallback() -> bool {
    true
}
