//! Validated drawing settings.
//!
//! Stroke color, brush size and canvas background are shared mutable state.
//! Every setter validates its input and silently keeps the previous value on
//! rejection: the return value says whether the write took effect, but a
//! rejected write is never an error.

use crate::config::DrawingConfig;
use crate::draw::{BLACK, Color, WHITE};
use crate::util;
use log::{debug, warn};

/// Smallest accepted brush size.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest accepted brush size.
pub const MAX_BRUSH_SIZE: u32 = 50;
/// Step used by [`DrawingSettings::increase_brush_size`] and its counterpart.
pub const BRUSH_SIZE_STEP: u32 = 2;

const DEFAULT_BRUSH_SIZE: u32 = 5;

/// Named colors accepted for the stroke.
const STROKE_COLOR_NAMES: [&str; 5] = ["black", "white", "red", "green", "blue"];
/// Named colors accepted for the background.
const BACKGROUND_COLOR_NAMES: [&str; 2] = ["black", "white"];

/// Current stroke color, brush size and background color.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSettings {
    color: Color,
    brush_size: u32,
    background: Color,
}

impl Default for DrawingSettings {
    fn default() -> Self {
        Self {
            color: BLACK,
            brush_size: DEFAULT_BRUSH_SIZE,
            background: WHITE,
        }
    }
}

impl DrawingSettings {
    /// Builds settings from the `[drawing]` config section.
    ///
    /// Values go through the regular setters; anything rejected is logged and
    /// the built-in default is kept.
    pub fn from_config(config: &DrawingConfig) -> Self {
        let mut settings = Self::default();

        let color = config.default_color.to_setting_string();
        if !settings.set_color(&color) {
            warn!("Invalid default_color '{color}', keeping {}", settings.color);
        }
        if !settings.set_brush_size(config.default_brush_size as i64) {
            warn!(
                "Invalid default_brush_size {}, keeping {}",
                config.default_brush_size, settings.brush_size
            );
        }
        let background = config.background.to_setting_string();
        if !settings.set_background(&background) {
            warn!(
                "Invalid background '{background}', keeping {}",
                settings.background
            );
        }

        settings
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Accepts `#rgb`/`#rrggbb` hex or one of black, white, red, green, blue.
    pub fn set_color(&mut self, value: &str) -> bool {
        match parse_color(value, &STROKE_COLOR_NAMES) {
            Some(color) => {
                self.color = color;
                true
            }
            None => {
                debug!("Ignoring invalid stroke color '{value}'");
                false
            }
        }
    }

    /// Accepts sizes in `MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE`.
    pub fn set_brush_size(&mut self, size: i64) -> bool {
        match u32::try_from(size) {
            Ok(size) if (MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&size) => {
                self.brush_size = size;
                true
            }
            _ => {
                debug!("Ignoring out-of-range brush size {size}");
                false
            }
        }
    }

    /// Accepts `#rgb`/`#rrggbb` hex or black/white.
    pub fn set_background(&mut self, value: &str) -> bool {
        match parse_color(value, &BACKGROUND_COLOR_NAMES) {
            Some(color) => {
                self.background = color;
                true
            }
            None => {
                debug!("Ignoring invalid background color '{value}'");
                false
            }
        }
    }

    /// Grows the brush by [`BRUSH_SIZE_STEP`], capped at [`MAX_BRUSH_SIZE`].
    pub fn increase_brush_size(&mut self) -> u32 {
        self.brush_size = (self.brush_size + BRUSH_SIZE_STEP).min(MAX_BRUSH_SIZE);
        self.brush_size
    }

    /// Shrinks the brush by [`BRUSH_SIZE_STEP`], floored at [`MIN_BRUSH_SIZE`].
    pub fn decrease_brush_size(&mut self) -> u32 {
        self.brush_size = self
            .brush_size
            .saturating_sub(BRUSH_SIZE_STEP)
            .max(MIN_BRUSH_SIZE);
        self.brush_size
    }
}

/// Parses hex (3 or 6 digits) or one of `names`.
fn parse_color(value: &str, names: &[&str]) -> Option<Color> {
    let value = value.trim();
    if value.starts_with('#') {
        let digits = value.len() - 1;
        if digits == 3 || digits == 6 {
            return Color::from_hex(value);
        }
        return None;
    }

    let lower = value.to_lowercase();
    if names.contains(&lower.as_str()) {
        util::name_to_color(&lower)
    } else {
        None
    }
}
