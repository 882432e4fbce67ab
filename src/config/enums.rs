//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a hex string, a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Hex or named color
/// default_color = "#1e90ff"
/// background = "black"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// `#rgb` / `#rrggbb` hex, or a named color
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Renders the color in the string form drawing settings validate.
    ///
    /// RGB arrays become `#rrggbb`; names and hex strings pass through as written.
    pub fn to_setting_string(&self) -> String {
        match self {
            ColorSpec::Name(name) => name.clone(),
            ColorSpec::Rgb([r, g, b]) => format!("#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        ColorSpec::Name(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_spec_formats_as_hex() {
        assert_eq!(ColorSpec::Rgb([255, 128, 0]).to_setting_string(), "#ff8000");
        assert_eq!(ColorSpec::from("blue").to_setting_string(), "blue");
    }

    #[test]
    fn color_spec_deserializes_either_form() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: ColorSpec,
        }

        let named: Wrapper = toml::from_str("color = \"#abc\"").unwrap();
        assert_eq!(named.color, ColorSpec::Name("#abc".to_string()));
        let rgb: Wrapper = toml::from_str("color = [1, 2, 3]").unwrap();
        assert_eq!(rgb.color, ColorSpec::Rgb([1, 2, 3]));
    }
}
