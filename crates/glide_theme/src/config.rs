//! Theme configuration
//!
//! Themes can be loaded from TOML. Every field is optional; anything left out
//! falls back to the built-in flat style.
//!
//! ```toml
//! [slider]
//! track_thickness = 4.0
//! knob_scale = 0.5
//! knob_outline_width = 1.5
//! track_color = "#3A3A44"
//! fill_color = "#007AFF"
//! knob_color = "#FFFFFF"
//! knob_outline_color = "#00000033"
//! ```

use glide_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Top-level theme file
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub slider: SliderStyle,
}

/// Slider metrics and colors
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderStyle {
    /// Thickness of the track bar across the slider's axis
    pub track_thickness: f64,
    /// Knob diameter as a fraction of the slider's thin dimension, in (0, 1]
    pub knob_scale: f64,
    /// Knob outline width (0 disables the outline)
    pub knob_outline_width: f64,
    /// Unfilled track color
    #[serde(with = "hex_color")]
    pub track_color: Color,
    /// Track color between the low end and the knob
    #[serde(with = "hex_color")]
    pub fill_color: Color,
    /// Knob fill color
    #[serde(with = "hex_color")]
    pub knob_color: Color,
    /// Knob outline color
    #[serde(with = "hex_color")]
    pub knob_outline_color: Color,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_thickness: 4.0,
            knob_scale: 0.5,
            knob_outline_width: 0.0,
            track_color: Color::rgba(0.15, 0.15, 0.2, 1.0),
            fill_color: Color::from_hex(0x007AFF),
            knob_color: Color::WHITE,
            knob_outline_color: Color::rgba(0.0, 0.0, 0.0, 0.2),
        }
    }
}

impl SliderStyle {
    /// Set the track thickness
    pub fn track_thickness(mut self, thickness: f64) -> Self {
        self.track_thickness = thickness;
        self
    }

    /// Set the knob scale
    pub fn knob_scale(mut self, scale: f64) -> Self {
        self.knob_scale = scale;
        self
    }

    /// Set the knob outline width and color
    pub fn knob_outline(mut self, width: f64, color: Color) -> Self {
        self.knob_outline_width = width;
        self.knob_outline_color = color;
        self
    }

    /// Set the filled track color
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Check that every metric is finite and in range
    pub fn validate(&self) -> Result<()> {
        if !self.track_thickness.is_finite() || self.track_thickness < 0.0 {
            return Err(ThemeError::InvalidStyle(format!(
                "track_thickness must be a non-negative number, got {}",
                self.track_thickness
            )));
        }
        if !self.knob_outline_width.is_finite() || self.knob_outline_width < 0.0 {
            return Err(ThemeError::InvalidStyle(format!(
                "knob_outline_width must be a non-negative number, got {}",
                self.knob_outline_width
            )));
        }
        if !(self.knob_scale > 0.0 && self.knob_scale <= 1.0) {
            return Err(ThemeError::InvalidStyle(format!(
                "knob_scale must be in (0, 1], got {}",
                self.knob_scale
            )));
        }
        Ok(())
    }
}

impl ThemeConfig {
    /// Parse and validate a TOML theme
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ThemeConfig = toml::from_str(source)?;
        config.slider.validate()?;
        Ok(config)
    }
}

/// Colors are written as `#RRGGBB` or `#RRGGBBAA` strings
mod hex_color {
    use glide_core::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse_hex(&s).ok_or_else(|| {
            de::Error::custom(format!(
                "invalid color {s:?}, expected #RRGGBB or #RRGGBBAA"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [slider]
            knob_scale = 0.8
            fill_color = "#FF0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.slider.knob_scale, 0.8);
        assert_eq!(config.slider.fill_color, Color::rgb(1.0, 0.0, 0.0));
        // Untouched fields keep their defaults
        assert_eq!(config.slider.track_thickness, 4.0);
        assert_eq!(config.slider.knob_color, Color::WHITE);
    }

    #[test]
    fn test_bad_color_is_a_parse_error() {
        let err = ThemeConfig::from_toml_str(
            r##"
            [slider]
            knob_color = "white"
            "##,
        )
        .unwrap_err();

        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn test_out_of_range_metrics_rejected() {
        for source in [
            "[slider]\nknob_scale = 0.0",
            "[slider]\nknob_scale = 1.5",
            "[slider]\ntrack_thickness = -1.0",
            "[slider]\nknob_outline_width = -0.5",
        ] {
            let err = ThemeConfig::from_toml_str(source).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidStyle(_)), "{source}");
        }
    }

    #[test]
    fn test_serialize_round_trip() {
        let style = SliderStyle::default().knob_outline(2.0, Color::BLACK);
        let config = ThemeConfig { slider: style };

        let source = toml::to_string(&config).unwrap();
        assert!(source.contains("knob_outline_color = \"#000000FF\""));

        let parsed = ThemeConfig::from_toml_str(&source).unwrap();
        assert_eq!(parsed.slider.knob_outline_width, 2.0);
        assert_eq!(parsed.slider.knob_outline_color, Color::BLACK);
    }
}
