//! Flat theme

use std::path::Path;

use glide_core::{DrawContext, Point, Rect, Size};

use crate::config::{SliderStyle, ThemeConfig};
use crate::error::Result;
use crate::theme::{KnobPosition, Theme};

/// Flat theme: a thin rounded track with a circular knob.
///
/// The knob's diameter is a fixed fraction of the slider's thin dimension, so
/// its radius does not depend on the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatTheme {
    slider: SliderStyle,
}

impl FlatTheme {
    /// Create a theme with a custom slider style
    pub fn new(slider: SliderStyle) -> Self {
        Self { slider }
    }

    /// Create a theme from parsed configuration
    pub fn from_config(config: ThemeConfig) -> Self {
        Self::new(config.slider)
    }

    /// Parse a theme from TOML source
    pub fn from_toml_str(source: &str) -> Result<Self> {
        ThemeConfig::from_toml_str(source).map(Self::from_config)
    }

    /// Load a theme from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded theme from {}", path.display());
        Ok(theme)
    }

    /// Slider style in use
    pub fn slider_style(&self) -> &SliderStyle {
        &self.slider
    }

    fn knob_radius(&self, bounds: Rect) -> f64 {
        bounds.width().min(bounds.height()) / 2.0 * self.slider.knob_scale
    }
}

impl Theme for FlatTheme {
    fn draw_slider(&self, canvas: &mut dyn DrawContext, value: f64, bounds: Rect) {
        let style = &self.slider;
        let knob = self.slider_knob_position(value, bounds);
        let thickness = style.track_thickness;
        let center = bounds.center();
        let track_radius = thickness / 2.0;

        // Track spans the knob's travel, fill runs from the low end to the knob
        let (track, fill) = if bounds.is_landscape() {
            let track = Rect::new(
                bounds.left() + knob.radius,
                center.y - track_radius,
                (bounds.width() - knob.radius * 2.0).max(0.0),
                thickness,
            );
            let fill = Rect::new(
                track.left(),
                track.top(),
                (knob.center.x - track.left()).max(0.0),
                thickness,
            );
            (track, fill)
        } else {
            let track = Rect::new(
                center.x - track_radius,
                bounds.top() + knob.radius,
                thickness,
                (bounds.height() - knob.radius * 2.0).max(0.0),
            );
            let fill = Rect::from_origin_size(
                Point::new(track.left(), knob.center.y),
                Size::new(thickness, (track.bottom() - knob.center.y).max(0.0)),
            );
            (track, fill)
        };

        canvas.fill_rect(track, track_radius, style.track_color);
        canvas.fill_rect(fill, track_radius, style.fill_color);
        canvas.fill_circle(knob.center, knob.radius, style.knob_color);

        if style.knob_outline_width > 0.0 {
            canvas.stroke_circle(
                knob.center,
                knob.radius,
                style.knob_outline_width,
                style.knob_outline_color,
            );
        }
    }

    fn slider_knob_position(&self, value: f64, bounds: Rect) -> KnobPosition {
        let radius = self.knob_radius(bounds);
        let value = value.clamp(0.0, 1.0);

        let center = if bounds.is_landscape() {
            let travel = (bounds.width() - radius * 2.0).max(0.0);
            Point::new(bounds.left() + radius + value * travel, bounds.center().y)
        } else {
            let travel = (bounds.height() - radius * 2.0).max(0.0);
            Point::new(
                bounds.center().x,
                bounds.top() + radius + (1.0 - value) * travel,
            )
        };

        KnobPosition::new(center, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::{Color, DrawCommand, RecordingContext};

    fn horizontal() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 20.0)
    }

    fn vertical() -> Rect {
        Rect::new(10.0, 10.0, 20.0, 100.0)
    }

    #[test]
    fn test_knob_radius_follows_thin_dimension() {
        let theme = FlatTheme::default();
        assert_eq!(theme.slider_knob_position(0.0, horizontal()).radius, 5.0);
        assert_eq!(theme.slider_knob_position(0.0, vertical()).radius, 5.0);

        let big = FlatTheme::new(SliderStyle::default().knob_scale(1.0));
        assert_eq!(big.slider_knob_position(0.3, horizontal()).radius, 10.0);
    }

    #[test]
    fn test_horizontal_knob_travel() {
        let theme = FlatTheme::default();

        let low = theme.slider_knob_position(0.0, horizontal());
        let mid = theme.slider_knob_position(0.5, horizontal());
        let high = theme.slider_knob_position(1.0, horizontal());

        assert_eq!(low.center, Point::new(5.0, 10.0));
        assert_eq!(mid.center, Point::new(50.0, 10.0));
        assert_eq!(high.center, Point::new(95.0, 10.0));
    }

    #[test]
    fn test_vertical_knob_travel_is_inverted() {
        let theme = FlatTheme::default();

        let low = theme.slider_knob_position(0.0, vertical());
        let high = theme.slider_knob_position(1.0, vertical());

        // Value 0 sits at the bottom, value 1 at the top
        assert_eq!(low.center, Point::new(20.0, 105.0));
        assert_eq!(high.center, Point::new(20.0, 15.0));
    }

    #[test]
    fn test_knob_position_clamps_value() {
        let theme = FlatTheme::default();
        assert_eq!(
            theme.slider_knob_position(4.0, horizontal()),
            theme.slider_knob_position(1.0, horizontal())
        );
    }

    #[test]
    fn test_draw_order() {
        let theme = FlatTheme::new(SliderStyle::default().knob_outline(1.0, Color::BLACK));
        let mut canvas = RecordingContext::new();

        theme.draw_slider(&mut canvas, 0.5, horizontal());

        let commands = canvas.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(
            commands[0],
            DrawCommand::FillRect { rect, .. } if rect == Rect::new(5.0, 8.0, 90.0, 4.0)
        ));
        assert!(matches!(
            commands[1],
            DrawCommand::FillRect { rect, .. } if rect == Rect::new(5.0, 8.0, 45.0, 4.0)
        ));
        assert!(matches!(
            commands[2],
            DrawCommand::FillCircle { center, radius, .. }
                if center == Point::new(50.0, 10.0) && radius == 5.0
        ));
        assert!(matches!(commands[3], DrawCommand::StrokeCircle { .. }));
    }

    #[test]
    fn test_vertical_fill_grows_upward() {
        let theme = FlatTheme::default();
        let mut canvas = RecordingContext::new();

        theme.draw_slider(&mut canvas, 1.0, vertical());

        // No outline by default
        assert_eq!(canvas.commands().len(), 3);
        assert!(matches!(
            canvas.commands()[1],
            DrawCommand::FillRect { rect, .. } if rect == Rect::new(18.0, 15.0, 4.0, 90.0)
        ));
    }

    #[test]
    fn test_custom_track_style() {
        let style = SliderStyle::default()
            .track_thickness(6.0)
            .fill_color(Color::WHITE);
        let theme = FlatTheme::new(style);
        let mut canvas = RecordingContext::new();

        theme.draw_slider(&mut canvas, 0.0, horizontal());

        // Empty fill at value 0, track centered on the cross axis
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::FillRect { rect, corner_radius, .. }
                if rect == Rect::new(5.0, 7.0, 90.0, 6.0) && corner_radius == 3.0
        ));
        assert!(matches!(
            canvas.commands()[1],
            DrawCommand::FillRect { rect, color, .. }
                if rect.width() == 0.0 && color == Color::WHITE
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let theme = FlatTheme::from_toml_str("[slider]\nknob_scale = 1.0").unwrap();
        assert_eq!(theme.slider_style().knob_scale, 1.0);
        assert!(FlatTheme::from_toml_str("[slider]\nknob_scale = 2.0").is_err());
    }

    #[test]
    fn test_from_missing_file() {
        let err = FlatTheme::from_file("/nonexistent/glide-theme.toml").unwrap_err();
        assert!(matches!(err, crate::ThemeError::Io(_)));
    }
}
