//! Theme collaborator contract

use glide_core::{Circle, DrawContext, Point, Rect};

/// Knob geometry for a slider at a given value
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KnobPosition {
    /// Knob center in window coordinates
    pub center: Point,
    /// Knob radius
    pub radius: f64,
}

impl KnobPosition {
    pub const fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Bounding square of the knob, used for grab detection
    pub fn bounds(&self) -> Rect {
        Circle::new(self.center, self.radius).bounds()
    }
}

/// Visual metrics and painting for controls.
///
/// `slider_knob_position` must be a pure function of `(value, bounds)`:
/// sliders invert it while dragging, so two calls with the same arguments
/// have to agree.
pub trait Theme {
    /// Paint a slider at `value` (normalized) inside `bounds`
    fn draw_slider(&self, canvas: &mut dyn DrawContext, value: f64, bounds: Rect);

    /// Knob center and radius for a slider at `value` inside `bounds`
    fn slider_knob_position(&self, value: f64, bounds: Rect) -> KnobPosition;
}
