//! Slider control
//!
//! A one-dimensional slider holding a normalized value in `[0, 1]`.
//!
//! - Click anywhere on the track to jump the knob there
//! - Grab the knob to drag it without it snapping under the pointer
//! - Orientation follows the bounds: wider than tall is horizontal,
//!   anything else is vertical with the high end at the top
//!
//! Knob size and placement come from the theme on every call; the slider only
//! remembers its value and the in-progress drag.
//!
//! # Example
//!
//! ```rust
//! use glide_core::{ButtonEvent, Point, Rect, Window};
//! use glide_theme::FlatTheme;
//! use glide_widgets::{Context, Slider, Widget};
//!
//! struct Host;
//! impl Window for Host {
//!     fn request_redraw(&self) {}
//! }
//!
//! let theme = FlatTheme::default();
//! let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
//! let ctx = Context::new(&Host, &theme, bounds);
//!
//! let mut slider = Slider::with_value(0.5);
//!
//! // Grab the knob at its center and drag it to the far end
//! slider.click(&ctx.with_cursor(Point::new(50.0, 10.0)), ButtonEvent::pressed());
//! slider.drag(&ctx.with_cursor(Point::new(95.0, 10.0)), ButtonEvent::pressed());
//! assert_eq!(slider.value(), 1.0);
//! ```

use glide_core::{ButtonEvent, DrawContext, Point, Size};

use crate::context::Context;
use crate::widget::{Limits, Widget, FULL_EXTENT};

/// Smallest footprint a slider accepts during layout
const MIN_SIZE: f64 = 16.0;

/// Slider widget
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slider {
    /// Normalized position, always within [0, 1]
    value: f64,
    /// A press landed on this slider and the button is still held
    tracking: bool,
    /// Pointer offset from the knob center at press time
    offset: Point,
    /// Whether pointer input moved the value (cleared after reading)
    changed: bool,
}

impl Slider {
    /// Create a slider at value 0
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slider at an initial value (clamped to [0, 1])
    pub fn with_value(value: f64) -> Self {
        Self {
            value: clamp_unit(value),
            ..Self::default()
        }
    }

    /// Current normalized value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value programmatically (clamped to [0, 1]).
    ///
    /// Does not flag a change; [`Slider::take_changed`] only reports
    /// pointer-driven updates.
    pub fn set_value(&mut self, value: f64) {
        self.value = clamp_unit(value);
    }

    /// Whether a drag is in progress
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Grab offset recorded by the last press
    pub fn grab_offset(&self) -> Point {
        self.offset
    }

    /// Check if pointer input changed the value and clear the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Recompute the value from the cursor position
    fn reposition(&mut self, ctx: &Context<'_>) {
        let bounds = ctx.bounds;
        // Subtract the grab offset so the knob keeps its distance to the
        // pointer instead of jumping under it.
        let p = ctx.cursor_pos() - self.offset;
        // Inset by the knob radius: the center never reaches the outer edge.
        let radius = ctx.theme().slider_knob_position(self.value, bounds).radius;

        let horizontal = bounds.is_landscape();
        let value = if horizontal {
            let x = bounds.left() + radius;
            travel_fraction(p.x - x, bounds.width() - radius * 2.0)
        } else {
            let y = bounds.top() + radius;
            1.0 - travel_fraction(p.y - y, bounds.height() - radius * 2.0)
        };

        let previous = self.value;
        self.value = clamp_unit(value);
        if self.value != previous {
            self.changed = true;
        }

        tracing::trace!(
            "Slider reposition: horizontal={} radius={} value {} -> {}",
            horizontal,
            radius,
            previous,
            self.value
        );

        ctx.window.request_redraw();
    }
}

impl Widget for Slider {
    fn limits(&self, _ctx: &Context<'_>) -> Limits {
        Limits::new(
            Size::new(MIN_SIZE, MIN_SIZE),
            Size::new(FULL_EXTENT, FULL_EXTENT),
        )
    }

    fn hit_test(&mut self, ctx: &Context<'_>, p: Point) -> Option<&mut dyn Widget> {
        if ctx.bounds.contains(p) {
            Some(self)
        } else {
            None
        }
    }

    fn draw(&self, ctx: &Context<'_>, canvas: &mut dyn DrawContext) {
        ctx.theme().draw_slider(canvas, self.value, ctx.bounds);
    }

    fn click(&mut self, ctx: &Context<'_>, btn: ButtonEvent) -> Option<&mut dyn Widget> {
        let p = ctx.cursor_pos();
        let knob = ctx.theme().slider_knob_position(self.value, ctx.bounds);
        self.tracking = btn.is_pressed;

        // Pressing on the knob records where it was grabbed; pressing on the
        // track leaves no offset so the knob jumps to the pointer.
        self.offset = if knob.bounds().contains(p) {
            p - knob.center
        } else {
            Point::ZERO
        };

        tracing::debug!(
            "Slider {}: cursor=({}, {}) offset=({}, {})",
            if btn.is_pressed { "press" } else { "release" },
            p.x,
            p.y,
            self.offset.x,
            self.offset.y
        );

        self.reposition(ctx);
        Some(self)
    }

    fn drag(&mut self, ctx: &Context<'_>, _btn: ButtonEvent) {
        if self.tracking {
            self.reposition(ctx);
        }
    }

    fn is_control(&self) -> bool {
        true
    }
}

/// Fraction of the usable travel covered by `offset`, in [0, 1].
///
/// With no usable travel (the control is no longer than the knob) the
/// position saturates toward the side the pointer is on.
fn travel_fraction(offset: f64, span: f64) -> f64 {
    if span > 0.0 {
        let fraction = offset / span;
        if fraction.is_finite() {
            return fraction.clamp(0.0, 1.0);
        }
    }
    if offset > 0.0 {
        1.0
    } else {
        0.0
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
