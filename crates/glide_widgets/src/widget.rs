//! Widget capability trait

use glide_core::{ButtonEvent, DrawContext, Point, Size};

use crate::context::Context;

/// Unbounded extent for layout limits
pub const FULL_EXTENT: f64 = f64::INFINITY;

/// Size range a widget accepts during layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limits {
    pub min: Size,
    pub max: Size,
}

impl Limits {
    pub const fn new(min: Size, max: Size) -> Self {
        Self { min, max }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min: Size::ZERO,
            max: Size::new(FULL_EXTENT, FULL_EXTENT),
        }
    }
}

/// Capabilities a widget exposes to the hosting tree.
///
/// The tree owns layout and dispatch: it computes each widget's bounds, builds
/// a [`Context`] for the call, and forwards pointer events to whichever
/// widget claimed the press. Defaults describe a passive widget.
pub trait Widget {
    /// Layout limits
    fn limits(&self, _ctx: &Context<'_>) -> Limits {
        Limits::default()
    }

    /// Return the widget under `p`, if any
    fn hit_test(&mut self, ctx: &Context<'_>, p: Point) -> Option<&mut dyn Widget>;

    /// Paint the widget
    fn draw(&self, ctx: &Context<'_>, canvas: &mut dyn DrawContext);

    /// Handle a button press or release. Returning a widget claims the
    /// pointer: subsequent drags and the release go to it.
    fn click(&mut self, _ctx: &Context<'_>, _btn: ButtonEvent) -> Option<&mut dyn Widget> {
        None
    }

    /// Handle pointer movement while a button is held
    fn drag(&mut self, _ctx: &Context<'_>, _btn: ButtonEvent) {}

    /// Whether the widget is an interactive control (takes part in focus
    /// cycling) rather than a passive display element
    fn is_control(&self) -> bool {
        false
    }
}
