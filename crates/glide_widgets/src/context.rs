//! Per-call widget context
//!
//! The hosting tree builds a [`Context`] for every call into a widget. It
//! carries the widget's current bounds, the pointer position, and borrowed
//! access to the theme and window. Widgets must not hold on to any of it
//! between calls: bounds can change on every layout pass.

use glide_core::{Point, Rect, Window};
use glide_theme::Theme;

/// Borrowed environment for a single widget call
#[derive(Clone, Copy)]
pub struct Context<'a> {
    /// Widget bounds in window coordinates
    pub bounds: Rect,
    /// Window the widget lives in
    pub window: &'a dyn Window,
    theme: &'a dyn Theme,
    cursor: Point,
}

impl<'a> Context<'a> {
    /// Create a context with the cursor at the origin
    pub fn new(window: &'a dyn Window, theme: &'a dyn Theme, bounds: Rect) -> Self {
        Self {
            bounds,
            window,
            theme,
            cursor: Point::ZERO,
        }
    }

    /// Set the cursor position
    pub fn with_cursor(mut self, cursor: Point) -> Self {
        self.cursor = cursor;
        self
    }

    /// Set the bounds
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Current pointer position in window coordinates
    pub fn cursor_pos(&self) -> Point {
        self.cursor
    }

    /// Theme used for metrics and painting
    pub fn theme(&self) -> &'a dyn Theme {
        self.theme
    }
}

impl std::fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("bounds", &self.bounds)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}
