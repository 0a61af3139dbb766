//! Draw Context
//!
//! The paint contract themes render through. Backends implement
//! [`DrawContext`] directly; [`RecordingContext`] captures the calls as a
//! command list that can be replayed later or inspected in tests.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Unified 2D painting interface
pub trait DrawContext {
    /// Fill a rectangle, optionally with rounded corners
    fn fill_rect(&mut self, rect: Rect, corner_radius: f64, color: Color);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Stroke the outline of a circle
    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color);
}

/// A recorded drawing command
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        corner_radius: f64,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        width: f64,
        color: Color,
    },
}

/// A draw context that records commands for later replay
#[derive(Clone, Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawContext for RecordingContext {
    fn fill_rect(&mut self, rect: Rect, corner_radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_context() {
        let mut ctx = RecordingContext::new();

        ctx.fill_rect(Rect::new(0.0, 0.0, 10.0, 2.0), 1.0, Color::GRAY);
        ctx.stroke_circle(Point::new(5.0, 1.0), 3.0, 1.0, Color::BLACK);
        assert_eq!(ctx.commands().len(), 2);

        let commands = ctx.take_commands();
        assert!(matches!(commands[0], DrawCommand::FillRect { .. }));
        assert!(matches!(commands[1], DrawCommand::StrokeCircle { width, .. } if width == 1.0));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_clear() {
        let mut ctx = RecordingContext::new();
        ctx.fill_circle(Point::ZERO, 1.0, Color::WHITE);
        ctx.clear();
        assert!(ctx.commands().is_empty());
    }
}
