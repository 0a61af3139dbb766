//! Glide Core
//!
//! Foundational primitives shared by the Glide crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` and `Circle` in `f64` pixel space
//! - **Color**: RGBA colors with hex parsing for theme files
//! - **Input**: Pointer button events delivered by the hosting event loop
//! - **Draw Context**: The paint contract themes draw through, plus a recorder
//! - **Window**: The redraw-scheduling contract widgets use after state changes
//!
//! # Example
//!
//! ```rust
//! use glide_core::{DrawCommand, DrawContext, Point, RecordingContext, Color};
//!
//! let mut canvas = RecordingContext::new();
//! canvas.fill_circle(Point::new(10.0, 10.0), 4.0, Color::WHITE);
//!
//! assert!(matches!(
//!     canvas.commands(),
//!     [DrawCommand::FillCircle { radius, .. }] if *radius == 4.0
//! ));
//! ```

pub mod color;
pub mod draw;
pub mod geometry;
pub mod input;
pub mod window;

pub use color::Color;
pub use draw::{DrawCommand, DrawContext, RecordingContext};
pub use geometry::{Circle, Point, Rect, Size};
pub use input::{ButtonEvent, Modifiers, MouseButton};
pub use window::Window;
