//! Glide Widget Library
//!
//! Interactive controls for retained-mode widget trees.
//!
//! # Architecture
//!
//! Widgets are plain structs implementing the [`Widget`] capability trait.
//! They keep only their own interaction state; everything else arrives
//! through a [`Context`] built by the hosting tree for each call:
//!
//! 1. **Bounds** computed by layout, re-supplied every time so resizes need
//!    no notification.
//! 2. **Cursor position** at the time of the event.
//! 3. **Theme** for metrics and painting, and the **window** for scheduling
//!    redraws.
//!
//! # Example
//!
//! ```ignore
//! use glide_widgets::prelude::*;
//!
//! let ctx = Context::new(&window, &theme, bounds).with_cursor(pointer);
//!
//! // Dispatch from the host's event loop
//! if let Some(target) = slider.hit_test(&ctx, pointer) {
//!     target.click(&ctx, ButtonEvent::pressed());
//! }
//!
//! if slider.take_changed() {
//!     println!("volume: {}", slider.value());
//! }
//! ```

pub mod context;
pub mod slider;
pub mod widget;

pub use context::Context;
pub use slider::Slider;
pub use widget::{Limits, Widget, FULL_EXTENT};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::context::Context;
    pub use crate::slider::Slider;
    pub use crate::widget::{Limits, Widget};
    pub use glide_core::{ButtonEvent, Point, Rect};
}
