//! Glide Theme System
//!
//! Themes own every visual metric of a control: where the slider knob sits
//! for a given value, how large it is, and how the track is painted. Widgets
//! only consult the [`Theme`] trait, so swapping skins never touches
//! interaction code.
//!
//! # Example
//!
//! ```rust
//! use glide_core::{Rect, RecordingContext};
//! use glide_theme::{FlatTheme, Theme};
//!
//! let theme = FlatTheme::default();
//! let bounds = Rect::new(0.0, 0.0, 100.0, 20.0);
//!
//! let knob = theme.slider_knob_position(0.5, bounds);
//! assert_eq!(knob.radius, 5.0);
//! assert_eq!(knob.center.x, 50.0);
//!
//! let mut canvas = RecordingContext::new();
//! theme.draw_slider(&mut canvas, 0.5, bounds);
//! assert!(!canvas.commands().is_empty());
//! ```

mod config;
mod error;
mod flat;
mod theme;

pub use config::{SliderStyle, ThemeConfig};
pub use error::{Result, ThemeError};
pub use flat::FlatTheme;
pub use theme::{KnobPosition, Theme};
