//! Simulated press-and-drag on a horizontal and a vertical slider
//!
//! Run with:
//! ```bash
//! RUST_LOG=glide_widgets=trace cargo run -p glide_widgets --example slider_drag
//! ```
//!
//! Pass a theme file to try a different skin:
//! ```bash
//! cargo run -p glide_widgets --example slider_drag -- theme.toml
//! ```

use std::cell::Cell;

use anyhow::Result;
use glide_core::{ButtonEvent, Point, Rect, RecordingContext, Window};
use glide_theme::{FlatTheme, Theme};
use glide_widgets::{Context, Slider, Widget};
use tracing_subscriber::EnvFilter;

/// Window stand-in that counts redraw requests
#[derive(Default)]
struct DemoWindow {
    redraws: Cell<usize>,
}

impl Window for DemoWindow {
    fn request_redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let theme = match std::env::args().nth(1) {
        Some(path) => FlatTheme::from_file(&path)?,
        None => FlatTheme::default(),
    };
    let window = DemoWindow::default();

    run_gesture(
        &window,
        &theme,
        "horizontal",
        Rect::new(20.0, 20.0, 240.0, 24.0),
        |t| Point::new(20.0 + 240.0 * t, 32.0),
    );
    run_gesture(
        &window,
        &theme,
        "vertical",
        Rect::new(300.0, 20.0, 24.0, 200.0),
        |t| Point::new(312.0, 220.0 - 200.0 * t),
    );

    tracing::info!("{} redraws requested", window.redraws.get());
    Ok(())
}

/// Grab the knob, sweep the pointer along `path`, then release
fn run_gesture(
    window: &DemoWindow,
    theme: &FlatTheme,
    name: &str,
    bounds: Rect,
    path: impl Fn(f64) -> Point,
) {
    let ctx = Context::new(window, theme, bounds);
    let mut slider = Slider::with_value(0.25);

    let knob = theme.slider_knob_position(slider.value(), bounds);
    let grab = knob.center + Point::new(1.5, 1.0);
    if let Some(target) = slider.hit_test(&ctx, grab) {
        target.click(&ctx.with_cursor(grab), ButtonEvent::pressed());
    }

    for step in 0..=10 {
        let cursor = path(step as f64 / 10.0);
        slider.drag(&ctx.with_cursor(cursor), ButtonEvent::pressed());
        if slider.take_changed() {
            tracing::info!("{name}: value {:.3}", slider.value());
        }
    }

    let end = path(1.0);
    slider.click(&ctx.with_cursor(end), ButtonEvent::released());

    let mut canvas = RecordingContext::new();
    slider.draw(&ctx, &mut canvas);
    tracing::info!(
        "{name}: released at {:.3}, {} draw commands",
        slider.value(),
        canvas.commands().len()
    );
}
