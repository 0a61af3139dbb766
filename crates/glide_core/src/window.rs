//! Window abstraction

/// Window abstraction trait
///
/// Implemented by the hosting event-loop layer. Widgets only ever ask for a
/// redraw; the window decides when the paint actually happens.
pub trait Window {
    /// Request a redraw
    fn request_redraw(&self);
}
