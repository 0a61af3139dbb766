//! Pointer input types delivered by the hosting event loop

/// Mouse buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    #[default]
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (scroll wheel click)
    Middle,
    /// Other button with index
    Other(u16),
}

/// Modifier key state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Shift key is held
    pub shift: bool,
    /// Control key is held
    pub ctrl: bool,
    /// Alt key is held (Option on macOS)
    pub alt: bool,
    /// Meta key is held (Command on macOS, Windows key on Windows)
    pub meta: bool,
}

impl Modifiers {
    /// Check if no modifiers are held
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// A button transition forwarded to a widget.
///
/// Press, drag and release all carry one of these; `is_pressed` tells whether
/// the button is held at the time of the event. The pointer position itself
/// is read from the widget context, not from the event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ButtonEvent {
    /// Which button changed state
    pub button: MouseButton,
    /// Whether the button is currently held down
    pub is_pressed: bool,
    /// Consecutive click count (1 for single click, 2 for double click)
    pub click_count: u32,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl ButtonEvent {
    /// Primary button press
    pub fn pressed() -> Self {
        Self {
            button: MouseButton::Left,
            is_pressed: true,
            click_count: 1,
            modifiers: Modifiers::default(),
        }
    }

    /// Primary button release
    pub fn released() -> Self {
        Self {
            is_pressed: false,
            ..Self::pressed()
        }
    }

    /// Set which button the event refers to
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Set the modifier state
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_event_builders() {
        let press = ButtonEvent::pressed();
        assert!(press.is_pressed);
        assert_eq!(press.button, MouseButton::Left);
        assert!(press.modifiers.is_empty());

        let release = ButtonEvent::released()
            .with_button(MouseButton::Right)
            .with_modifiers(Modifiers {
                shift: true,
                ..Default::default()
            });
        assert!(!release.is_pressed);
        assert_eq!(release.button, MouseButton::Right);
        assert!(!release.modifiers.is_empty());
    }
}
