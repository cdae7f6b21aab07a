//! Buttons delivered by the host and their input classes

/// A pressed button as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl Button {
    /// Returns true for inputs that dismiss transient UI (escape)
    pub fn is_cancel(self) -> bool {
        matches!(self, Button::Key(KeyCode::Escape))
    }

    /// Returns true for primary/secondary pointer clicks
    ///
    /// An unhandled click of this class means the overlay lost focus.
    pub fn is_pointer_click(self) -> bool {
        matches!(self, Button::Mouse(MouseButton::Left | MouseButton::Right))
    }

    /// Digit value for number-row keys
    pub fn digit(self) -> Option<u32> {
        let Button::Key(key) = self else {
            return None;
        };
        let digit = match key {
            KeyCode::Num0 => 0,
            KeyCode::Num1 => 1,
            KeyCode::Num2 => 2,
            KeyCode::Num3 => 3,
            KeyCode::Num4 => 4,
            KeyCode::Num5 => 5,
            KeyCode::Num6 => 6,
            KeyCode::Num7 => 7,
            KeyCode::Num8 => 8,
            KeyCode::Num9 => 9,
            _ => return None,
        };
        Some(digit)
    }
}

impl From<KeyCode> for Button {
    fn from(key: KeyCode) -> Self {
        Button::Key(key)
    }
}

impl From<MouseButton> for Button {
    fn from(button: MouseButton) -> Self {
        Button::Mouse(button)
    }
}

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Convert from a winit mouse button, ignoring extra buttons
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Right => Some(Self::Right),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            _ => None,
        }
    }
}

/// Key code (the subset the overlay and demo host care about)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Backspace,
    Tab,
    Space,

    // Screens in the demo host
    C,
    E,
    K,
    S,
    T,

    // Numbers
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,

    Other,
}

/// Convert from winit key code
impl From<winit::keyboard::KeyCode> for KeyCode {
    fn from(key: winit::keyboard::KeyCode) -> Self {
        use winit::keyboard::KeyCode as WK;
        match key {
            WK::Escape => Self::Escape,
            WK::Enter | WK::NumpadEnter => Self::Enter,
            WK::Backspace => Self::Backspace,
            WK::Tab => Self::Tab,
            WK::Space => Self::Space,

            WK::KeyC => Self::C,
            WK::KeyE => Self::E,
            WK::KeyK => Self::K,
            WK::KeyS => Self::S,
            WK::KeyT => Self::T,

            WK::Digit0 | WK::Numpad0 => Self::Num0,
            WK::Digit1 | WK::Numpad1 => Self::Num1,
            WK::Digit2 | WK::Numpad2 => Self::Num2,
            WK::Digit3 | WK::Numpad3 => Self::Num3,
            WK::Digit4 | WK::Numpad4 => Self::Num4,
            WK::Digit5 | WK::Numpad5 => Self::Num5,
            WK::Digit6 | WK::Numpad6 => Self::Num6,
            WK::Digit7 | WK::Numpad7 => Self::Num7,
            WK::Digit8 | WK::Numpad8 => Self::Num8,
            WK::Digit9 | WK::Numpad9 => Self::Num9,

            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_class() {
        assert!(Button::Key(KeyCode::Escape).is_cancel());
        assert!(!Button::Key(KeyCode::Enter).is_cancel());
        assert!(!Button::Mouse(MouseButton::Right).is_cancel());
    }

    #[test]
    fn test_pointer_click_class() {
        assert!(Button::Mouse(MouseButton::Left).is_pointer_click());
        assert!(Button::Mouse(MouseButton::Right).is_pointer_click());
        assert!(!Button::Mouse(MouseButton::Middle).is_pointer_click());
        assert!(!Button::Key(KeyCode::Escape).is_pointer_click());
    }

    #[test]
    fn test_digits() {
        assert_eq!(Button::Key(KeyCode::Num7).digit(), Some(7));
        assert_eq!(Button::Key(KeyCode::Num0).digit(), Some(0));
        assert_eq!(Button::Key(KeyCode::E).digit(), None);
        assert_eq!(Button::Mouse(MouseButton::Left).digit(), None);
    }

    #[test]
    fn test_winit_conversion() {
        use winit::keyboard::KeyCode as WK;
        assert_eq!(KeyCode::from(WK::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WK::Numpad4), KeyCode::Num4);
        assert_eq!(KeyCode::from(WK::F12), KeyCode::Other);
        assert_eq!(
            MouseButton::from_winit(winit::event::MouseButton::Right),
            Some(MouseButton::Right)
        );
        assert_eq!(MouseButton::from_winit(winit::event::MouseButton::Back), None);
    }
}
