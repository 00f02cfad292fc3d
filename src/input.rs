//! Keyboard input.
//!
//! The viewer reacts to printable characters (digits, letters, `+`, `-`),
//! the arrow keys and Escape. [`Key`] folds winit's logical keys into that
//! small set so the control logic never touches winit types and can be
//! driven directly from tests.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key as WinitKey, NamedKey};

/// A key the viewer may react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A single printable character, as typed (shift and layout applied).
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Escape,
    /// Anything else. Always ignored.
    Other,
}

impl From<&WinitKey> for Key {
    fn from(key: &WinitKey) -> Self {
        match key {
            WinitKey::Named(NamedKey::ArrowUp) => Key::Up,
            WinitKey::Named(NamedKey::ArrowDown) => Key::Down,
            WinitKey::Named(NamedKey::ArrowLeft) => Key::Left,
            WinitKey::Named(NamedKey::ArrowRight) => Key::Right,
            WinitKey::Named(NamedKey::Escape) => Key::Escape,
            WinitKey::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => Key::Other,
                }
            }
            _ => Key::Other,
        }
    }
}

impl From<char> for Key {
    fn from(ch: char) -> Self {
        if ch == '\u{1b}' {
            Key::Escape
        } else {
            Key::Char(ch)
        }
    }
}

/// Key presses worth dispatching, including auto-repeat.
pub(crate) fn pressed_key(event: &KeyEvent) -> Option<Key> {
    if event.state != ElementState::Pressed {
        return None;
    }
    match Key::from(&event.logical_key) {
        Key::Other => None,
        key => Some(key),
    }
}
