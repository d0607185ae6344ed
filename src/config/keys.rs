use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A key that can be bound to an actuator in the config file.
///
/// Written as `"Up"`, `"Down"`, `"Left"`, `"Right"` or a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum KeyBinding {
    Char(char),
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid key binding {0:?}: expected Up, Down, Left, Right or a single printable character")]
pub struct KeyBindingError(String);

impl KeyBinding {
    /// Keys the host already uses for quitting and focus movement.
    pub const RESERVED: [KeyBinding; 5] = [
        KeyBinding::Char('q'),
        KeyBinding::Char('Q'),
        KeyBinding::Char(' '),
        KeyBinding::Left,
        KeyBinding::Right,
    ];

    pub fn is_reserved(self) -> bool {
        Self::RESERVED.contains(&self)
    }

    pub fn matches(self, key: &KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match (self, key.code) {
            (KeyBinding::Char(expected), KeyCode::Char(ch)) => expected == ch,
            (KeyBinding::Up, KeyCode::Up)
            | (KeyBinding::Down, KeyCode::Down)
            | (KeyBinding::Left, KeyCode::Left)
            | (KeyBinding::Right, KeyCode::Right) => true,
            _ => false,
        }
    }
}

impl FromStr for KeyBinding {
    type Err = KeyBindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Up" => return Ok(KeyBinding::Up),
            "Down" => return Ok(KeyBinding::Down),
            "Left" => return Ok(KeyBinding::Left),
            "Right" => return Ok(KeyBinding::Right),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            // Tab, Enter and friends arrive as named key codes, never as chars.
            (Some(ch), None) if !ch.is_control() => Ok(KeyBinding::Char(ch)),
            _ => Err(KeyBindingError(s.to_string())),
        }
    }
}

impl TryFrom<String> for KeyBinding {
    type Error = KeyBindingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyBinding> for String {
    fn from(value: KeyBinding) -> Self {
        value.to_string()
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyBinding::Char(ch) => write!(f, "{ch}"),
            KeyBinding::Up => f.write_str("Up"),
            KeyBinding::Down => f.write_str("Down"),
            KeyBinding::Left => f.write_str("Left"),
            KeyBinding::Right => f.write_str("Right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_char_keys() {
        assert_eq!("Up".parse::<KeyBinding>(), Ok(KeyBinding::Up));
        assert_eq!("+".parse::<KeyBinding>(), Ok(KeyBinding::Char('+')));
        assert!("".parse::<KeyBinding>().is_err());
        assert!("PageUp".parse::<KeyBinding>().is_err());
    }

    #[test]
    fn control_characters_are_rejected() {
        for raw in ["\t", "\n", "\r", "\u{1b}"] {
            assert!(raw.parse::<KeyBinding>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn ctrl_modified_key_does_not_match() {
        let plain = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        let ctrl = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert!(KeyBinding::Char('k').matches(&plain));
        assert!(!KeyBinding::Char('k').matches(&ctrl));
    }

    #[test]
    fn shifted_symbol_matches() {
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert!(KeyBinding::Char('+').matches(&plus));
    }
}
