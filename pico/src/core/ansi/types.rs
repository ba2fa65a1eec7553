// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::constants::{BACKSPACE, ENTER, ESC, ctrl_key};

/// One logical key press, decoded from the raw terminal byte stream by
/// [`crate::KeyDecoder`].
///
/// Printable characters and control characters are passed through as
/// [`Key::Byte`]. Multi byte escape sequences are resolved to one of the named
/// variants. Anything the decoder does not recognize degrades to [`Key::Escape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Printable or control byte, as read. `Enter` arrives as `\r`, `Ctrl-Q` as
    /// `0x11`, etc.
    Byte(u8),
    /// Bare Escape, or an unrecognized escape sequence.
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    PageUp,
    PageDown,
    Home,
    End,
    /// Forward delete (`ESC [ 3 ~`).
    Delete,
    /// The DEL byte (0x7F).
    Backspace,
}

impl Key {
    /// Classify a single byte that is not the start of an escape sequence.
    #[must_use]
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            ESC => Key::Escape,
            BACKSPACE => Key::Backspace,
            _ => Key::Byte(byte),
        }
    }

    /// `true` if this is `letter` pressed together with Ctrl.
    #[must_use]
    pub fn is_ctrl(self, letter: u8) -> bool { self == Key::Byte(ctrl_key(letter)) }

    #[must_use]
    pub fn is_enter(self) -> bool { self == Key::Byte(ENTER) }

    /// Printable ASCII (`0x20..=0x7E`). This is what the prompt accepts as input.
    #[must_use]
    pub fn as_printable_ascii(self) -> Option<char> {
        match self {
            Key::Byte(byte) if byte.is_ascii() && !byte.is_ascii_control() => {
                Some(char::from(byte))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_byte() {
        assert_eq!(Key::from_byte(b'a'), Key::Byte(b'a'));
        assert_eq!(Key::from_byte(0x1B), Key::Escape);
        assert_eq!(Key::from_byte(0x7F), Key::Backspace);
        assert_eq!(Key::from_byte(b'\r'), Key::Byte(b'\r'));
    }

    #[test]
    fn test_is_ctrl() {
        assert!(Key::Byte(0x11).is_ctrl(b'q'));
        assert!(!Key::Byte(b'q').is_ctrl(b'q'));
        assert!(!Key::Escape.is_ctrl(b'['));
    }

    #[test]
    fn test_as_printable_ascii() {
        assert_eq!(Key::Byte(b'x').as_printable_ascii(), Some('x'));
        assert_eq!(Key::Byte(b' ').as_printable_ascii(), Some(' '));
        assert_eq!(Key::Byte(b'\t').as_printable_ascii(), None);
        assert_eq!(Key::Byte(0xC3).as_printable_ascii(), None);
        assert_eq!(Key::Home.as_printable_ascii(), None);
    }
}
