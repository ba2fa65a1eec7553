// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte values and escape sequences for the VT100 subset that the editor reads and
//! writes.

// Input bytes.

/// ESC (0x1B): starts every escape sequence, and is also the Escape key by itself.
pub const ESC: u8 = 0x1B;

/// `[` after ESC introduces a CSI (Control Sequence Introducer) sequence.
pub const CSI_INTRODUCER: u8 = b'[';

/// `O` after ESC introduces an SS3 (Single Shift 3) sequence, sent by terminals in
/// application cursor mode.
pub const SS3_INTRODUCER: u8 = b'O';

/// Final byte of `CSI <digit> ~` sequences.
pub const TILDE: u8 = b'~';

/// DEL (0x7F): what the Backspace key sends on almost every terminal.
pub const BACKSPACE: u8 = 0x7F;

/// Carriage return: what the Enter key sends in raw mode (ICRNL is off).
pub const ENTER: u8 = b'\r';

/// Tab byte, expanded to spaces in the render form of a line.
pub const TAB: u8 = b'\t';

/// Maps a letter to the byte the terminal sends when it is pressed with Ctrl. This
/// strips bits 5 and 6, eg: `ctrl_key(b'q') == 0x11`.
#[must_use]
pub const fn ctrl_key(key: u8) -> u8 { key & 0x1F }

// Output sequences.

/// `ESC [ 2 J`: erase the entire screen.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";

/// `ESC [ H`: move the cursor to the top left corner.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// `ESC [ K`: erase from the cursor to the end of the line.
pub const CLEAR_LINE_TO_END: &[u8] = b"\x1b[K";

/// `ESC [ ? 25 l`: hide the cursor (DECTCEM reset) while a frame is painted.
pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";

/// `ESC [ ? 25 h`: show the cursor (DECTCEM set).
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";

/// `ESC [ 7 m`: SGR inverse video, used by the status bar.
pub const SGR_INVERT: &[u8] = b"\x1b[7m";

/// `ESC [ m`: SGR reset to normal attributes.
pub const SGR_RESET: &[u8] = b"\x1b[m";

/// Line terminator for raw mode output (OPOST is off, so `\n` alone does not return
/// the carriage).
pub const CRLF: &[u8] = b"\r\n";

/// `ESC [ row ; col H`: move the cursor to a 1-based position.
#[must_use]
pub fn cursor_position(row_one_based: usize, col_one_based: usize) -> Vec<u8> {
    format!("\x1b[{row_one_based};{col_one_based}H").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b'q', 0x11)]
    #[test_case(b's', 0x13)]
    #[test_case(b'f', 0x06)]
    #[test_case(b'h', 0x08)]
    #[test_case(b'Q', 0x11)]
    fn test_ctrl_key(key: u8, expected: u8) {
        assert_eq!(ctrl_key(key), expected);
    }

    #[test]
    fn test_cursor_position() {
        assert_eq!(cursor_position(1, 1), b"\x1b[1;1H".to_vec());
        assert_eq!(cursor_position(24, 80), b"\x1b[24;80H".to_vec());
    }
}
