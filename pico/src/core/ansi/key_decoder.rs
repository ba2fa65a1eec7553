// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keyboard input decoding from raw terminal bytes.
//!
//! Handles:
//!
//! - Arrow keys (`CSI A/B/C/D`)
//! - Home and End (`CSI H/F`, `SS3 H/F`, `CSI 1~`/`CSI 7~`, `CSI 4~`/`CSI 8~`)
//! - Delete, Page Up and Page Down (`CSI 3~`, `CSI 5~`, `CSI 6~`)
//! - Backspace (DEL, 0x7F)
//! - Everything else is passed through as a [`Key::Byte`]
//!
//! ## Escape vs. escape sequence
//!
//! The Escape key sends a lone ESC byte, and every escape sequence also starts with
//! ESC. The only way to tell them apart is timing: the terminal writes a whole sequence
//! at once, while a human pressing Escape produces nothing more for a while. So after
//! ESC, the decoder reads ahead; if a read times out ([`TerminalIo::read_byte`] returns
//! `Ok(None)`) the result is a bare [`Key::Escape`].
//!
//! ```text
//! ESC ─┬─ timeout ────────────────────────────────▶ Escape
//!      └─ b0 ─┬─ timeout ─────────────────────────▶ Escape
//!             └─ b1 ─┬─ b0='[' b1=digit ─┬─ timeout ▶ Escape
//!                    │                   └─ b2 ───▶ parse [b0 b1 b2]
//!                    └─ otherwise ────────────────▶ parse [b0 b1]
//! ```
//!
//! Any completed sequence that is not recognized degrades to [`Key::Escape`]; its bytes
//! are consumed.

use smallvec::SmallVec;

use super::{Key,
            constants::{CSI_INTRODUCER, ESC, SS3_INTRODUCER, TILDE}};
use crate::TerminalIo;

/// Longest sequence tail that is read after ESC, eg: `[ 5 ~`.
const MAX_SEQUENCE_TAIL_LEN: usize = 3;

type SequenceTail = SmallVec<[u8; MAX_SEQUENCE_TAIL_LEN]>;

/// Turns the byte stream of a [`TerminalIo`] into [`Key`]s, one per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyDecoder;

impl KeyDecoder {
    /// Block until a key is available, then decode it.
    ///
    /// The wait for the first byte retries on read timeouts indefinitely. Only the
    /// lookahead after ESC gives up on a timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn read_key(terminal: &mut (impl TerminalIo + ?Sized)) -> miette::Result<Key> {
        let first_byte = loop {
            if let Some(byte) = terminal.read_byte()? {
                break byte;
            }
        };

        let key = if first_byte == ESC {
            Self::read_escape_sequence(terminal)?
        } else {
            Key::from_byte(first_byte)
        };

        tracing::trace!(message = "decoded key", ?key);
        Ok(key)
    }

    /// The ESC byte has already been consumed. Read the rest of the sequence (if any)
    /// and decode it.
    fn read_escape_sequence(
        terminal: &mut (impl TerminalIo + ?Sized),
    ) -> miette::Result<Key> {
        let mut tail = SequenceTail::new();

        for _ in 0..2 {
            match terminal.read_byte()? {
                Some(byte) => tail.push(byte),
                None => return Ok(Key::Escape),
            }
        }

        if tail[0] == CSI_INTRODUCER && tail[1].is_ascii_digit() {
            match terminal.read_byte()? {
                Some(byte) => tail.push(byte),
                None => return Ok(Key::Escape),
            }
        }

        Ok(parse_escape_sequence(&tail).unwrap_or(Key::Escape))
    }
}

/// Parse the bytes that followed an ESC byte.
///
/// Handles sequences like:
/// - `[ A` → Up arrow
/// - `O H` → Home
/// - `[ 5 ~` → Page Up
///
/// Returns `None` for anything unrecognized.
#[must_use]
pub fn parse_escape_sequence(tail: &[u8]) -> Option<Key> {
    match tail {
        [CSI_INTRODUCER, digit, TILDE] => parse_csi_tilde_sequence(*digit),
        [CSI_INTRODUCER, final_byte] => parse_csi_single_char(*final_byte),
        [SS3_INTRODUCER, final_byte] => parse_ss3_single_char(*final_byte),
        _ => None,
    }
}

/// `CSI <final>`, eg: `ESC [ A`.
fn parse_csi_single_char(final_byte: u8) -> Option<Key> {
    match final_byte {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// `SS3 <final>`, eg: `ESC O H`.
fn parse_ss3_single_char(final_byte: u8) -> Option<Key> {
    match final_byte {
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// `CSI <digit> ~`. Home and End each have two codes since terminals disagree
/// (VT220 vs. rxvt).
fn parse_csi_tilde_sequence(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}
