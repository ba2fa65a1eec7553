// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Size of the terminal window, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

impl WindowSize {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self { Self { rows, cols } }
}

/// Byte level access to the terminal.
pub trait TerminalIo {
    /// Read a single byte.
    ///
    /// Returns `Ok(None)` when no byte arrived before the read timeout (or the read
    /// would block, or was interrupted). The caller decides whether that means "keep
    /// waiting" or "the escape sequence ended here".
    ///
    /// # Errors
    ///
    /// Returns an error for any other read failure. This is fatal for the session.
    fn read_byte(&mut self) -> miette::Result<Option<u8>>;

    /// Write all the bytes and flush them.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes could not be written.
    fn write_bytes(&mut self, bytes: &[u8]) -> miette::Result<()>;

    /// # Errors
    ///
    /// Returns an error if the window size can't be determined. Screen geometry is
    /// needed for every frame, so this is fatal.
    fn query_window_size(&mut self) -> miette::Result<WindowSize>;
}
