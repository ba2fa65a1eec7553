// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Terminal raw mode.
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C, Ctrl+S, etc.)
//! - Echoing is enabled (typed characters appear on screen)
//!
//! **Raw Mode**:
//! - No line buffering, bytes are available immediately
//! - No special character processing, `Ctrl-S` and `Ctrl-Q` reach the editor
//! - No echo
//! - No output post processing, so the renderer must emit `\r\n` itself
//!
//! The read timeout is set to 100ms (`VMIN = 0`, `VTIME = 1`). A read that times out
//! returns zero bytes, which is how [`crate::KeyDecoder`] tells a bare Escape key apart
//! from the first byte of an escape sequence.

use std::io;

/// Enables raw mode when created, and restores the original terminal attributes when
/// dropped (or when [`RawModeGuard::restore`] is called).
///
/// ```no_run
/// use pico::RawModeGuard;
///
/// # fn run() -> miette::Result<()> {
/// let raw_mode = RawModeGuard::try_new()?;
/// // ... read keys, paint frames ...
/// raw_mode.restore()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RawModeGuard {
    #[cfg(unix)]
    original: Option<rustix::termios::Termios>,
}

#[cfg(unix)]
mod unix_impl {
    use std::io;

    use rustix::termios::{self, ControlModes, InputModes, LocalModes, OptionalActions,
                          OutputModes, SpecialCodeIndex, Termios};

    /// Apply raw mode to stdin and return the attributes that were in effect before.
    pub fn enable_raw_mode() -> io::Result<Termios> {
        let stdin = io::stdin();
        let original = termios::tcgetattr(&stdin)?;
        let mut raw = original.clone();

        raw.input_modes.remove(
            InputModes::BRKINT
                | InputModes::ICRNL
                | InputModes::INPCK
                | InputModes::ISTRIP
                | InputModes::IXON,
        );
        raw.output_modes.remove(OutputModes::OPOST);
        raw.control_modes.insert(ControlModes::CS8);
        raw.local_modes.remove(
            LocalModes::ECHO | LocalModes::ICANON | LocalModes::IEXTEN | LocalModes::ISIG,
        );

        // Return from read() as soon as 0 bytes are available, after waiting at most
        // 1 decisecond.
        raw.special_codes[SpecialCodeIndex::VMIN] = 0;
        raw.special_codes[SpecialCodeIndex::VTIME] = 1;

        termios::tcsetattr(&stdin, OptionalActions::Flush, &raw)?;
        Ok(original)
    }

    pub fn restore(original: &Termios) -> io::Result<()> {
        termios::tcsetattr(io::stdin(), OptionalActions::Flush, original)?;
        Ok(())
    }
}

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if the terminal attributes can't be read or written (eg: stdin
    /// is not a tty), or on platforms other than unix.
    pub fn try_new() -> miette::Result<Self> {
        #[cfg(unix)]
        {
            let original =
                unix_impl::enable_raw_mode().map_err(crate::PicoError::RawMode)?;
            tracing::debug!(message = "raw mode enabled");
            Ok(Self {
                original: Some(original),
            })
        }

        #[cfg(not(unix))]
        {
            Err(crate::PicoError::RawMode(io::Error::new(
                io::ErrorKind::Unsupported,
                "raw mode is only implemented for unix terminals",
            ))
            .into())
        }
    }

    /// Restore the original attributes, reporting failure to the caller instead of
    /// just logging it like [`Drop`] does.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal attributes could not be written back.
    pub fn restore(mut self) -> miette::Result<()> {
        self.try_restore().map_err(crate::PicoError::RawMode)?;
        Ok(())
    }

    fn try_restore(&mut self) -> io::Result<()> {
        #[cfg(unix)]
        if let Some(original) = self.original.take() {
            unix_impl::restore(&original)?;
            tracing::debug!(message = "raw mode disabled");
        }
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = self.try_restore() {
            tracing::error!(message = "could not restore terminal attributes", ?error);
        }
    }
}
