// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

use super::{TerminalIo, WindowSize};
use crate::PicoError;

/// [`TerminalIo`] backed by the process' stdin and stdout.
///
/// Reads bypass [`std::io::Stdin`]'s buffer and go straight to the file descriptor via
/// [`rustix::io::read`], so that the termios read timeout set up by
/// [`crate::RawModeGuard`] (`VMIN = 0`, `VTIME = 1`) surfaces as a zero byte read,
/// which is reported as `Ok(None)`.
#[derive(Debug, Default)]
pub struct StdTerminal;

impl StdTerminal {
    #[must_use]
    pub fn new() -> Self { Self }
}

impl TerminalIo for StdTerminal {
    #[cfg(unix)]
    fn read_byte(&mut self) -> miette::Result<Option<u8>> {
        let mut buf = [0_u8; 1];
        match rustix::io::read(io::stdin(), &mut buf) {
            Ok(1) => Ok(Some(buf[0])),
            Ok(_) => Ok(None),
            Err(rustix::io::Errno::AGAIN | rustix::io::Errno::INTR) => Ok(None),
            Err(errno) => Err(PicoError::ReadInput(io::Error::from(errno)).into()),
        }
    }

    #[cfg(not(unix))]
    fn read_byte(&mut self) -> miette::Result<Option<u8>> {
        use std::io::Read;
        let mut buf = [0_u8; 1];
        match io::stdin().lock().read(&mut buf) {
            Ok(1) => Ok(Some(buf[0])),
            Ok(_) => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(PicoError::ReadInput(err).into()),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> miette::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes).map_err(PicoError::WriteOutput)?;
        stdout.flush().map_err(PicoError::WriteOutput)?;
        Ok(())
    }

    fn query_window_size(&mut self) -> miette::Result<WindowSize> {
        let (cols, rows) = crossterm::terminal::size().map_err(PicoError::WindowSize)?;
        if cols == 0 {
            return Err(PicoError::WindowSize(io::Error::new(
                io::ErrorKind::InvalidData,
                "terminal reported zero columns",
            ))
            .into());
        }
        Ok(WindowSize::new(rows, cols))
    }
}
