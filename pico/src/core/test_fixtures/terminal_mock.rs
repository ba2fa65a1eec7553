// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::VecDeque, io};

use crate::{PicoError, TerminalIo, WindowSize};

/// One scripted result for [`TerminalIo::read_byte`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockInput {
    Byte(u8),
    /// The read timed out, `read_byte()` returns `Ok(None)`.
    Timeout,
}

/// Scripted [`TerminalIo`] for tests.
///
/// - Input is a queue of [`MockInput`]. Once it is exhausted, `read_byte()` returns
///   an `UnexpectedEof` error. So a test that forgets to quit fails instead of hanging.
/// - Everything written is captured and can be inspected with
///   [`TerminalMock::get_copy_of_output_as_string`].
/// - The window size is fixed, `24x80` by default.
#[derive(Debug)]
pub struct TerminalMock {
    input: VecDeque<MockInput>,
    output: Vec<u8>,
    window_size: Option<WindowSize>,
}

impl Default for TerminalMock {
    fn default() -> Self {
        Self {
            input: VecDeque::new(),
            output: vec![],
            window_size: Some(WindowSize::new(24, 80)),
        }
    }
}

impl TerminalMock {
    #[must_use]
    pub fn new(input: &[u8]) -> Self {
        let mut it = Self::default();
        it.push_input(input);
        it
    }

    #[must_use]
    pub fn with_window_size(mut self, rows: u16, cols: u16) -> Self {
        self.window_size = Some(WindowSize::new(rows, cols));
        self
    }

    /// Make [`TerminalIo::query_window_size`] fail.
    #[must_use]
    pub fn without_window_size(mut self) -> Self {
        self.window_size = None;
        self
    }

    pub fn push_input(&mut self, bytes: &[u8]) -> &mut Self {
        self.input.extend(bytes.iter().copied().map(MockInput::Byte));
        self
    }

    pub fn push_timeout(&mut self) -> &mut Self {
        self.input.push_back(MockInput::Timeout);
        self
    }

    #[must_use]
    pub fn has_pending_input(&self) -> bool { !self.input.is_empty() }

    #[must_use]
    pub fn get_copy_of_output(&self) -> Vec<u8> { self.output.clone() }

    #[must_use]
    pub fn get_copy_of_output_as_string(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn clear_output(&mut self) { self.output.clear(); }
}

impl TerminalIo for TerminalMock {
    fn read_byte(&mut self) -> miette::Result<Option<u8>> {
        match self.input.pop_front() {
            Some(MockInput::Byte(byte)) => Ok(Some(byte)),
            Some(MockInput::Timeout) => Ok(None),
            None => Err(PicoError::ReadInput(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "scripted input exhausted",
            ))
            .into()),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> miette::Result<()> {
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    fn query_window_size(&mut self) -> miette::Result<WindowSize> {
        self.window_size.ok_or_else(|| {
            PicoError::WindowSize(io::Error::new(
                io::ErrorKind::Unsupported,
                "no window size configured",
            ))
            .into()
        })
    }
}
