// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The narrow seam between the editor and the real terminal.
//!
//! Everything the editor needs from the outside world goes through [`TerminalIo`]:
//! read one byte (or learn that none arrived before the read timeout), write a frame,
//! and query the window size once at startup. [`StdTerminal`] is the real thing, and
//! [`crate::TerminalMock`] is a scripted stand-in for tests.
//!
//! Raw mode lives in [`mod@raw_mode`]. It is not part of the trait since it is a
//! process lifecycle concern: the binary turns it on before the session starts and
//! the [`RawModeGuard`] turns it off again on the way out.

// Attach.
pub mod raw_mode;
pub mod std_terminal;
pub mod terminal_io_api;

// Re-export.
pub use raw_mode::*;
pub use std_terminal::*;
pub use terminal_io_api::*;
