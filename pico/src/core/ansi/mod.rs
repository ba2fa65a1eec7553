// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT100 terminal input decoding, and the handful of output sequences the renderer
//! needs.
//!
//! ```text
//! Raw terminal input (stdin)
//!    │
//! ┌──▼───────────────────────────────────────┐
//! │  TerminalIo::read_byte()                 │  ← core/terminal_io/
//! │  • one byte, or None on read timeout     │
//! └──────────────────────────────────────────┘
//!    │
//! ┌──▼───────────────────────────────────────┐
//! │  KeyDecoder::read_key()                  │  ← core/ansi/key_decoder.rs
//! │  • ESC lookahead (at most 3 more bytes)  │
//! │  • parse_escape_sequence() (pure)        │
//! └──────────────────────────────────────────┘
//!    │
//!    ▼
//! Key (byte, escape, arrows, paging, home/end, delete, backspace)
//! ```

// Attach.
pub mod constants;
pub mod key_decoder;
pub mod types;

// Re-export.
pub use constants::*;
pub use key_decoder::*;
pub use types::*;
