// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # pico
//!
//! A minimal terminal text editor. Open a file, move around with the arrow keys, type,
//! search with `Ctrl-F`, save with `Ctrl-S` and quit with `Ctrl-Q`.
//!
//! # Architecture
//!
//! ```text
//! stdin bytes ──▶ KeyDecoder ──▶ Key ──▶ InputController ──▶ EditorSession
//!                                                              │  LineBuffer
//!                                                              │  Viewport
//!                                                              ▼
//! stdout bytes ◀── TerminalIo ◀── frame ◀── Renderer (pure, no I/O)
//! ```
//!
//! There are two layers:
//!
//! 1. [`mod@core`] holds everything that talks to (or pretends to be) the terminal:
//!    - [`mod@core::ansi`] turns a raw byte stream into [`Key`] events, resolving
//!      VT100 escape sequences with a short lookahead timeout.
//!    - [`mod@core::terminal_io`] is the narrow [`TerminalIo`] seam: read one byte,
//!      write bytes, query the window size. It also owns raw mode.
//!    - [`mod@core::log`] sets up [`tracing`] to write to a file, since stdout is the
//!      editor screen.
//! 2. [`mod@editor`] holds the document model and everything that is pure logic:
//!    - [`Line`] keeps the raw `content` of a line and its tab expanded `render` form in
//!      sync. [`LineBuffer`] is the ordered collection of lines.
//!    - [`mod@editor::coordinate_mapper`] converts between buffer columns and render
//!      columns.
//!    - [`Viewport`] clamps the scroll offsets so that the cursor is always visible.
//!    - [`EditorSession`] is the single owned editor state, it exposes the editing
//!      commands.
//!    - [`render_frame`] produces the exact bytes for one frame.
//!    - [`InputController`] maps keys to commands, and implements quit confirmation
//!      and the prompt driven workflows (save as, find).
//!
//! The [`mod@app`] module wires these together into the main loop used by the `pico`
//! binary.

// Production code must not use unwrap() inside functions that return Result. Test code is
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it). The cfg_attr
// makes this only apply to non-test builds.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod app;
pub mod core;
pub mod editor;

// Re-export.
#[allow(ambiguous_glob_reexports)]
pub use app::*;
#[allow(ambiguous_glob_reexports)]
pub use crate::core::*;
#[allow(ambiguous_glob_reexports)]
pub use editor::*;
