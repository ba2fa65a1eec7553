// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The visible window onto the document.
//!
//! ```text
//!            col_offset
//!            │◄──── screen_cols ────►│
//!      ┌─────┼───────────────────────┼──┐
//!      │     │                       │  │ ◄── document (render coordinates)
//! row_ ├─────┼───────────────────────┤  │
//! off- │     │  visible area         │  │ ▲
//! set  │     │            ▓ cursor   │  │ │ screen_rows
//!      │     │                       │  │ ▼
//!      ├─────┴───────────────────────┘  │
//!      └────────────────────────────────┘
//! ```
//!
//! [`Viewport::scroll_to`] is a clamp: after it runs, the cursor's render position is
//! inside `[offset, offset + screen size)` on both axes.

use crate::WindowSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub row_offset: usize,
    pub col_offset: usize,
    pub screen_rows: usize,
    pub screen_cols: usize,
}

impl Viewport {
    /// `reserved_rows` are taken off the bottom of the window for the status bar and
    /// message line.
    #[must_use]
    pub fn new(window_size: WindowSize, reserved_rows: u16) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            screen_rows: usize::from(window_size.rows.saturating_sub(reserved_rows)),
            screen_cols: usize::from(window_size.cols),
        }
    }

    /// Adjust the offsets so that `(line, render_col)` is visible.
    pub fn scroll_to(&mut self, line: usize, render_col: usize) {
        self.row_offset = clamp_offset(self.row_offset, line, self.screen_rows);
        self.col_offset = clamp_offset(self.col_offset, render_col, self.screen_cols);
    }

    /// Document line drawn on screen row `screen_row`.
    #[must_use]
    pub fn line_at_screen_row(&self, screen_row: usize) -> usize {
        self.row_offset + screen_row
    }
}

/// A zero sized axis pins the offset to the position, so that it is never left
/// pointing past it.
fn clamp_offset(offset: usize, pos: usize, size: usize) -> usize {
    if pos < offset {
        pos
    } else if pos >= offset + size {
        (pos + 1).saturating_sub(size.max(1))
    } else {
        offset
    }
}
