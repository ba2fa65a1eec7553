// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Turns an [`EditorSession`] into the bytes of one full frame.
//!
//! [`render_frame`] is pure: it reads the session and returns the bytes, it never
//! mutates state or does I/O. [`refresh_screen`] is the impure wrapper used by the main
//! loop and the prompt; it scrolls the viewport, renders and writes.
//!
//! Frame layout:
//!
//! ```text
//! ESC[?25l ESC[H                          hide cursor, go home
//! ┌───────────────────────────────────┐
//! │ text rows, or ~ past the end      │   screen_rows × (row, ESC[K, \r\n)
//! ├───────────────────────────────────┤
//! │ name - N lines (modified)  line/N │   status bar, ESC[7m … ESC[m
//! ├───────────────────────────────────┤
//! │ ESC[K message                     │   status message line
//! └───────────────────────────────────┘
//! ESC[row;colH ESC[?25h                   place and show cursor
//! ```

use std::time::Instant;

use super::{EditorSession, ui_str};
use crate::{CLEAR_LINE_TO_END, CRLF, CURSOR_HOME, HIDE_CURSOR, SGR_INVERT, SGR_RESET,
            SHOW_CURSOR, TerminalIo, cursor_position};

const EMPTY_ROW_MARKER: u8 = b'~';

/// Build the complete frame for `session` as of `now` (used to expire the status
/// message). Call [`EditorSession::scroll`] first so the viewport is up to date.
#[must_use]
pub fn render_frame(session: &EditorSession, now: Instant) -> Vec<u8> {
    let mut acc = Vec::new();
    acc.extend_from_slice(HIDE_CURSOR);
    acc.extend_from_slice(CURSOR_HOME);

    render_rows(session, &mut acc);
    render_status_bar(session, &mut acc);
    render_message_line(session, now, &mut acc);

    let viewport = session.viewport();
    let cursor = session.cursor();
    acc.extend(cursor_position(
        cursor.line.saturating_sub(viewport.row_offset) + 1,
        session.render_col().saturating_sub(viewport.col_offset) + 1,
    ));
    acc.extend_from_slice(SHOW_CURSOR);
    acc
}

/// Scroll, render and write one frame.
pub fn refresh_screen(
    session: &mut EditorSession,
    terminal: &mut (impl TerminalIo + ?Sized),
) -> miette::Result<()> {
    session.scroll();
    let frame = render_frame(session, Instant::now());
    terminal.write_bytes(&frame)
}

fn render_rows(session: &EditorSession, acc: &mut Vec<u8>) {
    let viewport = session.viewport();
    let buffer = session.buffer();
    for screen_row in 0..viewport.screen_rows {
        match buffer.get(viewport.line_at_screen_row(screen_row)) {
            Some(line) => {
                let render = line.render();
                let start = viewport.col_offset.min(render.len());
                let end = (start + viewport.screen_cols).min(render.len());
                acc.extend_from_slice(&render[start..end]);
            }
            None if buffer.is_empty() && screen_row == viewport.screen_rows / 3 => {
                render_welcome_banner(viewport.screen_cols, acc);
            }
            None => acc.push(EMPTY_ROW_MARKER),
        }
        acc.extend_from_slice(CLEAR_LINE_TO_END);
        acc.extend_from_slice(CRLF);
    }
}

/// Centered, with the `~` marker taking the first padding column.
fn render_welcome_banner(screen_cols: usize, acc: &mut Vec<u8>) {
    let banner = ui_str::welcome_banner();
    let banner = &banner.as_bytes()[..banner.len().min(screen_cols)];
    let mut padding = (screen_cols - banner.len()) / 2;
    if padding > 0 {
        acc.push(EMPTY_ROW_MARKER);
        padding -= 1;
    }
    acc.extend(std::iter::repeat_n(b' ', padding));
    acc.extend_from_slice(banner);
}

fn render_status_bar(session: &EditorSession, acc: &mut Vec<u8>) {
    let screen_cols = session.viewport().screen_cols;
    let line_count = session.buffer().len();
    let file_name = session.file_path().map(|it| it.display().to_string());

    let is_dirty = session.is_dirty();
    let left = ui_str::status_bar_file_info(file_name.as_deref(), line_count, is_dirty);
    let right = ui_str::status_bar_position(session.cursor().line, line_count);

    acc.extend_from_slice(SGR_INVERT);
    let mut len = left.len().min(screen_cols);
    acc.extend_from_slice(&left.as_bytes()[..len]);
    while len < screen_cols {
        if screen_cols - len == right.len() {
            acc.extend_from_slice(right.as_bytes());
            break;
        }
        acc.push(b' ');
        len += 1;
    }
    acc.extend_from_slice(SGR_RESET);
    acc.extend_from_slice(CRLF);
}

fn render_message_line(session: &EditorSession, now: Instant, acc: &mut Vec<u8>) {
    acc.extend_from_slice(CLEAR_LINE_TO_END);
    let timeout = session.config().status_message_timeout;
    if let Some(text) = session.status_message().visible_text(now, timeout) {
        let len = text.len().min(session.viewport().screen_cols);
        acc.extend_from_slice(&text.as_bytes()[..len]);
    }
}
