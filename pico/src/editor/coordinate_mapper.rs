// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Conversion between "buffer" columns and "render" columns.
//!
//! - A buffer column is an index into a line's raw `content` bytes.
//! - A render column is an index into the line's `render` form, where each tab is
//!   expanded to spaces up to the next multiple of [`TAB_STOP`].
//!
//! A tab occupies one buffer slot but between 1 and [`TAB_STOP`] render slots:
//!
//! ```text
//! content:  a  b  ⇥  c  d
//! buffer:   0  1  2  3  4
//!           │  │  ├──────────────────┐
//! render:   0  1  2  3  4  5  6  7  8  9
//!           a  b  ·  ·  ·  ·  ·  ·  c  d
//! ```
//!
//! So [`to_render_column`] for buffer column 3 is 8, and [`to_buffer_column`] maps any
//! of the render columns 2 through 7 back to buffer column 2.

use crate::TAB;

/// Tabs are expanded to the next multiple of this.
pub const TAB_STOP: usize = 8;

/// Render width after adding `byte` to a line that is `render_col` wide so far.
#[must_use]
fn advance(render_col: usize, byte: u8) -> usize {
    if byte == TAB {
        render_col + (TAB_STOP - render_col % TAB_STOP)
    } else {
        render_col + 1
    }
}

/// Walks `content[0..buffer_col)` and returns the render width of that prefix. A
/// `buffer_col` past the end of `content` is clamped to `content.len()`.
#[must_use]
pub fn to_render_column(content: &[u8], buffer_col: usize) -> usize {
    content
        .iter()
        .take(buffer_col)
        .fold(0, |render_col, &byte| advance(render_col, byte))
}

/// The inverse of [`to_render_column`]. Returns the index of the byte that covers
/// `render_col`, or `content.len()` if `render_col` is past the end of the line.
#[must_use]
pub fn to_buffer_column(content: &[u8], render_col: usize) -> usize {
    let mut cur_render_col = 0;
    for (buffer_col, &byte) in content.iter().enumerate() {
        cur_render_col = advance(cur_render_col, byte);
        if cur_render_col > render_col {
            return buffer_col;
        }
    }
    content.len()
}

/// Produce the render form of `content`: tabs expanded to spaces, every other byte
/// copied as is.
#[must_use]
pub fn expand_tabs(content: &[u8]) -> Vec<u8> {
    let tab_count = content.iter().filter(|&&byte| byte == TAB).count();
    let mut render = Vec::with_capacity(content.len() + tab_count * (TAB_STOP - 1));
    for &byte in content {
        if byte == TAB {
            render.push(b' ');
            while !render.len().is_multiple_of(TAB_STOP) {
                render.push(b' ');
            }
        } else {
            render.push(byte);
        }
    }
    render
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"ab\tcd", 0, 0)]
    #[test_case(b"ab\tcd", 2, 2)]
    #[test_case(b"ab\tcd", 3, 8 ; "just past the tab")]
    #[test_case(b"ab\tcd", 5, 10)]
    #[test_case(b"ab\tcd", 99, 10 ; "past the end is clamped")]
    #[test_case(b"\t", 1, 8)]
    #[test_case(b"\t\t", 2, 16)]
    #[test_case(b"1234567\tx", 8, 8 ; "tab at column 7 is one wide")]
    #[test_case(b"12345678\tx", 9, 16 ; "tab at column 8 is eight wide")]
    #[test_case(b"", 0, 0)]
    fn test_to_render_column(content: &[u8], buffer_col: usize, expected: usize) {
        assert_eq!(to_render_column(content, buffer_col), expected);
    }

    #[test_case(b"ab\tcd", 0, 0)]
    #[test_case(b"ab\tcd", 2, 2 ; "start of tab")]
    #[test_case(b"ab\tcd", 5, 2 ; "inside the tab")]
    #[test_case(b"ab\tcd", 7, 2 ; "end of the tab")]
    #[test_case(b"ab\tcd", 8, 3)]
    #[test_case(b"ab\tcd", 9, 4)]
    #[test_case(b"ab\tcd", 10, 5 ; "end of line")]
    #[test_case(b"ab\tcd", 50, 5 ; "past the end")]
    #[test_case(b"", 3, 0)]
    fn test_to_buffer_column(content: &[u8], render_col: usize, expected: usize) {
        assert_eq!(to_buffer_column(content, render_col), expected);
    }

    /// For every buffer column (which by definition never falls inside a tab's
    /// expansion span), mapping to render and back is the identity.
    #[test]
    fn test_round_trip_for_every_column() {
        let lines: [&[u8]; 5] = [
            b"hello world",
            b"\tindented",
            b"a\tb\tc\t",
            b"\t\t\t",
            b"mixed \t tabs\tand  spaces",
        ];
        for content in lines {
            for buffer_col in 0..=content.len() {
                let render_col = to_render_column(content, buffer_col);
                assert_eq!(
                    to_buffer_column(content, render_col),
                    buffer_col,
                    "content: {:?}, buffer_col: {buffer_col}",
                    String::from_utf8_lossy(content)
                );
            }
        }
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs(b"ab\tcd"), b"ab      cd".to_vec());
        assert_eq!(expand_tabs(b"\t"), b"        ".to_vec());
        assert_eq!(expand_tabs(b"1234567\t"), b"1234567 ".to_vec());
        assert_eq!(expand_tabs(b"no tabs"), b"no tabs".to_vec());
        assert_eq!(expand_tabs(b""), Vec::<u8>::new());
    }

    #[test]
    fn test_render_len_matches_render_column_of_line_end() {
        let content = b"x\ty\t\tz";
        assert_eq!(
            expand_tabs(content).len(),
            to_render_column(content, content.len())
        );
    }
}
