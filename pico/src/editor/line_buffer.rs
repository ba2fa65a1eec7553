// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The document model: an ordered collection of [`Line`]s plus a dirty counter.
//!
//! Line index `i` is line number `i` (0-based). All mutations go through
//! [`Line::get_mut`], so each touched line's render form is rebuilt before any caller
//! can observe it. Every successful mutation increments the dirty counter.

use std::slice::Iter;

use super::Line;
use crate::ENTER;

const NEW_LINE: u8 = b'\n';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineBuffer {
    lines: Vec<Line>,
    dirty: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Parse `bytes` into lines, splitting on `\n` and stripping any trailing `\r` /
    /// `\n` from each line. A final line without a terminator is kept. The returned
    /// buffer is clean.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let lines = bytes
            .split_inclusive(|&byte| byte == NEW_LINE)
            .map(|raw_line| {
                let mut end = raw_line.len();
                while end > 0 && matches!(raw_line[end - 1], NEW_LINE | ENTER) {
                    end -= 1;
                }
                Line::new(&raw_line[..end])
            })
            .collect();
        Self { lines, dirty: 0 }
    }

    /// Each line's content followed by a single `\n`, in line order.
    #[must_use]
    pub fn to_serialized_form(&self) -> Vec<u8> {
        let total_len = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut acc = Vec::with_capacity(total_len);
        for line in &self.lines {
            acc.extend_from_slice(line.content());
            acc.push(NEW_LINE);
        }
        acc
    }

    #[must_use]
    pub fn len(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Line> { self.lines.get(index) }

    pub fn iter(&self) -> Iter<'_, Line> { self.lines.iter() }

    #[must_use]
    pub fn is_dirty(&self) -> bool { self.dirty > 0 }

    #[must_use]
    pub fn dirty_count(&self) -> usize { self.dirty }

    pub fn reset_dirty(&mut self) { self.dirty = 0; }

    /// Insert a new line at `index`, which may equal [`Self::len`] to append. Returns
    /// `false` (and changes nothing) if `index` is out of range.
    pub fn insert_line(&mut self, index: usize, content: &[u8]) -> bool {
        if index > self.lines.len() {
            return false;
        }
        self.lines.insert(index, Line::new(content));
        self.dirty += 1;
        true
    }

    /// Remove the line at `index`. Returns `false` if `index` is out of range.
    pub fn delete_line(&mut self, index: usize) -> bool {
        if index >= self.lines.len() {
            return false;
        }
        self.lines.remove(index);
        self.dirty += 1;
        true
    }

    /// Insert `byte` at `col` in line `line_index`. A `col` past the end of the line is
    /// clamped to the line's length.
    pub fn insert_char(&mut self, line_index: usize, col: usize, byte: u8) -> bool {
        let Some(line) = self.lines.get_mut(line_index) else {
            return false;
        };
        let mut content = line.get_mut();
        let col = col.min(content.len());
        content.insert(col, byte);
        drop(content);
        self.dirty += 1;
        true
    }

    /// Remove the byte at `col` in line `line_index`. An out of range position is
    /// ignored.
    pub fn delete_char(&mut self, line_index: usize, col: usize) -> bool {
        let Some(line) = self.lines.get_mut(line_index) else {
            return false;
        };
        if col >= line.len() {
            return false;
        }
        line.get_mut().remove(col);
        self.dirty += 1;
        true
    }

    /// Concatenate `bytes` onto the end of line `line_index`.
    pub fn append_string(&mut self, line_index: usize, bytes: &[u8]) -> bool {
        let Some(line) = self.lines.get_mut(line_index) else {
            return false;
        };
        line.get_mut().extend_from_slice(bytes);
        self.dirty += 1;
        true
    }

    /// Cut line `line_index` down to its first `col` bytes.
    pub fn truncate_line(&mut self, line_index: usize, col: usize) -> bool {
        let Some(line) = self.lines.get_mut(line_index) else {
            return false;
        };
        line.get_mut().truncate(col);
        self.dirty += 1;
        true
    }
}

impl<'a> IntoIterator for &'a LineBuffer {
    type Item = &'a Line;
    type IntoIter = Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter { self.lines.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn contents(buffer: &LineBuffer) -> Vec<String> {
        buffer
            .iter()
            .map(|line| String::from_utf8_lossy(line.content()).to_string())
            .collect()
    }

    #[test_case(b"", &[] ; "empty file")]
    #[test_case(b"abc", &["abc"] ; "no trailing newline")]
    #[test_case(b"abc\n", &["abc"] ; "trailing newline")]
    #[test_case(b"abc\nde\n", &["abc", "de"] ; "two lines")]
    #[test_case(b"abc\r\nde\r\n", &["abc", "de"] ; "crlf stripped")]
    #[test_case(b"\n\n", &["", ""] ; "blank lines")]
    fn test_from_bytes(input: &[u8], expected: &[&str]) {
        let buffer = LineBuffer::from_bytes(input);
        assert_eq!(contents(&buffer), expected);
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_round_trip_with_lf_endings() {
        let original = b"fn main() {\n\tprintln!();\n}\n";
        let buffer = LineBuffer::from_bytes(original);
        assert_eq!(buffer.to_serialized_form(), original.to_vec());
    }

    #[test]
    fn test_crlf_round_trip_is_lossy() {
        let buffer = LineBuffer::from_bytes(b"a\r\nb\r\n");
        assert_eq!(buffer.to_serialized_form(), b"a\nb\n".to_vec());
    }

    #[test]
    fn test_insert_line_bounds() {
        let mut buffer = LineBuffer::from_bytes(b"a\nb\n");
        assert!(!buffer.insert_line(3, b"x"));
        assert!(!buffer.is_dirty());

        assert!(buffer.insert_line(2, b"c"));
        assert!(buffer.insert_line(0, b"z"));
        assert_eq!(contents(&buffer), vec!["z", "a", "b", "c"]);
        assert_eq!(buffer.dirty_count(), 2);
    }

    #[test]
    fn test_delete_line_bounds() {
        let mut buffer = LineBuffer::from_bytes(b"a\nb\n");
        assert!(!buffer.delete_line(2));
        assert!(buffer.delete_line(0));
        assert_eq!(contents(&buffer), vec!["b"]);
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_insert_char_clamps_column() {
        let mut buffer = LineBuffer::from_bytes(b"ab\n");
        assert!(buffer.insert_char(0, 99, b'c'));
        assert_eq!(contents(&buffer), vec!["abc"]);
        assert!(!buffer.insert_char(1, 0, b'x'));
    }

    #[test]
    fn test_insert_then_delete_restores_line() {
        let original = LineBuffer::from_bytes(b"a\tbc\n");
        let mut buffer = original.clone();

        assert!(buffer.insert_char(0, 1, b'\t'));
        assert_eq!(
            buffer.get(0).map(Line::render),
            Some(&b"a               bc"[..])
        );
        assert!(buffer.delete_char(0, 1));

        let (line, original_line) = (buffer.get(0), original.get(0));
        assert_eq!(line.map(Line::content), original_line.map(Line::content));
        assert_eq!(line.map(Line::render), original_line.map(Line::render));
    }

    #[test]
    fn test_delete_char_out_of_range_is_ignored() {
        let mut buffer = LineBuffer::from_bytes(b"ab\n");
        assert!(!buffer.delete_char(0, 2));
        assert!(!buffer.delete_char(5, 0));
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_append_and_truncate() {
        let mut buffer = LineBuffer::from_bytes(b"ab\ncd\n");
        assert!(buffer.append_string(0, b"\tx"));
        assert_eq!(buffer.get(0).map(Line::render), Some(&b"ab      x"[..]));

        assert!(buffer.truncate_line(0, 1));
        assert_eq!(contents(&buffer), vec!["a", "cd"]);
        assert_eq!(buffer.dirty_count(), 2);

        buffer.reset_dirty();
        assert!(!buffer.is_dirty());
    }
}
