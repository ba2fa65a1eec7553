// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`EditorSession`] owns all the state of one editing session: the [`LineBuffer`],
//! the cursor, the [`Viewport`], the file identity and the status message. There are
//! no globals; every component gets the session passed in by reference.
//!
//! # Cursor
//!
//! The cursor is `(col, line)` in buffer coordinates. `line` may equal the number of
//! lines (the implicit empty line past the end of the document), in which case `col`
//! is 0. `col` is never greater than the addressed line's length. The render column is
//! derived from it in [`EditorSession::scroll`], right before each frame is drawn.

use std::{fs::{self, OpenOptions},
          io::{self, Write},
          path::{Path, PathBuf},
          time::Instant};

use strum_macros::EnumIter;

use super::{EditorConfig, Line, LineBuffer, PromptProvider, StatusMessage, Viewport,
            ui_str};
use crate::{PicoError, WindowSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Index into the line's content.
    pub col: usize,
    /// Index into the [`LineBuffer`].
    pub line: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(col: usize, line: usize) -> Self { Self { col, line } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum CursorDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Result of [`EditorSession::save`]. None of these are errors, the session keeps
/// running and the outcome is also shown in the status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written { bytes: usize },
    /// The user cancelled the save-as prompt.
    Aborted,
    Failed { error: String },
}

#[derive(Debug)]
pub struct EditorSession {
    buffer: LineBuffer,
    cursor: Cursor,
    render_col: usize,
    viewport: Viewport,
    file_path: Option<PathBuf>,
    status_message: StatusMessage,
    config: EditorConfig,
}

impl EditorSession {
    #[must_use]
    pub fn new(window_size: WindowSize, config: EditorConfig) -> Self {
        Self {
            buffer: LineBuffer::new(),
            cursor: Cursor::default(),
            render_col: 0,
            viewport: Viewport::new(window_size, config.reserved_rows),
            file_path: None,
            status_message: StatusMessage::default(),
            config,
        }
    }

    /// Create a session on an in memory document. The buffer starts clean.
    #[must_use]
    pub fn with_content(
        window_size: WindowSize,
        config: EditorConfig,
        content: &[u8],
    ) -> Self {
        let mut it = Self::new(window_size, config);
        it.buffer = LineBuffer::from_bytes(content);
        it
    }

    // Accessors.

    #[must_use]
    pub fn buffer(&self) -> &LineBuffer { &self.buffer }

    #[must_use]
    pub fn cursor(&self) -> Cursor { self.cursor }

    #[must_use]
    pub fn render_col(&self) -> usize { self.render_col }

    #[must_use]
    pub fn viewport(&self) -> &Viewport { &self.viewport }

    #[must_use]
    pub fn config(&self) -> &EditorConfig { &self.config }

    #[must_use]
    pub fn file_path(&self) -> Option<&Path> { self.file_path.as_deref() }

    #[must_use]
    pub fn status_message(&self) -> &StatusMessage { &self.status_message }

    #[must_use]
    pub fn is_dirty(&self) -> bool { self.buffer.is_dirty() }

    pub fn set_status_message(&mut self, text: impl Into<String>) {
        self.status_message.set(text, Instant::now());
    }

    pub fn clear_status_message(&mut self) { self.status_message.clear(Instant::now()); }

    fn current_line(&self) -> Option<&Line> { self.buffer.get(self.cursor.line) }

    fn current_line_len(&self) -> usize { self.current_line().map_or(0, Line::len) }

    // Load.

    /// Replace the whole document with the contents of `path`. Failing to read the file
    /// is fatal.
    pub fn load(&mut self, path: impl AsRef<Path>) -> miette::Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| PicoError::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.buffer = LineBuffer::from_bytes(&bytes);
        self.file_path = Some(path.to_path_buf());
        self.cursor = Cursor::default();
        self.render_col = 0;
        tracing::debug!(
            message = "loaded file",
            path = %path.display(),
            line_count = self.buffer.len()
        );
        Ok(())
    }

    // Editing.

    pub fn insert_char(&mut self, byte: u8) {
        if self.cursor.line == self.buffer.len() {
            self.buffer.insert_line(self.buffer.len(), b"");
        }
        self.buffer.insert_char(self.cursor.line, self.cursor.col, byte);
        self.cursor.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let Cursor { col, line } = self.cursor;
        if col == 0 {
            self.buffer.insert_line(line, b"");
        } else {
            let suffix = self
                .current_line()
                .map(|it| it.content()[col.min(it.len())..].to_vec())
                .unwrap_or_default();
            self.buffer.insert_line(line + 1, &suffix);
            self.buffer.truncate_line(line, col);
        }
        self.cursor = Cursor::new(0, line + 1);
    }

    /// Backspace: remove the byte before the cursor, or merge the current line into
    /// the previous one when the cursor is at column 0.
    pub fn delete_char(&mut self) {
        let Cursor { col, line } = self.cursor;
        if line >= self.buffer.len() || (col == 0 && line == 0) {
            return;
        }
        if col > 0 {
            self.buffer.delete_char(line, col - 1);
            self.cursor.col -= 1;
        } else {
            let Some(current) = self.buffer.get(line).map(|it| it.content().to_vec())
            else {
                return;
            };
            let prev_len = self.buffer.get(line - 1).map_or(0, Line::len);
            self.buffer.append_string(line - 1, &current);
            self.buffer.delete_line(line);
            self.cursor = Cursor::new(prev_len, line - 1);
        }
    }

    /// Delete key: remove the byte under the cursor. At the end of a line the next
    /// line is joined onto it.
    pub fn delete_forward(&mut self) {
        let Cursor { col, line } = self.cursor;
        if line >= self.buffer.len() {
            return;
        }
        if col < self.current_line_len() {
            self.cursor.col += 1;
        } else if line + 1 < self.buffer.len() {
            self.cursor = Cursor::new(0, line + 1);
        } else {
            return;
        }
        self.delete_char();
    }

    // Navigation.

    pub fn move_cursor(&mut self, direction: CursorDirection) {
        match direction {
            CursorDirection::Up => {
                self.cursor.line = self.cursor.line.saturating_sub(1);
            }
            CursorDirection::Down => {
                if self.cursor.line < self.buffer.len() {
                    self.cursor.line += 1;
                }
            }
            CursorDirection::Left => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
            }
            CursorDirection::Right => {
                if self.cursor.col < self.current_line_len() {
                    self.cursor.col += 1;
                }
            }
        }
        self.snap_col_to_line();
    }

    pub fn move_to_line_start(&mut self) { self.cursor.col = 0; }

    pub fn move_to_line_end(&mut self) {
        if self.cursor.line < self.buffer.len() {
            self.cursor.col = self.current_line_len();
        }
    }

    /// Jump to the top of the screen, then move up one screenful.
    pub fn page_up(&mut self) {
        self.cursor.line = self.viewport.row_offset;
        for _ in 0..self.viewport.screen_rows {
            self.move_cursor(CursorDirection::Up);
        }
        self.snap_col_to_line();
    }

    /// Jump to the bottom of the screen, then move down one screenful.
    pub fn page_down(&mut self) {
        let bottom =
            (self.viewport.row_offset + self.viewport.screen_rows).saturating_sub(1);
        self.cursor.line = bottom.min(self.buffer.len());
        for _ in 0..self.viewport.screen_rows {
            self.move_cursor(CursorDirection::Down);
        }
        self.snap_col_to_line();
    }

    fn snap_col_to_line(&mut self) {
        self.cursor.col = self.cursor.col.min(self.current_line_len());
    }

    /// Recompute the render column and clamp the viewport so the cursor is visible.
    /// Called once per frame.
    pub fn scroll(&mut self) {
        self.render_col = self
            .current_line()
            .map_or(0, |line| line.render_column(self.cursor.col));
        self.viewport.scroll_to(self.cursor.line, self.render_col);
    }

    // Search.

    /// Move the cursor to the first occurrence of `query` in the rendered lines,
    /// scanning from the top. Returns `false` and leaves the cursor alone on a miss.
    pub fn find_query(&mut self, query: &str) -> bool {
        let needle = query.as_bytes();
        if needle.is_empty() {
            return false;
        }
        let found = self.buffer.iter().enumerate().find_map(|(index, line)| {
            line.render()
                .windows(needle.len())
                .position(|window| window == needle)
                .map(|render_col| (index, line.buffer_column(render_col)))
        });
        match found {
            Some((line, col)) => {
                self.cursor = Cursor::new(col, line);
                // Pushed past the end so the next scroll() brings the match to the top.
                self.viewport.row_offset = self.buffer.len();
                true
            }
            None => false,
        }
    }

    /// Ask for a query with `prompt`, then [`Self::find_query`]. A cancelled prompt is
    /// not an error.
    pub fn find(&mut self, prompt: &mut impl PromptProvider) -> miette::Result<bool> {
        let Some(query) = prompt.prompt(self, ui_str::SEARCH_PROMPT)? else {
            return Ok(false);
        };
        let found = self.find_query(&query);
        if !found {
            self.set_status_message(ui_str::no_match_message(&query));
        }
        tracing::debug!(message = "find", %query, found);
        Ok(found)
    }

    // Save.

    /// Write the document to its file, asking for a file name first if there is none.
    /// Only fatal terminal errors from the prompt are returned as `Err`.
    pub fn save(
        &mut self,
        prompt: &mut impl PromptProvider,
    ) -> miette::Result<SaveOutcome> {
        if self.file_path.is_none() {
            match prompt.prompt(self, ui_str::SAVE_AS_PROMPT)? {
                Some(file_name) => self.file_path = Some(PathBuf::from(file_name)),
                None => {
                    self.set_status_message(ui_str::SAVE_ABORTED);
                    tracing::debug!(message = "save aborted");
                    return Ok(SaveOutcome::Aborted);
                }
            }
        }
        Ok(self.save_to_file_path())
    }

    fn save_to_file_path(&mut self) -> SaveOutcome {
        let Some(path) = self.file_path.clone() else {
            return SaveOutcome::Aborted;
        };
        let bytes = self.buffer.to_serialized_form();
        match write_file(&path, &bytes) {
            Ok(()) => {
                self.buffer.reset_dirty();
                self.set_status_message(ui_str::bytes_written_message(bytes.len()));
                tracing::info!(
                    message = "saved",
                    path = %path.display(),
                    bytes = bytes.len()
                );
                SaveOutcome::Written { bytes: bytes.len() }
            }
            Err(error) => {
                self.set_status_message(ui_str::save_failed_message(&error));
                tracing::warn!(message = "save failed", path = %path.display(), %error);
                SaveOutcome::Failed {
                    error: error.to_string(),
                }
            }
        }
    }
}

/// Open or create `path`, truncate it to `bytes.len()` and write `bytes`.
fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }
    let mut file = options.open(path)?;
    file.set_len(bytes.len() as u64)?;
    file.write_all(bytes)?;
    Ok(())
}
