// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Formatter, Result},
          ops::{Deref, DerefMut}};

use super::coordinate_mapper::{expand_tabs, to_buffer_column, to_render_column};

/// One line of the document.
///
/// # Fields
///
/// Please don't try to mutate these directly, they are private to guard from
/// unintentional mutation. Use [`Line::get_mut`].
///
/// ## `content`
///
/// Raw bytes of the line, without the trailing newline.
///
/// ## `render`
///
/// Derived from `content` with tabs expanded (see [`expand_tabs`]). It is recomputed
/// every time `content` changes, so it is always consistent with it.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Line {
    content: Vec<u8>,
    render: Vec<u8>,
}

impl Line {
    #[must_use]
    pub fn new(content: &[u8]) -> Self {
        Self {
            content: content.to_vec(),
            render: expand_tabs(content),
        }
    }

    #[must_use]
    pub fn content(&self) -> &[u8] { &self.content }

    #[must_use]
    pub fn render(&self) -> &[u8] { &self.render }

    /// Length of `content` in bytes.
    #[must_use]
    pub fn len(&self) -> usize { self.content.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.content.is_empty() }

    /// Length of `render` in bytes (which is also its display width).
    #[must_use]
    pub fn render_len(&self) -> usize { self.render.len() }

    /// See [`to_render_column`].
    #[must_use]
    pub fn render_column(&self, buffer_col: usize) -> usize {
        to_render_column(&self.content, buffer_col)
    }

    /// See [`to_buffer_column`].
    #[must_use]
    pub fn buffer_column(&self, render_col: usize) -> usize {
        to_buffer_column(&self.content, render_col)
    }

    /// The only way to change `content`. The returned [`LineMut`] derefs to the content
    /// bytes, and recomputes `render` when it is dropped.
    pub fn get_mut(&mut self) -> LineMut<'_> {
        LineMut {
            content: &mut self.content,
            render: &mut self.render,
        }
    }
}

impl Debug for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Line({:?})", String::from_utf8_lossy(&self.content))
    }
}

/// Mutable access to a [`Line`]'s content.
///
/// Use of [`Drop`] to close the transaction: when this goes out of scope, the `render`
/// form is rebuilt from the new content. No code path can read a stale `render`.
#[derive(Debug)]
pub struct LineMut<'a> {
    content: &'a mut Vec<u8>,
    render: &'a mut Vec<u8>,
}

impl Deref for LineMut<'_> {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target { self.content }
}

impl DerefMut for LineMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target { self.content }
}

impl Drop for LineMut<'_> {
    fn drop(&mut self) { *self.render = expand_tabs(self.content); }
}
