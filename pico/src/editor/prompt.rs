// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single line text entry in the status message line, used by save-as and find.

use super::{EditorSession, refresh_screen, ui_str};
use crate::{Key, KeyDecoder, TerminalIo, ctrl_key};

/// Asks the user for a line of text. `template` has one `{}` placeholder for the text
/// typed so far. Returns `Ok(None)` if the user cancelled.
pub trait PromptProvider {
    /// # Errors
    ///
    /// Only fatal terminal I/O errors. Cancelling is `Ok(None)`.
    fn prompt(
        &mut self,
        session: &mut EditorSession,
        template: &str,
    ) -> miette::Result<Option<String>>;
}

/// What a single key does to the text being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptStep {
    Continue,
    Cancel,
    Submit,
}

/// Apply `key` to `input`.
pub fn apply_prompt_key(input: &mut String, key: Key) -> PromptStep {
    match key {
        Key::Delete | Key::Backspace => {
            input.pop();
        }
        Key::Byte(byte) if byte == ctrl_key(b'h') => {
            input.pop();
        }
        Key::Escape => return PromptStep::Cancel,
        key if key.is_enter() && !input.is_empty() => return PromptStep::Submit,
        key => {
            if let Some(ch) = key.as_printable_ascii() {
                input.push(ch);
            }
        }
    }
    PromptStep::Continue
}

/// Draws a frame after each key and reads keys with [`KeyDecoder`].
#[derive(Debug)]
pub struct TerminalPrompt<'a, T: TerminalIo + ?Sized> {
    terminal: &'a mut T,
}

impl<'a, T: TerminalIo + ?Sized> TerminalPrompt<'a, T> {
    pub fn new(terminal: &'a mut T) -> Self { Self { terminal } }
}

impl<T: TerminalIo + ?Sized> PromptProvider for TerminalPrompt<'_, T> {
    fn prompt(
        &mut self,
        session: &mut EditorSession,
        template: &str,
    ) -> miette::Result<Option<String>> {
        let mut input = String::new();
        loop {
            session.set_status_message(ui_str::fill_template(template, &input));
            refresh_screen(session, &mut *self.terminal)?;

            let key = KeyDecoder::read_key(&mut *self.terminal)?;
            match apply_prompt_key(&mut input, key) {
                PromptStep::Continue => {}
                PromptStep::Cancel => {
                    session.clear_status_message();
                    return Ok(None);
                }
                PromptStep::Submit => {
                    session.clear_status_message();
                    return Ok(Some(input));
                }
            }
        }
    }
}
