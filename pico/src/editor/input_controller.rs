// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Maps decoded [`Key`]s to [`EditorSession`] commands.
//!
//! | Key                      | Command                                  |
//! |--------------------------|------------------------------------------|
//! | `Enter`                  | [`EditorSession::insert_newline`]        |
//! | `Ctrl-Q`                 | quit (confirmed when there are changes)  |
//! | arrows                   | [`EditorSession::move_cursor`]           |
//! | `PageUp` / `PageDown`    | [`EditorSession::page_up`] / `page_down` |
//! | `Home` / `End`           | start / end of line                      |
//! | `Ctrl-F`                 | [`EditorSession::find`]                  |
//! | `Backspace`, `Ctrl-H`    | [`EditorSession::delete_char`]           |
//! | `Delete`                 | [`EditorSession::delete_forward`]        |
//! | `Ctrl-L`, `Escape`       | nothing                                  |
//! | `Ctrl-S`                 | [`EditorSession::save`]                  |
//! | anything else            | [`EditorSession::insert_char`]           |

use super::{CursorDirection, EditorSession, PromptProvider, TerminalPrompt, ui_str};
use crate::{Key, KeyDecoder, TerminalIo, ctrl_key};

/// Tells the main loop whether to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    Continue,
    Stop,
}

/// Holds the quit confirmation counter, the only state that lives across keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputController {
    quit_confirm_times: usize,
    quit_times_remaining: usize,
}

impl InputController {
    #[must_use]
    pub fn new(quit_confirm_times: usize) -> Self {
        Self {
            quit_confirm_times,
            quit_times_remaining: quit_confirm_times,
        }
    }

    #[must_use]
    pub fn quit_times_remaining(&self) -> usize { self.quit_times_remaining }

    /// Read one key from `terminal` and apply it.
    ///
    /// # Errors
    ///
    /// Fatal terminal I/O errors, from reading the key or from a prompt.
    pub fn process_keypress(
        &mut self,
        session: &mut EditorSession,
        terminal: &mut (impl TerminalIo + ?Sized),
    ) -> miette::Result<Continuation> {
        let key = KeyDecoder::read_key(&mut *terminal)?;
        let mut prompt = TerminalPrompt::new(terminal);
        self.apply_key(key, session, &mut prompt)
    }

    /// Apply `key` to `session`. Prompts (save-as, find) go through `prompt`.
    ///
    /// # Errors
    ///
    /// Fatal terminal I/O errors from `prompt`.
    pub fn apply_key(
        &mut self,
        key: Key,
        session: &mut EditorSession,
        prompt: &mut impl PromptProvider,
    ) -> miette::Result<Continuation> {
        if key.is_ctrl(b'q') {
            return Ok(self.try_quit(session));
        }

        match key {
            Key::ArrowUp => session.move_cursor(CursorDirection::Up),
            Key::ArrowDown => session.move_cursor(CursorDirection::Down),
            Key::ArrowLeft => session.move_cursor(CursorDirection::Left),
            Key::ArrowRight => session.move_cursor(CursorDirection::Right),
            Key::PageUp => session.page_up(),
            Key::PageDown => session.page_down(),
            Key::Home => session.move_to_line_start(),
            Key::End => session.move_to_line_end(),
            Key::Delete => session.delete_forward(),
            Key::Backspace => session.delete_char(),
            Key::Escape => {}
            Key::Byte(byte) => self.apply_byte(byte, session, prompt)?,
        }

        self.quit_times_remaining = self.quit_confirm_times;
        Ok(Continuation::Continue)
    }

    fn apply_byte(
        &mut self,
        byte: u8,
        session: &mut EditorSession,
        prompt: &mut impl PromptProvider,
    ) -> miette::Result<()> {
        const CTRL_F: u8 = ctrl_key(b'f');
        const CTRL_H: u8 = ctrl_key(b'h');
        const CTRL_L: u8 = ctrl_key(b'l');
        const CTRL_S: u8 = ctrl_key(b's');

        match byte {
            crate::ENTER => session.insert_newline(),
            CTRL_F => {
                session.find(prompt)?;
            }
            CTRL_H => session.delete_char(),
            CTRL_L => {}
            CTRL_S => {
                session.save(prompt)?;
            }
            _ => session.insert_char(byte),
        }
        Ok(())
    }

    fn try_quit(&mut self, session: &mut EditorSession) -> Continuation {
        if session.is_dirty() && self.quit_times_remaining > 0 {
            let warning = ui_str::quit_warning_message(self.quit_times_remaining);
            session.set_status_message(warning);
            tracing::debug!(
                message = "quit refused, unsaved changes",
                quit_times_remaining = self.quit_times_remaining
            );
            self.quit_times_remaining -= 1;
            return Continuation::Continue;
        }
        tracing::debug!(message = "quit");
        Continuation::Stop
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{Cursor, EditorConfig, TerminalMock, WindowSize};

    const CTRL_Q: Key = Key::Byte(ctrl_key(b'q'));

    /// Fails the test if a prompt is shown.
    #[derive(Debug)]
    struct NoPrompt;

    impl PromptProvider for NoPrompt {
        fn prompt(
            &mut self,
            _session: &mut EditorSession,
            template: &str,
        ) -> miette::Result<Option<String>> {
            panic!("unexpected prompt: {template}");
        }
    }

    fn session(content: &[u8]) -> EditorSession {
        EditorSession::with_content(
            WindowSize::new(24, 80),
            EditorConfig::default(),
            content,
        )
    }

    fn apply(
        controller: &mut InputController,
        session: &mut EditorSession,
        keys: &[Key],
    ) -> Continuation {
        let mut result = Continuation::Continue;
        for &key in keys {
            result = controller.apply_key(key, session, &mut NoPrompt).unwrap();
        }
        result
    }

    #[test]
    fn test_quit_clean_document_immediately() {
        let mut controller = InputController::new(2);
        let mut session = session(b"abc\n");
        assert_eq!(apply(&mut controller, &mut session, &[CTRL_Q]), Continuation::Stop);
    }

    #[test]
    fn test_quit_confirmation_counts_down() {
        let mut controller = InputController::new(2);
        let mut session = session(b"");
        apply(&mut controller, &mut session, &[Key::Byte(b'x')]);

        assert_eq!(
            apply(&mut controller, &mut session, &[CTRL_Q]),
            Continuation::Continue
        );
        assert_eq!(
            session.status_message().text(),
            "WARNING! File Has Unsaved Changes. Press CTRL-Q 2 more times to quit."
        );
        assert_eq!(controller.quit_times_remaining(), 1);

        assert_eq!(
            apply(&mut controller, &mut session, &[CTRL_Q]),
            Continuation::Continue
        );
        assert_eq!(
            session.status_message().text(),
            "WARNING! File Has Unsaved Changes. Press CTRL-Q 1 more times to quit."
        );
        assert_eq!(controller.quit_times_remaining(), 0);

        assert_eq!(apply(&mut controller, &mut session, &[CTRL_Q]), Continuation::Stop);
    }

    #[test]
    fn test_other_key_resets_quit_counter() {
        let mut controller = InputController::new(2);
        let mut session = session(b"");
        apply(&mut controller, &mut session, &[Key::Byte(b'x'), CTRL_Q]);
        assert_eq!(controller.quit_times_remaining(), 1);

        apply(&mut controller, &mut session, &[Key::ArrowLeft]);
        assert_eq!(controller.quit_times_remaining(), 2);

        let result = apply(&mut controller, &mut session, &[CTRL_Q, CTRL_Q]);
        assert_eq!(result, Continuation::Continue);
    }

    #[test_case(Key::ArrowDown, Cursor::new(1, 1) ; "arrow down")]
    #[test_case(Key::ArrowRight, Cursor::new(2, 0) ; "arrow right")]
    #[test_case(Key::ArrowLeft, Cursor::new(0, 0) ; "arrow left")]
    #[test_case(Key::Home, Cursor::new(0, 0) ; "home")]
    #[test_case(Key::End, Cursor::new(3, 0) ; "end")]
    #[test_case(Key::PageDown, Cursor::new(0, 2) ; "page down")]
    #[test_case(Key::Escape, Cursor::new(1, 0) ; "escape")]
    #[test_case(Key::Byte(ctrl_key(b'l')), Cursor::new(1, 0) ; "ctrl l")]
    fn test_navigation_keys(key: Key, expected: Cursor) {
        let mut controller = InputController::new(2);
        let mut session = session(b"abc\nd\n");
        apply(&mut controller, &mut session, &[Key::ArrowRight, key]);
        assert_eq!(session.cursor(), expected);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_editing_keys() {
        let mut controller = InputController::new(2);
        let mut session = session(b"");
        let keys = [
            Key::Byte(b'a'),
            Key::Byte(b'b'),
            Key::Byte(b'\r'),
            Key::Byte(b'c'),
            Key::Byte(b'\t'),
            Key::Backspace,
            Key::Byte(ctrl_key(b'h')),
            Key::Home,
            Key::Delete,
        ];
        apply(&mut controller, &mut session, &keys);
        let lines: Vec<&[u8]> = session.buffer().iter().map(|it| it.content()).collect();
        assert_eq!(lines, vec![&b"ab"[..], &b""[..]]);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_process_keypress_reads_from_terminal() {
        let mut controller = InputController::new(2);
        let mut session = session(b"abc\n");
        // Right arrow, then Ctrl-Q.
        let mut terminal = TerminalMock::new(b"\x1b[C\x11");

        let result = controller.process_keypress(&mut session, &mut terminal).unwrap();
        assert_eq!(result, Continuation::Continue);
        assert_eq!(session.cursor(), Cursor::new(1, 0));

        let result = controller.process_keypress(&mut session, &mut terminal).unwrap();
        assert_eq!(result, Continuation::Stop);
    }

    #[test]
    fn test_ctrl_f_prompts_through_terminal() {
        let mut controller = InputController::new(2);
        let mut session = session(b"ab\nxcdy\n");
        let mut terminal = TerminalMock::new(b"\x06cd\r");

        controller.process_keypress(&mut session, &mut terminal).unwrap();
        assert_eq!(session.cursor(), Cursor::new(1, 1));
        assert!(!terminal.has_pending_input());
    }
}
