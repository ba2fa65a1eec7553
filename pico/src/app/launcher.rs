// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The main loop: draw a frame, read one key, apply it, repeat.

use crate::{CLEAR_SCREEN, CURSOR_HOME, Continuation, EditorConfig, EditorSession,
            InputController, TerminalIo, refresh_screen, ui_str};

/// Run an editing session on `terminal` until the user quits.
///
/// The terminal must already be in raw mode. The screen is cleared on the way out,
/// whether the session ended normally or not.
///
/// # Errors
///
/// Fatal errors only: the window size can't be queried, `maybe_file_path` can't be
/// read, or terminal I/O fails.
pub fn run_app(
    maybe_file_path: Option<&str>,
    terminal: &mut (impl TerminalIo + ?Sized),
    config: EditorConfig,
) -> miette::Result<()> {
    let result = try_run_session(maybe_file_path, terminal, config);
    if let Err(ref error) = result {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not run pico", error = ?error);
    }
    let clear_result = clear_screen(terminal);
    result?;
    clear_result
}

fn try_run_session(
    maybe_file_path: Option<&str>,
    terminal: &mut (impl TerminalIo + ?Sized),
    config: EditorConfig,
) -> miette::Result<()> {
    let window_size = terminal.query_window_size()?;
    tracing::debug!(message = "window size", ?window_size);

    let mut session = EditorSession::new(window_size, config);
    if let Some(file_path) = maybe_file_path {
        session.load(file_path)?;
    }
    session.set_status_message(ui_str::HELP_MESSAGE);

    let mut controller = InputController::new(config.quit_confirm_times);
    loop {
        refresh_screen(&mut session, terminal)?;
        if controller.process_keypress(&mut session, terminal)? == Continuation::Stop {
            break;
        }
    }
    Ok(())
}

/// Clear the screen and move the cursor home.
///
/// # Errors
///
/// If writing to the terminal fails.
pub fn clear_screen(terminal: &mut (impl TerminalIo + ?Sized)) -> miette::Result<()> {
    let mut acc = Vec::with_capacity(CLEAR_SCREEN.len() + CURSOR_HOME.len());
    acc.extend_from_slice(CLEAR_SCREEN);
    acc.extend_from_slice(CURSOR_HOME);
    terminal.write_bytes(&acc)
}
