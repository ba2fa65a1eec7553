// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User facing text. Prompt templates contain a single `{}` placeholder that is
//! replaced with the text typed so far (see [`fill_template`]).

use std::io;

pub const NO_NAME: &str = "[No Name]";
pub const MODIFIED: &str = "(modified)";
pub const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";
pub const SAVE_AS_PROMPT: &str = "Save As: {} (ESC To Cancel)";
pub const SEARCH_PROMPT: &str = "Search: {} (ESC to cancel)";
pub const SAVE_ABORTED: &str = "Save Aborted.";
pub const TEMPLATE_PLACEHOLDER: &str = "{}";

#[must_use]
pub fn fill_template(template: &str, typed: &str) -> String {
    template.replacen(TEMPLATE_PLACEHOLDER, typed, 1)
}

#[must_use]
pub fn welcome_banner() -> String {
    format!("Pico -- Light as a Feather -- Version {}", env!("CARGO_PKG_VERSION"))
}

#[must_use]
pub fn bytes_written_message(bytes: usize) -> String {
    format!("{bytes} bytes written to disk")
}

#[must_use]
pub fn save_failed_message(error: &io::Error) -> String {
    format!("Cannot Save! I/O Error: {error}")
}

#[must_use]
pub fn no_match_message(query: &str) -> String { format!("No match for \"{query}\"") }

#[must_use]
pub fn quit_warning_message(times_remaining: usize) -> String {
    format!(
        "WARNING! File Has Unsaved Changes. Press CTRL-Q {times_remaining} more times to \
         quit."
    )
}

/// File names longer than this are cut off in the status bar.
pub const STATUS_BAR_FILE_NAME_MAX_CHARS: usize = 20;

/// Left side of the status bar.
#[must_use]
pub fn status_bar_file_info(
    file_name: Option<&str>,
    line_count: usize,
    is_dirty: bool,
) -> String {
    let file_name: String = file_name
        .unwrap_or(NO_NAME)
        .chars()
        .take(STATUS_BAR_FILE_NAME_MAX_CHARS)
        .collect();
    format!(
        "{} - {} lines {}",
        file_name,
        line_count,
        if is_dirty { MODIFIED } else { "" }
    )
}

/// Right side of the status bar.
#[must_use]
pub fn status_bar_position(cursor_line: usize, line_count: usize) -> String {
    format!("{} / {}", cursor_line + 1, line_count)
}
