// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// Tunables for an [`EditorSession`](super::EditorSession). There is no config file;
/// tests construct other values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorConfig {
    /// How many extra times `Ctrl-Q` must be pressed to quit with unsaved changes.
    pub quit_confirm_times: usize,
    /// Status messages older than this are not drawn.
    pub status_message_timeout: Duration,
    /// Terminal rows used by the status bar and the message line.
    pub reserved_rows: u16,
}

pub mod editor_config_defaults {
    use std::time::Duration;

    pub const QUIT_CONFIRM_TIMES: usize = 2;
    pub const STATUS_MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);
    pub const RESERVED_ROWS: u16 = 2;
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            quit_confirm_times: editor_config_defaults::QUIT_CONFIRM_TIMES,
            status_message_timeout: editor_config_defaults::STATUS_MESSAGE_TIMEOUT,
            reserved_rows: editor_config_defaults::RESERVED_ROWS,
        }
    }
}
