// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::{Duration, Instant};

/// A one line message shown under the status bar. It stops being drawn once it is
/// older than the configured timeout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: Option<Instant>,
}

impl StatusMessage {
    pub fn set(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.set_at = Some(now);
    }

    pub fn clear(&mut self, now: Instant) { self.set("", now); }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    /// The text to draw at `now`, if any.
    #[must_use]
    pub fn visible_text(&self, now: Instant, timeout: Duration) -> Option<&str> {
        let set_at = self.set_at?;
        if self.text.is_empty() || now.saturating_duration_since(set_at) >= timeout {
            return None;
        }
        Some(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[test]
    fn test_unset_message_is_hidden() {
        let message = StatusMessage::default();
        assert_eq!(message.visible_text(Instant::now(), TIMEOUT), None);
    }

    #[test]
    fn test_message_expires() {
        let start = Instant::now();
        let mut message = StatusMessage::default();
        message.set("hello", start);

        assert_eq!(message.visible_text(start, TIMEOUT), Some("hello"));
        assert_eq!(
            message.visible_text(start + Duration::from_millis(4_999), TIMEOUT),
            Some("hello")
        );
        assert_eq!(message.visible_text(start + TIMEOUT, TIMEOUT), None);
    }

    #[test]
    fn test_cleared_message_is_hidden() {
        let now = Instant::now();
        let mut message = StatusMessage::default();
        message.set("hello", now);
        message.clear(now);
        assert_eq!(message.text(), "");
        assert_eq!(message.visible_text(now, TIMEOUT), None);
    }
}
