//! Status Bar State
//!
//! Notifications raised anywhere in the app. The latest one is shown as a
//! toast until it expires; older ones stay in a bounded history.

use chrono::{DateTime, Local, TimeDelta};
use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Action started/in progress
    Running,
    /// Action completed successfully
    Success,
    /// Action failed with error
    Error,
    /// Warning (non-fatal issue)
    Warning,
    /// Informational message
    Info,
}

impl StatusKind {
    /// Get the emoji for this status kind
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single notification
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    /// Short headline, e.g. "Workflow Triggered"
    pub title: String,
    pub description: String,
    /// The part of the app that raised it
    pub source: String,
}

impl StatusMessage {
    /// Create a new status message with current timestamp
    pub fn new(
        kind: StatusKind,
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            title: title.into(),
            description: description.into(),
            source: source.into(),
        }
    }
}

/// Status bar state - history of messages
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Message history (newest at back)
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
    /// How long the latest message stays visible as a toast
    pub toast_ttl: TimeDelta,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 100,
            toast_ttl: TimeDelta::seconds(5),
        }
    }
}

impl StatusBarState {
    /// Values beyond what a `TimeDelta` can hold keep the toast up indefinitely
    pub fn with_toast_seconds(seconds: u64) -> Self {
        let seconds = i64::try_from(seconds).unwrap_or(i64::MAX);
        Self {
            toast_ttl: TimeDelta::try_seconds(seconds).unwrap_or(TimeDelta::MAX),
            ..Self::default()
        }
    }

    /// Get the latest message (if any)
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Latest message, if it has not expired at `now`
    pub fn active_toast(&self, now: DateTime<Local>) -> Option<&StatusMessage> {
        self.latest()
            .filter(|msg| now.signed_duration_since(msg.timestamp) < self.toast_ttl)
    }

    /// Push a new message, trimming oldest if over limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut state = StatusBarState::default();
        for i in 0..150 {
            state.push(StatusMessage::new(
                StatusKind::Info,
                format!("msg {}", i),
                "",
                "test",
            ));
        }
        assert_eq!(state.messages.len(), 100);
        assert_eq!(state.messages.front().unwrap().title, "msg 50");
        assert_eq!(state.latest().unwrap().title, "msg 149");
    }

    #[test]
    fn test_toast_expires() {
        let mut state = StatusBarState::with_toast_seconds(5);
        let msg = StatusMessage::new(StatusKind::Success, "Workflow Triggered", "", "test");
        let created = msg.timestamp;
        state.push(msg);

        assert!(state.active_toast(created).is_some());
        assert!(state
            .active_toast(created + TimeDelta::milliseconds(4_999))
            .is_some());
        assert!(state.active_toast(created + TimeDelta::seconds(5)).is_none());
        // Expired toasts stay in the history
        assert!(state.latest().is_some());
    }

    #[test]
    fn test_huge_toast_duration_saturates() {
        for seconds in [10_000_000_000_000_000, u64::MAX] {
            let mut state = StatusBarState::with_toast_seconds(seconds);
            assert_eq!(state.toast_ttl, TimeDelta::MAX);

            state.push(StatusMessage::new(StatusKind::Info, "Hello", "", "test"));
            let later = Local::now() + TimeDelta::days(365 * 100);
            assert!(state.active_toast(later).is_some());
        }
    }
}
