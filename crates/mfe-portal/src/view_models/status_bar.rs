//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar and the toast.

use crate::state::{AppState, StatusKind, StatusMessage};
use chrono::{DateTime, Local};
use portal_theme::Theme;
use ratatui::style::{Color, Modifier, Style};

fn kind_color(theme: &Theme, kind: StatusKind) -> Color {
    match kind {
        StatusKind::Running => theme.status_warning,
        StatusKind::Success => theme.status_success,
        StatusKind::Error => theme.status_error,
        StatusKind::Warning => theme.status_warning,
        StatusKind::Info => theme.status_info,
    }
}

fn one_line(msg: &StatusMessage) -> String {
    if msg.description.is_empty() {
        msg.title.clone()
    } else {
        format!("{}: {}", msg.title, msg.description)
    }
}

/// View model for rendering the status bar
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// Timestamp formatted for display (e.g., "14:32:05")
    pub timestamp: String,
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;

        match state.status_bar.latest() {
            Some(msg) => Self {
                emoji: msg.kind.emoji(),
                message: one_line(msg),
                timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                source: msg.source.clone(),
                message_style: Style::default()
                    .fg(kind_color(theme, msg.kind))
                    .add_modifier(Modifier::BOLD),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
            },
            None => Self {
                emoji: "👋",
                message: "Welcome to the Developer Portal".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style: Style::default().fg(theme.text_muted),
            },
        }
    }
}

/// The notification currently shown as a toast
#[derive(Debug, Clone)]
pub struct ToastViewModel {
    pub title: String,
    pub description: String,
    pub emoji: &'static str,
    pub accent: Color,
}

impl ToastViewModel {
    /// `None` once the latest notification has expired
    pub fn from_state(state: &AppState, now: DateTime<Local>) -> Option<Self> {
        let msg = state.status_bar.active_toast(now)?;
        Some(Self {
            title: msg.title.clone(),
            description: msg.description.clone(),
            emoji: msg.kind.emoji(),
            accent: kind_color(&state.theme, msg.kind),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatusMessage;
    use chrono::TimeDelta;

    #[test]
    fn test_welcome_without_messages() {
        let vm = StatusBarViewModel::from_state(&AppState::default());
        assert!(vm.message.contains("Developer Portal"));
        assert!(vm.source.is_empty());
    }

    #[test]
    fn test_latest_message_is_shown_on_one_line() {
        let mut state = AppState::default();
        state.status_bar.push(StatusMessage::new(
            StatusKind::Error,
            "Workflow Failed",
            "GitHub responded with HTTP 422",
            "Create MFE",
        ));

        let vm = StatusBarViewModel::from_state(&state);
        assert_eq!(vm.message, "Workflow Failed: GitHub responded with HTTP 422");
        assert_eq!(vm.source, "Create MFE");
    }

    #[test]
    fn test_toast_disappears_after_ttl() {
        let mut state = AppState::default();
        state.status_bar.push(StatusMessage::new(
            StatusKind::Success,
            "Workflow Triggered",
            "",
            "Create MFE",
        ));
        let pushed_at = state.status_bar.latest().unwrap().timestamp;

        assert!(ToastViewModel::from_state(&state, pushed_at).is_some());
        let later = pushed_at + state.status_bar.toast_ttl + TimeDelta::seconds(1);
        assert!(ToastViewModel::from_state(&state, later).is_none());
    }
}
