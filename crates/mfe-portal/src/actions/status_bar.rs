//! Status Bar Actions
//!
//! Actions for the status bar - user feedback for operations.

use crate::state::StatusKind;

/// Actions for the status bar
#[derive(Debug, Clone)]
pub enum StatusBarAction {
    /// Push a new notification
    Push {
        kind: StatusKind,
        title: String,
        description: String,
        source: String,
    },
}

impl StatusBarAction {
    fn push(
        kind: StatusKind,
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::Push {
            kind,
            title: title.into(),
            description: description.into(),
            source: source.into(),
        }
    }

    /// Create a running status action
    pub fn running(
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::push(StatusKind::Running, title, description, source)
    }

    /// Create a success status action
    pub fn success(
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::push(StatusKind::Success, title, description, source)
    }

    /// Create an error status action
    pub fn error(
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::push(StatusKind::Error, title, description, source)
    }

    /// Create a warning status action
    pub fn warning(
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::push(StatusKind::Warning, title, description, source)
    }

    /// Create an info status action
    pub fn info(
        title: impl Into<String>,
        description: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self::push(StatusKind::Info, title, description, source)
    }
}
