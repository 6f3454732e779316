//! Portal navigation state
//!
//! Which panel the sidebar has selected and where keyboard focus is.

use strum::{EnumIter, IntoEnumIterator};

/// Panel selected in the sidebar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter)]
pub enum ActiveView {
    #[default]
    Dashboard,
    CreateMfe,
    Repositories,
    Packages,
    Settings,
}

impl ActiveView {
    /// Map a panel identifier to a view; unknown identifiers fall back to the dashboard
    pub fn from_id(id: &str) -> Self {
        Self::iter()
            .find(|view| view.id() == id)
            .unwrap_or_default()
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::CreateMfe => "create-mfe",
            Self::Repositories => "repositories",
            Self::Packages => "packages",
            Self::Settings => "settings",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::CreateMfe => "Create MFE",
            Self::Repositories => "Repositories",
            Self::Packages => "Packages",
            Self::Settings => "Settings",
        }
    }

    /// Title and description of panels that are not built yet
    pub fn coming_soon(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Repositories => Some((
                "Repositories",
                "Manage and monitor your micro frontend repositories",
            )),
            Self::Packages => Some((
                "Packages",
                "View and manage your published packages and dependencies",
            )),
            Self::Settings => Some((
                "Settings",
                "Configure your developer portal preferences and team settings",
            )),
            Self::Dashboard | Self::CreateMfe => None,
        }
    }

    /// Whether the panel has something to focus (only the creation form does)
    pub fn has_focusable_content(&self) -> bool {
        matches!(self, Self::CreateMfe)
    }

    pub fn next(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|v| v == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }

    pub fn previous(&self) -> Self {
        let all: Vec<Self> = Self::iter().collect();
        let index = all.iter().position(|v| v == self).unwrap_or(0);
        all[(index + all.len() - 1) % all.len()]
    }
}

/// Which part of the screen receives keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

#[derive(Debug, Clone, Default)]
pub struct PortalState {
    pub active_view: ActiveView,
    pub focus: Focus,
}
