//! Command identifiers
//!
//! Every action a key can be bound to, as a serializable enum.

use crate::actions::{
    Action, ContextAction, CreateMfeAction, GlobalAction, NavigationAction, SidebarAction,
};
use crate::state::ActiveView;
use crate::views::KeyBindingsView;
use serde::{Deserialize, Serialize};

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `FormSubmit` -> `"form_submit"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateLeft,
    NavigateRight,
    /// Primary action of the focused item
    Confirm,
    /// Move focus from the sidebar into the panel
    FocusContent,

    // === Panels ===
    ShowDashboard,
    ShowCreateMfe,
    ShowRepositories,
    ShowPackages,
    ShowSettings,

    // === Create MFE ===
    FormSubmit,
    FormReset,
    OpenCreatedRepository,

    // === General ===
    KeyBindingsToggleView,
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert command to the action it triggers
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateLeft => Action::Navigate(NavigationAction::Left),
            Self::NavigateRight => Action::Navigate(NavigationAction::Right),
            Self::Confirm => Action::ViewContext(ContextAction::Confirm),
            Self::FocusContent => Action::Sidebar(SidebarAction::FocusContent),

            Self::ShowDashboard => Action::Sidebar(SidebarAction::Select(ActiveView::Dashboard)),
            Self::ShowCreateMfe => Action::Sidebar(SidebarAction::Select(ActiveView::CreateMfe)),
            Self::ShowRepositories => {
                Action::Sidebar(SidebarAction::Select(ActiveView::Repositories))
            }
            Self::ShowPackages => Action::Sidebar(SidebarAction::Select(ActiveView::Packages)),
            Self::ShowSettings => Action::Sidebar(SidebarAction::Select(ActiveView::Settings)),

            Self::FormSubmit => Action::CreateMfe(CreateMfeAction::Submit),
            Self::FormReset => Action::CreateMfe(CreateMfeAction::Reset),
            Self::OpenCreatedRepository => Action::CreateMfe(CreateMfeAction::OpenRepository),

            Self::KeyBindingsToggleView => {
                Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())))
            }
            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short description shown in the key bindings panel
    pub fn description(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Next item",
            Self::NavigatePrevious => "Previous item",
            Self::NavigateLeft => "Previous template",
            Self::NavigateRight => "Next template / enter panel",
            Self::Confirm => "Open panel / create MFE",
            Self::FocusContent => "Focus panel",

            Self::ShowDashboard => "Show dashboard",
            Self::ShowCreateMfe => "Show create MFE form",
            Self::ShowRepositories => "Show repositories",
            Self::ShowPackages => "Show packages",
            Self::ShowSettings => "Show settings",

            Self::FormSubmit => "Create MFE",
            Self::FormReset => "Reset form",
            Self::OpenCreatedRepository => "Open created repository in browser",

            Self::KeyBindingsToggleView => "Toggle this help",
            Self::GlobalClose => "Close / quit",
            Self::GlobalQuit => "Quit",
        }
    }

    /// Order in which categories are listed in the key bindings panel
    pub fn category_order() -> [&'static str; 4] {
        ["Navigation", "Panels", "Create MFE", "General"]
    }

    /// Group heading in the key bindings panel
    pub fn category(&self) -> &'static str {
        match self {
            Self::NavigateNext
            | Self::NavigatePrevious
            | Self::NavigateLeft
            | Self::NavigateRight
            | Self::Confirm
            | Self::FocusContent => "Navigation",

            Self::ShowDashboard
            | Self::ShowCreateMfe
            | Self::ShowRepositories
            | Self::ShowPackages
            | Self::ShowSettings => "Panels",

            Self::FormSubmit | Self::FormReset | Self::OpenCreatedRepository => "Create MFE",

            Self::KeyBindingsToggleView | Self::GlobalClose | Self::GlobalQuit => "General",
        }
    }
}
