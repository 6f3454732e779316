//! Actions module
//!
//! This module defines all actions in the application using a tagged action architecture.
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput, ViewContext) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

// Shared action types
pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

// Screen-specific action types
pub mod bootstrap;
pub mod create_mfe;
pub mod sidebar;
pub mod status_bar;

pub use bootstrap::BootstrapAction;
pub use context_action::ContextAction;
pub use create_mfe::CreateMfeAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use sidebar::SidebarAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
///
/// Actions are categorized as:
/// - `Navigate` / `TextInput` / `ViewContext`: Generic actions that need translation by the active view
/// - `Global`: Application-wide actions (quit, view management, tick)
/// - Screen-specific variants: Already targeted to a specific screen's reducer
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - will be translated by active view
    ViewContext(ContextAction),

    // Global actions (no translation needed)
    /// Global application actions
    Global(GlobalAction),

    // Screen-specific actions (already targeted)
    /// Bootstrap/initialization actions
    Bootstrap(BootstrapAction),
    /// Sidebar selection and focus
    Sidebar(SidebarAction),
    /// Create MFE form and workflow run
    CreateMfe(CreateMfeAction),
    /// Status Bar actions
    StatusBar(StatusBarAction),
}
