//! Sidebar Actions
//!
//! Panel selection and focus changes.

use crate::state::ActiveView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    /// Select the next panel (wrapping)
    Next,
    /// Select the previous panel (wrapping)
    Previous,
    /// Select a panel directly
    Select(ActiveView),
    /// Move keyboard focus into the active panel
    FocusContent,
    /// Move keyboard focus back to the sidebar
    FocusSidebar,
}
