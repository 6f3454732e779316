use crate::actions::{Action, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod coming_soon_panel;
pub mod create_mfe_panel;
pub mod dashboard_panel;
pub mod key_bindings_view;
pub mod portal_view;
pub mod sidebar;
pub mod status_bar;
pub mod toast;

pub use key_bindings_view::KeyBindingsView;
pub use portal_view::PortalView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Portal,
    KeyBindings,
}

/// View trait - defines the interface that all views must implement
///
/// Views live in the state's view stack as trait objects, so the trait must
/// stay object-safe and `Send` (actions carrying views cross threads).
///
/// All translations receive the state: the portal view means different
/// things by the same key depending on the selected panel and the focus.
pub trait View: std::fmt::Debug + Send + Sync {
    /// Get the unique identifier for this view type
    fn view_id(&self) -> ViewId;

    /// Render this view
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Get the capabilities of this view (for keyboard handling)
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's specific action
    fn translate_navigation(&self, _nav: NavigationAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's specific action
    fn translate_text_input(&self, _input: TextInputAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Translate a context-sensitive action (Enter) to this view's specific action
    fn translate_context_action(
        &self,
        _action: ContextAction,
        _state: &AppState,
    ) -> Option<Action> {
        None
    }

    /// Whether a keymap command may fire while this view is on top
    fn accepts_action(&self, _action: &Action, _state: &AppState) -> bool {
        true
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI, bottom view first
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
