//! Portal View
//!
//! The base view: sidebar on the left, the selected panel on the right and
//! the status bar at the bottom. Keys mean different things depending on
//! whether the sidebar or the panel has focus.

use crate::actions::{
    Action, ContextAction, CreateMfeAction, NavigationAction, SidebarAction, TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::{ActiveView, AppState, Focus, FormField};
use crate::view_models::{StatusBarViewModel, ToastViewModel};
use crate::views::{
    coming_soon_panel, create_mfe_panel, dashboard_panel, sidebar, status_bar::StatusBarWidget,
    toast, View, ViewId,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 28;

#[derive(Debug, Clone)]
pub struct PortalView;

impl PortalView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PortalView {
    fn default() -> Self {
        Self::new()
    }
}

/// The creation form has keyboard focus
fn form_focused(state: &AppState) -> bool {
    state.portal.active_view == ActiveView::CreateMfe && state.portal.focus == Focus::Content
}

impl View for PortalView {
    fn view_id(&self) -> ViewId {
        ViewId::Portal
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        if form_focused(state) {
            PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
        } else {
            PanelCapabilities::ITEM_NAVIGATION
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction, state: &AppState) -> Option<Action> {
        if form_focused(state) {
            let on_template = state.create_mfe.focused_field == FormField::Template;
            let action = match nav {
                NavigationAction::Next => CreateMfeAction::NextField,
                NavigationAction::Previous => CreateMfeAction::PrevField,
                NavigationAction::Right if on_template => CreateMfeAction::NextTemplate,
                NavigationAction::Left if on_template => CreateMfeAction::PrevTemplate,
                NavigationAction::Left | NavigationAction::Right => return None,
            };
            return Some(Action::CreateMfe(action));
        }

        let action = match nav {
            NavigationAction::Next => SidebarAction::Next,
            NavigationAction::Previous => SidebarAction::Previous,
            NavigationAction::Right => SidebarAction::FocusContent,
            NavigationAction::Left => return None,
        };
        Some(Action::Sidebar(action))
    }

    fn translate_text_input(&self, input: TextInputAction, state: &AppState) -> Option<Action> {
        if !form_focused(state) {
            return None;
        }

        let action = match input {
            TextInputAction::Char(c) => Action::CreateMfe(CreateMfeAction::Char(c)),
            TextInputAction::Backspace => Action::CreateMfe(CreateMfeAction::Backspace),
            TextInputAction::ClearLine => Action::CreateMfe(CreateMfeAction::ClearField),
            TextInputAction::Confirm => Action::CreateMfe(CreateMfeAction::Submit),
            TextInputAction::Escape => Action::Sidebar(SidebarAction::FocusSidebar),
        };
        Some(action)
    }

    fn translate_context_action(&self, action: ContextAction, state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm if form_focused(state) => {
                Some(Action::CreateMfe(CreateMfeAction::Submit))
            }
            ContextAction::Confirm => Some(Action::Sidebar(SidebarAction::FocusContent)),
        }
    }

    fn accepts_action(&self, action: &Action, state: &AppState) -> bool {
        match action {
            // Form commands only while the form is the selected panel
            Action::CreateMfe(_) => state.portal.active_view == ActiveView::CreateMfe,
            _ => true,
        }
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    sidebar::render(state, columns[0], f);

    let content = columns[1];
    match state.portal.active_view {
        ActiveView::Dashboard => dashboard_panel::render(state, content, f),
        ActiveView::CreateMfe => create_mfe_panel::render(state, content, f),
        other => {
            if let Some((title, description)) = other.coming_soon() {
                coming_soon_panel::render(title, description, &state.theme, content, f);
            }
        }
    }

    if let Some(vm) = ToastViewModel::from_state(state, chrono::Local::now()) {
        toast::render(&vm, &state.theme, content, f);
    }

    let vm = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&vm), rows[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_state(field: FormField) -> AppState {
        let mut state = AppState::default();
        state.portal.active_view = ActiveView::CreateMfe;
        state.portal.focus = Focus::Content;
        state.create_mfe.focused_field = field;
        state
    }

    #[test]
    fn test_capabilities_follow_focus() {
        let view = PortalView::new();
        assert!(!view.capabilities(&AppState::default()).accepts_text_input());
        assert!(view
            .capabilities(&form_state(FormField::RepositoryName))
            .accepts_text_input());
    }

    #[test]
    fn test_sidebar_navigation() {
        let view = PortalView::new();
        let state = AppState::default();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Next, &state),
            Some(Action::Sidebar(SidebarAction::Next))
        ));
        assert!(matches!(
            view.translate_navigation(NavigationAction::Right, &state),
            Some(Action::Sidebar(SidebarAction::FocusContent))
        ));
        assert!(view.translate_text_input(TextInputAction::Char('a'), &state).is_none());
    }

    #[test]
    fn test_arrows_pick_template_only_on_template_field() {
        let view = PortalView::new();
        assert!(view
            .translate_navigation(NavigationAction::Right, &form_state(FormField::ProductName))
            .is_none());
        assert!(matches!(
            view.translate_navigation(NavigationAction::Right, &form_state(FormField::Template)),
            Some(Action::CreateMfe(CreateMfeAction::NextTemplate))
        ));
        assert!(matches!(
            view.translate_navigation(NavigationAction::Left, &form_state(FormField::Template)),
            Some(Action::CreateMfe(CreateMfeAction::PrevTemplate))
        ));
    }

    #[test]
    fn test_form_text_input() {
        let view = PortalView::new();
        let state = form_state(FormField::RepositoryName);
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm, &state),
            Some(Action::CreateMfe(CreateMfeAction::Submit))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Escape, &state),
            Some(Action::Sidebar(SidebarAction::FocusSidebar))
        ));
    }

    #[test]
    fn test_form_commands_gated_by_panel() {
        let view = PortalView::new();
        let submit = Action::CreateMfe(CreateMfeAction::Submit);
        assert!(!view.accepts_action(&submit, &AppState::default()));
        assert!(view.accepts_action(&submit, &form_state(FormField::Template)));
    }
}
