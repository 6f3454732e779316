//! Portal Reducer
//!
//! Sidebar selection and keyboard focus.

use crate::actions::SidebarAction;
use crate::state::{Focus, PortalState};

pub fn reduce(mut state: PortalState, action: &SidebarAction) -> PortalState {
    match action {
        SidebarAction::Next => {
            state.active_view = state.active_view.next();
        }
        SidebarAction::Previous => {
            state.active_view = state.active_view.previous();
        }
        SidebarAction::Select(view) => {
            state.active_view = *view;
            state.focus = Focus::Sidebar;
        }
        SidebarAction::FocusContent => {
            if state.active_view.has_focusable_content() {
                state.focus = Focus::Content;
            }
        }
        SidebarAction::FocusSidebar => {
            state.focus = Focus::Sidebar;
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ActiveView;

    #[test]
    fn test_sidebar_wraps() {
        let state = reduce(PortalState::default(), &SidebarAction::Previous);
        assert_eq!(state.active_view, ActiveView::Settings);

        let state = reduce(state, &SidebarAction::Next);
        assert_eq!(state.active_view, ActiveView::Dashboard);
    }

    #[test]
    fn test_only_the_form_takes_focus() {
        let state = reduce(PortalState::default(), &SidebarAction::FocusContent);
        assert_eq!(state.focus, Focus::Sidebar);

        let state = reduce(state, &SidebarAction::Select(ActiveView::CreateMfe));
        let state = reduce(state, &SidebarAction::FocusContent);
        assert_eq!(state.focus, Focus::Content);

        let state = reduce(state, &SidebarAction::FocusSidebar);
        assert_eq!(state.focus, Focus::Sidebar);
    }
}
