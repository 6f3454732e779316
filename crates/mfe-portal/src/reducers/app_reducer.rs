use crate::actions::{Action, GlobalAction};
use crate::reducers::{create_mfe_reducer, portal_reducer, status_bar_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(&mut state, global),
        Action::Sidebar(sidebar) => {
            state.portal = portal_reducer::reduce(state.portal, sidebar);
        }
        Action::CreateMfe(create) => {
            state.create_mfe = create_mfe_reducer::reduce(state.create_mfe, create);
        }
        Action::StatusBar(status) => {
            state.status_bar = status_bar_reducer::reduce_status_bar(state.status_bar, status);
        }
        // Generic actions are translated by middleware; bootstrap has no state
        Action::Navigate(_)
        | Action::TextInput(_)
        | Action::ViewContext(_)
        | Action::Bootstrap(_) => {}
    }

    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::PushView(new_view) => {
            // Pushing the view that is already on top toggles it off
            let is_duplicate = state
                .view_stack
                .last()
                .map(|top| top.view_id() == new_view.view_id())
                .unwrap_or(false);

            if is_duplicate {
                log::debug!(
                    "Popping view from the stack, because this view is on top already: {:?}",
                    new_view.view_id()
                );
                state.view_stack.pop();
            } else {
                log::debug!("Pushing view onto stack: {:?}", new_view.view_id());
                state.view_stack.push(new_view.clone());
            }
        }
        GlobalAction::Close => {
            // Close the top-most view; closing the last one quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        GlobalAction::Tick => {
            state.animation_frame = state.animation_frame.wrapping_add(1);
        }
        GlobalAction::KeyPressed(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CreateMfeAction, SidebarAction, StatusBarAction};
    use crate::state::ActiveView;
    use crate::views::{KeyBindingsView, ViewId};

    #[test]
    fn test_push_view_toggles() {
        let push = Action::Global(GlobalAction::PushView(Box::new(KeyBindingsView::new())));

        let state = reduce(AppState::default(), &push);
        assert_eq!(state.view_stack.len(), 2);
        assert_eq!(state.view_stack[1].view_id(), ViewId::KeyBindings);

        let state = reduce(state, &push);
        assert_eq!(state.view_stack.len(), 1);
        assert_eq!(state.view_stack[0].view_id(), ViewId::Portal);
    }

    #[test]
    fn test_close_last_view_quits() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_sub_reducers_are_routed() {
        let state = reduce(
            AppState::default(),
            &Action::Sidebar(SidebarAction::Select(ActiveView::CreateMfe)),
        );
        let state = reduce(state, &Action::CreateMfe(CreateMfeAction::Char('a')));
        let state = reduce(
            state,
            &Action::StatusBar(StatusBarAction::info("Hello", "", "test")),
        );

        assert_eq!(state.portal.active_view, ActiveView::CreateMfe);
        assert_eq!(state.create_mfe.repository_name, "a");
        assert_eq!(state.status_bar.latest().unwrap().title, "Hello");
    }

    #[test]
    fn test_navigation_keeps_running_flow() {
        let mut state = AppState::default();
        state.create_mfe.run_id = Some(1);
        state.create_mfe.loading_step = 3;

        let state = reduce(
            state,
            &Action::Sidebar(SidebarAction::Select(ActiveView::Dashboard)),
        );
        assert_eq!(state.create_mfe.run_id, Some(1));
        assert_eq!(state.create_mfe.loading_step, 3);
    }
}
