//! Context Action Translation Middleware
//!
//! Translates semantic actions (Confirm) into view-specific actions
//! using the active view's translate_context_action method.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates ViewContext actions via the active view
pub struct ContextActionMiddleware;

impl ContextActionMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContextActionMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for ContextActionMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::ViewContext(context_action) = action {
            if let Some(view) = state.active_view() {
                if let Some(translated) = view.translate_context_action(*context_action, state) {
                    log::debug!(
                        "ContextActionMiddleware: Translating {:?} to {:?}",
                        context_action,
                        translated
                    );
                    dispatcher.dispatch(translated);
                }
            }
            return false;
        }

        true
    }
}
