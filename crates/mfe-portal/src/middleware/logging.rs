use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        // Ticks would drown everything else
        if !matches!(action, Action::Global(GlobalAction::Tick)) {
            log::debug!("Action: {:?}", action);
        }

        true
    }
}
