use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;
use portal_client::ClientManager;
use portal_config::AppConfig;
use tokio::runtime::Handle;

pub mod context_action_middleware;
pub mod create_mfe_middleware;
pub mod keyboard_middleware;
pub mod logging;
pub mod navigation_middleware;
pub mod text_input_middleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs on the background thread. Anything slow (HTTP, timers,
/// spawning processes) is handed to the tokio runtime so the chain never blocks.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    /// - `dispatcher`: Use to dispatch actions that should re-enter middleware chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}

/// Run an action through the chain; `true` when it should reach the reducer
pub fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}

/// The middleware chain, in the order actions pass through it
pub fn default_chain(
    runtime: Handle,
    client_manager: ClientManager,
    config: &AppConfig,
) -> Vec<Box<dyn Middleware>> {
    vec![
        Box::new(logging::LoggingMiddleware::new()),
        Box::new(keyboard_middleware::KeyboardMiddleware::new()),
        Box::new(navigation_middleware::NavigationMiddleware::new()),
        Box::new(text_input_middleware::TextInputMiddleware::new()),
        Box::new(context_action_middleware::ContextActionMiddleware::new()),
        Box::new(create_mfe_middleware::CreateMfeMiddleware::new(
            runtime,
            client_manager,
            config,
        )),
    ]
}
