//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering and user input only
//! - Background thread runs the middleware chain
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via `Dispatcher` re-enter the chain, so a
//! finished HTTP call can report back as an action like any key press.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::{run_chain, Middleware};
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;
use std::time::{Duration, Instant};

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spinner frames advance at this rate
const TICK_RATE: Duration = Duration::from_millis(250);

/// Spawn the background worker thread
///
/// - `action_rx`: actions from the main thread and from the `Dispatcher` (re-entry)
/// - `action_tx`: sender the `Dispatcher` handed to middleware uses
/// - `result_tx`: actions that survived the chain, for the reducers
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);
    let mut last_tick = Instant::now();

    loop {
        match action_rx.recv_timeout(Duration::from_millis(10)) {
            Ok(action) => {
                if matches!(action, Action::Global(GlobalAction::Quit)) {
                    log::info!("Background worker received shutdown signal");
                    if result_tx.send(action).is_err() {
                        log::error!("Failed to send quit action to main thread");
                    }
                    break;
                }

                let current_state = match state.read() {
                    Ok(s) => s.clone(),
                    Err(e) => {
                        log::error!("Failed to read shared state: {}", e);
                        continue;
                    }
                };

                if run_chain(&mut middleware, &action, &current_state, &dispatcher)
                    && result_tx.send(action).is_err()
                {
                    log::error!("Result channel disconnected, shutting down");
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            if result_tx.send(Action::Global(GlobalAction::Tick)).is_err() {
                log::error!("Result channel disconnected during tick");
                break;
            }
            last_tick = Instant::now();
        }
    }

    log::info!("Background worker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::SidebarAction;
    use crate::middleware::logging::LoggingMiddleware;
    use std::sync::mpsc;

    #[test]
    fn test_forwards_actions_and_stops_on_quit() {
        let (action_tx, action_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let state: SharedState = Arc::new(RwLock::new(AppState::default()));

        let handle = spawn_background_worker(
            action_rx,
            action_tx.clone(),
            result_tx,
            state,
            vec![Box::new(LoggingMiddleware::new())],
        );

        action_tx
            .send(Action::Sidebar(SidebarAction::Next))
            .unwrap();
        action_tx.send(Action::Global(GlobalAction::Quit)).unwrap();
        handle.join().unwrap();

        let forwarded: Vec<Action> = result_rx
            .try_iter()
            .filter(|a| !matches!(a, Action::Global(GlobalAction::Tick)))
            .collect();
        assert!(matches!(
            forwarded[..],
            [
                Action::Sidebar(SidebarAction::Next),
                Action::Global(GlobalAction::Quit)
            ]
        ));
    }
}
