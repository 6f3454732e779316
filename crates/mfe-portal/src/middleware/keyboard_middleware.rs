//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Esc).
//!
//! ## Layer 2: Capabilities
//! Route keys based on view capabilities. Views with TEXT_INPUT capability
//! receive character keys instead of keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.
//! This keeps form commands from firing while another panel is shown.

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    /// Handle a key event using the three-layer approach
    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // LAYER 1: Priority keys

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        // Esc leaves a text input first; otherwise it closes the top view
        if key.code == KeyCode::Esc {
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else {
                log::debug!("Layer 1: Esc - dispatching Close");
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return false;
        }

        // LAYER 2: Capability-based routing

        if capabilities.accepts_text_input() {
            if let KeyCode::Char(c) = key.code {
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !key.modifiers.contains(KeyModifiers::ALT)
                {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }

                // Ctrl+U - Unix line kill (clear line)
                if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'u' {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
            }

            if key.code == KeyCode::Backspace {
                if key.modifiers.contains(KeyModifiers::SUPER) {
                    // Cmd+Backspace on Mac - clear entire line
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                } else {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                }
                return false;
            }

            if key.code == KeyCode::Enter {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                return false;
            }

            if capabilities.supports_item_navigation() {
                match key.code {
                    KeyCode::Down => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Next));
                        return false;
                    }
                    KeyCode::Up => {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                        return false;
                    }
                    _ => {}
                }
            }

            // Tab for field navigation in text input mode
            match key.code {
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                    } else {
                        dispatcher.dispatch(Action::Navigate(NavigationAction::Next));
                    }
                    return false;
                }
                KeyCode::BackTab => {
                    dispatcher.dispatch(Action::Navigate(NavigationAction::Previous));
                    return false;
                }
                _ => {}
            }

            // Left/Right and Ctrl+ combinations fall through to the keymap
        }

        // LAYER 3: Keymap lookup + Gating

        for cmd_id in state.keymap.match_key(&key) {
            let action = cmd_id.to_action();

            match view {
                Some(view) if !view.accepts_action(&action, state) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: Command {:?} accepted, dispatching", cmd_id);
                    dispatcher.dispatch(action);
                    return false;
                }
            }
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        true
    }
}
