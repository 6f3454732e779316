//! Application State

use crate::keymap::{default_keymap, Keymap};
use crate::views::{PortalView, View};
use portal_config::AppConfig;

use super::{CreateMfeState, PortalState, StatusBarState};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    pub portal: PortalState,
    pub create_mfe: CreateMfeState,
    pub status_bar: StatusBarState,
    pub theme: portal_theme::Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
    /// Organization new repositories are created in
    pub owner: String,
    /// Advanced on every tick, drives spinners
    pub animation_frame: usize,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(PortalView::new())],
            portal: PortalState::default(),
            create_mfe: CreateMfeState::default(),
            status_bar: StatusBarState::with_toast_seconds(config.toast_seconds),
            theme: portal_theme::Theme::default(),
            keymap: default_keymap(),
            owner: config.owner.clone(),
            animation_frame: 0,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("portal", &self.portal)
            .field("create_mfe", &self.create_mfe)
            .field("status_bar", &format!("{} messages", self.status_bar.messages.len()))
            .field("theme", &"<theme>")
            .field("owner", &self.owner)
            .finish()
    }
}
