//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod create_mfe;
mod portal;
mod status_bar;

pub use app::AppState;
pub use create_mfe::{CreateMfeState, FormField, MissingFields};
pub use portal::{ActiveView, Focus, PortalState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
