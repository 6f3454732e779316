//! Reducers
//!
//! Pure functions producing the next state from the current state and an action.

pub mod app_reducer;
pub mod create_mfe_reducer;
pub mod portal_reducer;
pub mod status_bar_reducer;
