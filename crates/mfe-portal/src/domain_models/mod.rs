//! Domain models
//!
//! Core domain types used throughout the application.
//! These are pure domain concepts, separate from UI state.

pub mod template;
pub mod workflow;

pub use template::{template_label, Template, TEMPLATES};
pub use workflow::{
    completion_message, step_label, CreatedRepositoryRecord, Submission, WorkflowStatus,
    FIRST_STEP, LAST_STEP,
};
