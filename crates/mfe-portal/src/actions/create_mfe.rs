//! Create MFE Actions
//!
//! Form editing plus the lifecycle of a workflow run. Every run-related
//! action carries the run id it belongs to so late events of a cancelled
//! run are dropped by the reducer.

use crate::domain_models::{CreatedRepositoryRecord, Submission};

#[derive(Debug, Clone)]
pub enum CreateMfeAction {
    // Form editing
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Character typed into the focused field
    Char(char),
    /// Remove the last character of the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Select the next template
    NextTemplate,
    /// Select the previous template
    PrevTemplate,

    // User intents (handled by middleware)
    /// Validate and dispatch the workflow
    Submit,
    /// Clear the form and cancel a running progress display
    Reset,
    /// Open the created repository in the browser
    OpenRepository,

    // Run lifecycle
    /// Dispatch request sent
    DispatchStarted { run_id: u64 },
    /// Workflow accepted the dispatch
    DispatchSucceeded { run_id: u64, submission: Submission },
    /// Dispatch rejected or not sent
    DispatchFailed {
        run_id: u64,
        status: Option<u16>,
        message: String,
    },
    /// Progress display moved to `step`
    ProgressAdvanced { run_id: u64, step: u8 },
    /// Final step reached
    Completed {
        run_id: u64,
        record: CreatedRepositoryRecord,
    },
    /// GitHub confirmed the created repository
    RepositoryVerified {
        run_id: u64,
        record: CreatedRepositoryRecord,
    },
}
