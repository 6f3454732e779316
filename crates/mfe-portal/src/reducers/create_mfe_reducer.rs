//! Create MFE Reducer
//!
//! Form edits plus the run lifecycle. Run events whose id does not match the
//! current run are ignored, so events of a reset run cannot resurrect it.

use crate::actions::CreateMfeAction;
use crate::domain_models::{Template, WorkflowStatus, FIRST_STEP, LAST_STEP};
use crate::state::{CreateMfeState, FormField};

/// Reduce create MFE state based on actions
pub fn reduce(mut state: CreateMfeState, action: &CreateMfeAction) -> CreateMfeState {
    match action {
        CreateMfeAction::NextField => {
            state.focused_field = state.focused_field.next();
        }
        CreateMfeAction::PrevField => {
            state.focused_field = state.focused_field.prev();
        }

        CreateMfeAction::Char(c) => match state.focused_field {
            // Space cycles the template selector; other keys do nothing there
            FormField::Template => {
                if *c == ' ' {
                    let next = Template::next_after(state.selected_template.as_deref());
                    state.selected_template = Some(next.id.to_string());
                }
            }
            _ => {
                if let Some(text) = state.focused_text_mut() {
                    text.push(*c);
                }
            }
        },

        CreateMfeAction::Backspace => {
            if let Some(text) = state.focused_text_mut() {
                text.pop();
            }
        }

        CreateMfeAction::ClearField => match state.focused_field {
            FormField::Template => state.selected_template = None,
            _ => {
                if let Some(text) = state.focused_text_mut() {
                    text.clear();
                }
            }
        },

        CreateMfeAction::NextTemplate => {
            let next = Template::next_after(state.selected_template.as_deref());
            state.selected_template = Some(next.id.to_string());
        }
        CreateMfeAction::PrevTemplate => {
            let prev = Template::previous_before(state.selected_template.as_deref());
            state.selected_template = Some(prev.id.to_string());
        }

        CreateMfeAction::Reset => {
            if state.dispatching {
                log::debug!("Ignoring reset while run {:?} is dispatching", state.run_id);
            } else {
                log::debug!("Create MFE form reset (run {:?} dropped)", state.run_id);
                state.reset();
            }
        }

        CreateMfeAction::DispatchStarted { run_id } => {
            state.dispatching = true;
            state.run_id = Some(*run_id);
        }

        CreateMfeAction::DispatchSucceeded { run_id, submission } => {
            if state.run_id == Some(*run_id) {
                state.clear_fields();
                state.dispatching = false;
                state.status = WorkflowStatus::Triggered;
                state.loading_step = FIRST_STEP;
                state.submission = Some(submission.clone());
                state.created_repository = None;
            }
        }

        CreateMfeAction::DispatchFailed { run_id, .. } => {
            if state.run_id == Some(*run_id) {
                state.dispatching = false;
                state.status = WorkflowStatus::Idle;
                state.loading_step = 0;
                state.run_id = None;
            }
        }

        CreateMfeAction::ProgressAdvanced { run_id, step } => {
            if state.run_id == Some(*run_id) && state.status == WorkflowStatus::Triggered {
                state.loading_step = state.loading_step.max((*step).min(LAST_STEP - 1));
            }
        }

        CreateMfeAction::Completed { run_id, record } => {
            if state.run_id == Some(*run_id) && state.status == WorkflowStatus::Triggered {
                state.status = WorkflowStatus::Completed;
                state.loading_step = LAST_STEP;
                state.created_repository = Some(record.clone());
            }
        }

        CreateMfeAction::RepositoryVerified { run_id, record } => {
            if state.run_id == Some(*run_id) && state.status == WorkflowStatus::Completed {
                state.created_repository = Some(record.clone());
            }
        }

        // Intents handled by middleware
        CreateMfeAction::Submit | CreateMfeAction::OpenRepository => {}
    }

    state
}
