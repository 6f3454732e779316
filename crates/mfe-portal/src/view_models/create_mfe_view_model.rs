//! Create MFE View Model
//!
//! Everything the creation panel shows, computed from the form and the run.

use crate::domain_models::{
    completion_message, step_label, template_label, WorkflowStatus, FIRST_STEP, LAST_STEP,
};
use crate::state::{AppState, Focus, FormField};

/// Braille spinner, advanced by the tick counter
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRowViewModel {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub hint: &'static str,
    pub focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Active,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRowViewModel {
    pub label: String,
    pub state: StepState,
    /// Spinner frame or check mark
    pub icon: &'static str,
}

#[derive(Debug, Clone)]
pub struct CreateMfeViewModel {
    pub fields: Vec<FieldRowViewModel>,
    /// Name and description of the selected template
    pub template_info: Option<(&'static str, &'static str)>,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    /// Empty while idle
    pub steps: Vec<StepRowViewModel>,
    pub completion: Option<String>,
    /// `(label, value)` rows describing the created repository
    pub repository_rows: Vec<(&'static str, String)>,
    pub footer_hints: Vec<(&'static str, &'static str)>,
}

impl CreateMfeViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let form = &state.create_mfe;
        let form_focused = state.portal.focus == Focus::Content;
        let field = |f: FormField| form_focused && form.focused_field == f;

        let template = form.template();
        let fields = vec![
            FieldRowViewModel {
                label: FormField::RepositoryName.label(),
                value: form.repository_name.clone(),
                placeholder: "my-awesome-mfe",
                hint: "Repository name should be lowercase with hyphens",
                focused: field(FormField::RepositoryName),
            },
            FieldRowViewModel {
                label: FormField::ProductName.label(),
                value: form.product_name.clone(),
                placeholder: "My Awesome MFE",
                hint: "Display name for your micro frontend",
                focused: field(FormField::ProductName),
            },
            FieldRowViewModel {
                label: FormField::Template.label(),
                value: template.map(|t| t.name.to_string()).unwrap_or_default(),
                placeholder: "Select a template for your MFE",
                hint: "Space or ←/→ to choose",
                focused: field(FormField::Template),
            },
        ];

        let label = form
            .submission
            .as_ref()
            .map(|s| s.label())
            .unwrap_or_else(|| template_label(""));

        let steps = if form.status == WorkflowStatus::Idle {
            Vec::new()
        } else {
            Self::build_steps(form.loading_step, label, state.animation_frame)
        };

        let completion = match (&form.status, &form.created_repository) {
            (WorkflowStatus::Completed, Some(record)) => {
                Some(completion_message(label, &record.name))
            }
            _ => None,
        };

        let repository_rows = match &form.created_repository {
            Some(record) => vec![
                ("Repository", record.full_name.clone()),
                ("URL", record.html_url.clone()),
                ("Description", record.description.clone()),
                ("Visibility", record.visibility.clone()),
                (
                    "Created",
                    record
                        .created_at
                        .with_timezone(&chrono::Local)
                        .format("%Y-%m-%d %H:%M")
                        .to_string(),
                ),
                (
                    "Status",
                    if record.verified {
                        "confirmed by GitHub".to_string()
                    } else {
                        "pending confirmation".to_string()
                    },
                ),
            ],
            None => Vec::new(),
        };

        Self {
            fields,
            template_info: template.map(|t| (t.name, t.description)),
            submit_label: if form.dispatching {
                "Creating..."
            } else {
                "Create MFE"
            },
            submit_enabled: form.can_submit(),
            steps,
            completion,
            repository_rows,
            footer_hints: Self::footer_hints(state),
        }
    }

    fn build_steps(loading_step: u8, label: &str, frame: usize) -> Vec<StepRowViewModel> {
        (FIRST_STEP..=LAST_STEP)
            .map(|step| {
                let state = if step < loading_step || loading_step == LAST_STEP {
                    StepState::Done
                } else if step == loading_step {
                    StepState::Active
                } else {
                    StepState::Pending
                };
                let icon = match state {
                    StepState::Done => "✓",
                    StepState::Active => SPINNER[frame % SPINNER.len()],
                    StepState::Pending => "·",
                };
                StepRowViewModel {
                    label: step_label(step, label),
                    state,
                    icon,
                }
            })
            .collect()
    }

    fn footer_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        let form = &state.create_mfe;
        let mut hints = Vec::new();

        if state.portal.focus == Focus::Content {
            hints.push(("Tab", "next field"));
            hints.push(("Enter", "create"));
            hints.push(("Esc", "back"));
        } else {
            hints.push(("Enter", "edit form"));
        }
        if form.status != WorkflowStatus::Idle || !form.repository_name.is_empty() {
            hints.push(("Ctrl+R", "reset"));
        }
        if form.created_repository.is_some() {
            hints.push(("o", "open repository"));
        }

        hints
    }
}
