//! Create MFE Form State

use crate::domain_models::{CreatedRepositoryRecord, Submission, Template, WorkflowStatus};
use thiserror::Error;

/// Form field of the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    RepositoryName,
    ProductName,
    Template,
}

impl FormField {
    /// Move to the next field
    pub fn next(self) -> Self {
        match self {
            Self::RepositoryName => Self::ProductName,
            Self::ProductName => Self::Template,
            Self::Template => Self::RepositoryName,
        }
    }

    /// Move to the previous field
    pub fn prev(self) -> Self {
        match self {
            Self::RepositoryName => Self::Template,
            Self::ProductName => Self::RepositoryName,
            Self::Template => Self::ProductName,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::RepositoryName => "Repository Name",
            Self::ProductName => "Product Name",
            Self::Template => "Template",
        }
    }
}

/// Submit attempted with required fields left blank
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all required fields before creating the MFE.")]
pub struct MissingFields {
    pub fields: Vec<FormField>,
}

/// State of the creation form and of the workflow run it started
#[derive(Debug, Clone, Default)]
pub struct CreateMfeState {
    pub repository_name: String,
    pub product_name: String,
    /// Id of the selected template
    pub selected_template: Option<String>,
    pub focused_field: FormField,

    /// A dispatch request is in flight
    pub dispatching: bool,
    pub status: WorkflowStatus,
    /// 0 while idle, 1..=6 once triggered
    pub loading_step: u8,
    /// Run the progress events must belong to
    pub run_id: Option<u64>,
    /// Values the current run was started with
    pub submission: Option<Submission>,
    pub created_repository: Option<CreatedRepositoryRecord>,
}

impl CreateMfeState {
    /// Clear the input fields, keeping the run state
    pub fn clear_fields(&mut self) {
        self.repository_name.clear();
        self.product_name.clear();
        self.selected_template = None;
        self.focused_field = FormField::default();
    }

    /// Back to a blank form with no run
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Selected template, if the id is known
    pub fn template(&self) -> Option<&'static Template> {
        self.selected_template.as_deref().and_then(Template::find)
    }

    /// Whether a new submit would be accepted
    pub fn can_submit(&self) -> bool {
        !self.dispatching && self.status == WorkflowStatus::Idle
    }

    /// Text of the focused input, if the focused field is a text field
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focused_field {
            FormField::RepositoryName => Some(&mut self.repository_name),
            FormField::ProductName => Some(&mut self.product_name),
            FormField::Template => None,
        }
    }

    /// Check that every required field is present (after trimming)
    pub fn validate(&self) -> Result<Submission, MissingFields> {
        let repository_name = self.repository_name.trim();
        let product_name = self.product_name.trim();
        let template_id = self
            .selected_template
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();

        let mut missing = Vec::new();
        if repository_name.is_empty() {
            missing.push(FormField::RepositoryName);
        }
        if product_name.is_empty() {
            missing.push(FormField::ProductName);
        }
        if template_id.is_empty() {
            missing.push(FormField::Template);
        }

        if !missing.is_empty() {
            return Err(MissingFields { fields: missing });
        }

        Ok(Submission {
            repository_name: repository_name.to_string(),
            product_name: product_name.to_string(),
            template_id: template_id.to_string(),
        })
    }
}
