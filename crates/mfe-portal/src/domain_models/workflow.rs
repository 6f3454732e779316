//! Repository-creation workflow model
//!
//! A run starts when the dispatch request succeeds and walks through six
//! display steps before the created repository is reported.

use crate::domain_models::template::template_label;
use chrono::{DateTime, Utc};
use portal_client::{DispatchInputs, RepositoryInfo};

/// First step shown once the workflow has been triggered
pub const FIRST_STEP: u8 = 1;
/// Last step; reached together with [`WorkflowStatus::Completed`]
pub const LAST_STEP: u8 = 6;

/// Lifecycle of the creation workflow as seen by the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WorkflowStatus {
    #[default]
    Idle,
    Triggered,
    Completed,
}

/// Validated snapshot of the form, captured at submit time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Repository slug, e.g. `my-app`
    pub repository_name: String,
    /// Display name, e.g. `My App`
    pub product_name: String,
    pub template_id: String,
}

impl Submission {
    pub fn label(&self) -> &'static str {
        template_label(&self.template_id)
    }

    /// Workflow inputs for this submission
    pub fn to_inputs(&self, repository_visibility: &str) -> DispatchInputs {
        DispatchInputs {
            product_name: self.repository_name.clone(),
            product_display_name: self.product_name.clone(),
            repository_visibility: repository_visibility.to_string(),
        }
    }
}

/// The repository produced by a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedRepositoryRecord {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: String,
    pub visibility: String,
    pub created_at: DateTime<Utc>,
    /// `true` once GitHub confirmed the repository exists
    pub verified: bool,
}

impl CreatedRepositoryRecord {
    /// Build the record from the submitted values, without asking GitHub
    pub fn synthesize(
        owner: &str,
        submission: &Submission,
        visibility: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let name = submission.repository_name.clone();
        Self {
            full_name: format!("{}/{}", owner, name),
            html_url: format!("https://github.com/{}/{}", owner, name),
            description: format!(
                "{} ({} micro frontend)",
                submission.product_name,
                submission.label()
            ),
            visibility: visibility.to_string(),
            created_at: now,
            verified: false,
            name,
        }
    }

    /// Replace a synthesized record with what GitHub reports
    pub fn from_repository_info(info: RepositoryInfo, synthesized: &Self) -> Self {
        Self {
            name: info.name,
            full_name: info.full_name,
            html_url: info.html_url,
            description: info
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| synthesized.description.clone()),
            visibility: info.visibility,
            created_at: info.created_at.unwrap_or(synthesized.created_at),
            verified: true,
        }
    }
}

/// Human readable label of a progress step (1..=6)
pub fn step_label(step: u8, template_label: &str) -> String {
    match step {
        1 => "Workflow triggered".to_string(),
        2 => format!("Creating {} repository", template_label),
        3 => format!("Applying {} template", template_label),
        4 => "Configuring branch protection".to_string(),
        5 => "Setting up CI/CD pipeline".to_string(),
        _ => format!("{} MFE ready", template_label),
    }
}

/// Message shown once the run completed
pub fn completion_message(template_label: &str, repository_name: &str) -> String {
    format!(
        "Your {} MFE '{}' has been created successfully.",
        template_label, repository_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn submission(template_id: &str) -> Submission {
        Submission {
            repository_name: "my-app".to_string(),
            product_name: "My App".to_string(),
            template_id: template_id.to_string(),
        }
    }

    #[test]
    fn test_synthesize_record() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let record =
            CreatedRepositoryRecord::synthesize("mfepocautomation", &submission("portal"), "private", now);

        assert_eq!(record.name, "my-app");
        assert_eq!(record.full_name, "mfepocautomation/my-app");
        assert_eq!(record.html_url, "https://github.com/mfepocautomation/my-app");
        assert_eq!(record.visibility, "private");
        assert_eq!(record.created_at, now);
        assert!(!record.verified);
    }

    #[test]
    fn test_verified_record_keeps_synthesized_fallbacks() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let synthesized =
            CreatedRepositoryRecord::synthesize("acme", &submission("backoffice"), "private", now);
        let info = RepositoryInfo {
            name: "my-app".to_string(),
            full_name: "acme/my-app".to_string(),
            html_url: "https://github.com/acme/my-app".to_string(),
            description: None,
            visibility: "internal".to_string(),
            created_at: None,
        };

        let record = CreatedRepositoryRecord::from_repository_info(info, &synthesized);
        assert!(record.verified);
        assert_eq!(record.visibility, "internal");
        assert_eq!(record.description, synthesized.description);
        assert_eq!(record.created_at, now);
    }

    #[test]
    fn test_labels_follow_template() {
        let backoffice = submission("backoffice");
        assert!(step_label(2, backoffice.label()).contains("Backoffice"));
        assert!(completion_message(backoffice.label(), "my-app").contains("Backoffice"));

        let other = submission("");
        assert!(step_label(6, other.label()).contains("Portal"));
        assert!(completion_message(other.label(), "my-app").contains("Portal"));
    }

    #[test]
    fn test_inputs_use_slug_and_display_name() {
        let inputs = submission("portal").to_inputs("private");
        assert_eq!(inputs.product_name, "my-app");
        assert_eq!(inputs.product_display_name, "My App");
        assert_eq!(inputs.repository_visibility, "private");
    }
}
