//! Project templates
//!
//! The set of scaffolds a new micro frontend can be created from. The list is
//! fixed at compile time.

/// A project template selectable in the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// All available templates, in display order
pub const TEMPLATES: [Template; 2] = [
    Template {
        id: "portal",
        name: "Portal",
        description: "Customer-facing portal micro frontend",
    },
    Template {
        id: "backoffice",
        name: "Backoffice",
        description: "Internal backoffice micro frontend",
    },
];

impl Template {
    /// Look up a template by id
    pub fn find(id: &str) -> Option<&'static Template> {
        TEMPLATES.iter().find(|t| t.id == id)
    }

    /// Template following `current` (wrapping); the first one when nothing is selected
    pub fn next_after(current: Option<&str>) -> &'static Template {
        match current.and_then(Self::position) {
            Some(index) => &TEMPLATES[(index + 1) % TEMPLATES.len()],
            None => &TEMPLATES[0],
        }
    }

    /// Template preceding `current` (wrapping); the last one when nothing is selected
    pub fn previous_before(current: Option<&str>) -> &'static Template {
        match current.and_then(Self::position) {
            Some(0) | None => &TEMPLATES[TEMPLATES.len() - 1],
            Some(index) => &TEMPLATES[index - 1],
        }
    }

    fn position(id: &str) -> Option<usize> {
        TEMPLATES.iter().position(|t| t.id == id)
    }
}

/// Label used in progress steps and the completion message
///
/// Only `backoffice` gets its own label; every other id (including an
/// unknown or empty one) reads as "Portal".
pub fn template_label(template_id: &str) -> &'static str {
    if template_id == "backoffice" {
        "Backoffice"
    } else {
        "Portal"
    }
}
