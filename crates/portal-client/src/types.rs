//! Types exchanged with the GitHub API
//!
//! These are our own types, decoupled from octocrab, so the rest of the
//! application (and its tests) never touch octocrab models directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A `workflow_dispatch` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowDispatch {
    /// Owner of the repository hosting the workflow
    pub owner: String,
    /// Repository hosting the workflow
    pub repository: String,
    /// Workflow file name or id
    pub workflow: String,
    /// Git ref to run the workflow on
    pub git_ref: String,
    pub inputs: DispatchInputs,
}

impl WorkflowDispatch {
    /// Full JSON request body as sent to
    /// `POST /repos/{owner}/{repo}/actions/workflows/{workflow}/dispatches`
    pub fn body(&self, github_token: &str) -> serde_json::Value {
        serde_json::json!({
            "ref": self.git_ref,
            "inputs": self.inputs.to_payload(github_token),
        })
    }
}

/// Inputs of the repository-creation workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchInputs {
    /// Repository slug, e.g. `my-app`
    pub product_name: String,
    /// Human readable product name, e.g. `My App`
    pub product_display_name: String,
    pub repository_visibility: String,
}

/// Wire shape of the workflow inputs
#[derive(Serialize)]
struct InputsPayload<'a> {
    product_name: &'a str,
    product_display_name: &'a str,
    repository_visibility: &'a str,
    github_token: &'a str,
}

impl DispatchInputs {
    /// Serialize the inputs, adding the token the workflow uses to create the repository
    pub fn to_payload(&self, github_token: &str) -> serde_json::Value {
        let payload = InputsPayload {
            product_name: &self.product_name,
            product_display_name: &self.product_display_name,
            repository_visibility: &self.repository_visibility,
            github_token,
        };
        // Serializing a struct of string slices cannot fail
        serde_json::to_value(payload).unwrap_or(serde_json::Value::Null)
    }
}

/// Repository as reported by GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    /// `public`, `private` or `internal`
    pub visibility: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Why a workflow dispatch failed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No token could be resolved for the host
    #[error("no GitHub token available: {0}")]
    MissingToken(String),

    /// GitHub answered with a non-success status
    #[error("GitHub responded with HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),
}

impl DispatchError {
    /// HTTP status code, when GitHub answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::MissingToken(_) | Self::Transport(_) => None,
        }
    }
}
