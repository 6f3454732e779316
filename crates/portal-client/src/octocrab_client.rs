//! Octocrab-based workflow client
//!
//! Direct implementation of the `WorkflowClient` trait using the octocrab library.

use crate::client::WorkflowClient;
use crate::types::{DispatchError, RepositoryInfo, WorkflowDispatch};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
///
/// Keeps the token it was built with: the creation workflow receives it as
/// an input so it can create the repository on the caller's behalf.
#[derive(Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    token: String,
}

impl std::fmt::Debug for OctocrabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctocrabClient")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance and token
    pub fn new(octocrab: Arc<Octocrab>, token: String) -> Self {
        Self { octocrab, token }
    }

    /// Build a client for github.com authenticated with a personal token
    pub fn from_token(token: String) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder().personal_token(token.clone()).build()?;
        Ok(Self::new(Arc::new(octocrab), token))
    }
}

#[async_trait]
impl WorkflowClient for OctocrabClient {
    async fn dispatch_workflow(&self, dispatch: &WorkflowDispatch) -> Result<(), DispatchError> {
        debug!(
            "Dispatching workflow {} on {}/{}@{}",
            dispatch.workflow, dispatch.owner, dispatch.repository, dispatch.git_ref
        );

        self.octocrab
            .actions()
            .create_workflow_dispatch(
                dispatch.owner.as_str(),
                dispatch.repository.as_str(),
                dispatch.workflow.as_str(),
                dispatch.git_ref.as_str(),
            )
            .inputs(dispatch.inputs.to_payload(&self.token))
            .send()
            .await
            .map_err(convert_error)?;

        debug!("Workflow {} dispatched", dispatch.workflow);
        Ok(())
    }

    async fn fetch_repository(&self, owner: &str, name: &str) -> anyhow::Result<RepositoryInfo> {
        debug!("Fetching repository {}/{}", owner, name);

        let repo = self.octocrab.repos(owner, name).get().await?;

        let visibility = repo.visibility.clone().unwrap_or_else(|| {
            if repo.private.unwrap_or(false) {
                "private".to_string()
            } else {
                "public".to_string()
            }
        });

        Ok(RepositoryInfo {
            full_name: repo
                .full_name
                .clone()
                .unwrap_or_else(|| format!("{}/{}", owner, repo.name)),
            html_url: repo
                .html_url
                .as_ref()
                .map(|url| url.to_string())
                .unwrap_or_else(|| format!("https://github.com/{}/{}", owner, repo.name)),
            description: repo.description.clone(),
            created_at: repo.created_at,
            name: repo.name,
            visibility,
        })
    }
}

/// Map octocrab errors onto the dispatch error taxonomy
fn convert_error(err: octocrab::Error) -> DispatchError {
    match err {
        octocrab::Error::GitHub { source, .. } => DispatchError::Http {
            status: source.status_code.as_u16(),
            message: source.message.clone(),
        },
        other => DispatchError::Transport(other.to_string()),
    }
}
