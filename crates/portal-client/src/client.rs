//! Workflow client trait
//!
//! The seam between the application and GitHub. The application only
//! talks to `dyn WorkflowClient`, which keeps the dispatch flow testable
//! with in-memory implementations.

use crate::types::{DispatchError, RepositoryInfo, WorkflowDispatch};
use async_trait::async_trait;

/// GitHub operations needed by the portal
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
#[async_trait]
pub trait WorkflowClient: Send + Sync {
    /// Trigger a `workflow_dispatch` event
    ///
    /// GitHub answers `204 No Content` on success. Any other status is
    /// reported as [`DispatchError::Http`]; failures before a response
    /// arrives are [`DispatchError::Transport`].
    async fn dispatch_workflow(&self, dispatch: &WorkflowDispatch) -> Result<(), DispatchError>;

    /// Look up a repository by owner and name
    async fn fetch_repository(&self, owner: &str, name: &str) -> anyhow::Result<RepositoryInfo>;
}
