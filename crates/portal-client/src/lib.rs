//! GitHub workflow dispatch client
//!
//! This crate provides a trait-based client for the two GitHub calls the
//! portal makes: dispatching the repository-creation workflow and looking
//! up the repository it produced.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │             WorkflowClient trait                │
//! │  - dispatch_workflow()                          │
//! │  - fetch_repository()                           │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! Tokens are resolved at runtime by [`TokenResolver`]; nothing is
//! embedded in the binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use portal_client::{ClientManager, DispatchInputs, WorkflowDispatch};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut manager = ClientManager::new();
//! let client = manager.get_client().await?;
//!
//! let dispatch = WorkflowDispatch {
//!     owner: "mfepocautomation".into(),
//!     repository: "mfe-repository-factory".into(),
//!     workflow: "create-mfe-repository.yml".into(),
//!     git_ref: "main".into(),
//!     inputs: DispatchInputs {
//!         product_name: "my-app".into(),
//!         product_display_name: "My App".into(),
//!         repository_visibility: "private".into(),
//!     },
//! };
//! client.dispatch_workflow(&dispatch).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod client_manager;
pub mod octocrab_client;
pub mod types;

/// Default GitHub host (public GitHub)
pub const DEFAULT_HOST: &str = "github.com";

pub use client::WorkflowClient;
pub use client_manager::{ClientManager, TokenResolver};
pub use octocrab_client::OctocrabClient;
pub use types::{DispatchError, DispatchInputs, RepositoryInfo, WorkflowDispatch};
