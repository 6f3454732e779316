//! Bootstrap Actions
//!
//! Actions for application initialization.

/// Actions for the bootstrap process
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapAction {
    /// Start the bootstrap process (prepares the GitHub client)
    Start,
}
