//! Context-sensitive actions
//!
//! These are semantic actions that views interpret differently based on context.
//! For example, `Confirm` (Enter key) means:
//! - Sidebar: move focus into the selected panel
//! - Create MFE form: submit

/// Semantic actions that views interpret differently.
///
/// Each view translates them to view-specific actions via `translate_context_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item (Enter key)
    Confirm,
}
