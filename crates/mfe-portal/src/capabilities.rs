//! Panel capability system
//!
//! Views declare what kind of input they currently take, so the keyboard
//! middleware can route keys without knowing about concrete panels.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// Character keys are typed into an input instead of triggering bindings
        const TEXT_INPUT = 1 << 0;

        /// Arrow keys move between items (fields, list entries)
        const ITEM_NAVIGATION = 1 << 1;
    }
}

impl PanelCapabilities {
    /// Check if character keys should go to a text input
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    /// Check if panel supports item navigation
    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_are_independent() {
        let form = PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION;
        assert!(form.accepts_text_input());
        assert!(form.supports_item_navigation());

        let list = PanelCapabilities::ITEM_NAVIGATION;
        assert!(!list.accepts_text_input());

        assert!(!PanelCapabilities::default().supports_item_navigation());
    }
}
