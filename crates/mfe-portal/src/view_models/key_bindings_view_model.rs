//! Key Bindings Panel View Model
//!
//! Groups the keymap by command category for the help panel.

use crate::command_id::CommandId;
use crate::keybindings::Keymap;
use crate::state::AppState;

/// A single binding row in the panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingRow {
    /// Key hint (e.g., "j/↓", "Ctrl+S")
    pub keys: String,
    pub description: String,
}

/// A section grouping related bindings
#[derive(Debug, Clone)]
pub struct BindingSection {
    pub category: String,
    pub bindings: Vec<BindingRow>,
}

/// View model for the key bindings help panel
#[derive(Debug, Clone)]
pub struct KeyBindingsPanelViewModel {
    pub title: String,
    pub sections: Vec<BindingSection>,
    /// Close hint (e.g., "?/Esc")
    pub close_hint: String,
}

impl KeyBindingsPanelViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let keymap = &state.keymap;

        Self {
            title: " Keyboard Bindings ".to_string(),
            sections: Self::build_sections(keymap),
            close_hint: keymap
                .compact_hint_for_command(CommandId::KeyBindingsToggleView)
                .map(|h| format!("{}/Esc", h))
                .unwrap_or_else(|| "?/Esc".to_string()),
        }
    }

    /// Total rendered lines: header and separator per section, its rows, a blank line
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|s| s.bindings.len() + 3).sum()
    }

    fn build_sections(keymap: &Keymap) -> Vec<BindingSection> {
        CommandId::category_order()
            .iter()
            .filter_map(|category| {
                let rows = keymap
                    .bindings()
                    .filter(|binding| binding.command.category() == *category)
                    .map(|binding| BindingRow {
                        keys: binding.hint.clone(),
                        description: binding.command.description().to_string(),
                    })
                    .collect();
                let bindings = Self::deduplicate_bindings(rows);

                (!bindings.is_empty()).then(|| BindingSection {
                    category: (*category).to_string(),
                    bindings,
                })
            })
            .collect()
    }

    /// Merge rows of the same command, combining their keys
    fn deduplicate_bindings(bindings: Vec<BindingRow>) -> Vec<BindingRow> {
        let mut result: Vec<BindingRow> = Vec::new();

        for binding in bindings {
            match result
                .iter_mut()
                .find(|b| b.description == binding.description)
            {
                Some(existing) => {
                    if !existing.keys.split('/').any(|k| k == binding.keys) {
                        existing.keys = format!("{}/{}", existing.keys, binding.keys);
                    }
                }
                None => result.push(binding),
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_follow_category_order() {
        let vm = KeyBindingsPanelViewModel::from_state(&AppState::default());
        let categories: Vec<&str> = vm.sections.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, CommandId::category_order().to_vec());
    }

    #[test]
    fn test_keys_of_one_command_are_combined() {
        let rows = vec![
            BindingRow {
                keys: "q".to_string(),
                description: "Close / quit".to_string(),
            },
            BindingRow {
                keys: "Esc".to_string(),
                description: "Close / quit".to_string(),
            },
            BindingRow {
                keys: "q".to_string(),
                description: "Close / quit".to_string(),
            },
        ];
        let deduped = KeyBindingsPanelViewModel::deduplicate_bindings(rows);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].keys, "q/Esc");
    }

    #[test]
    fn test_form_commands_are_listed() {
        let vm = KeyBindingsPanelViewModel::from_state(&AppState::default());
        let form = vm
            .sections
            .iter()
            .find(|s| s.category == "Create MFE")
            .unwrap();
        assert!(form.bindings.iter().any(|b| b.description == "Create MFE"));
        assert!(vm.line_count() > vm.sections.len() * 3);
    }
}
