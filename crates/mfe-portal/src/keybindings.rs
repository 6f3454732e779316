//! Keybinding system
//!
//! Maps keyboard input to commands.
//!
//! - `KeyBinding`: A mapping from a key pattern to a command ID
//! - `KeyPattern`: Textual representation of keys (e.g., "ctrl+r", "shift+tab")
//! - `Keymap`: Collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+r", "shift+tab"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+R"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "a", "1", "G" (case-sensitive for single chars)
/// - With modifiers: "ctrl+r", "shift+tab", "ctrl+shift+c"
/// - Special keys: "tab", "enter", "esc", "backspace", "up", "down", "left", "right"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    // Single characters keep their case; uppercase comes with SHIFT from the terminal
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let pattern_lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    let code = parse_key_code(key_part)?;
    Some(ParsedKeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        s if s.chars().count() == 1 => s.chars().next().map(KeyCode::Char),

        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings; unparsable patterns are dropped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern '{}'", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// All commands bound to this key, in binding order
    ///
    /// Multiple commands can share a key (e.g., Right is both "next template"
    /// and "enter panel"); the caller picks the first one the active view accepts.
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                // BackTab comes with or without SHIFT depending on the terminal
                if pattern.code == KeyCode::BackTab {
                    key.code == KeyCode::BackTab
                } else {
                    key.code == pattern.code && key.modifiers == pattern.modifiers
                }
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// Get all bindings (for displaying in help)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Get a compact hint string for a command (e.g., "j/↓" for NavigateNext)
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut unique_hints: Vec<&str> = Vec::new();
        for (binding, _) in &self.bindings {
            if binding.command == command && !unique_hints.contains(&binding.hint.as_str()) {
                unique_hints.push(&binding.hint);
            }
        }

        if unique_hints.is_empty() {
            None
        } else {
            Some(unique_hints.join("/"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("j", "j", NavigateNext),
            KeyBinding::new("down", "↓", NavigateNext),
            KeyBinding::new("k", "k", NavigatePrevious),
            KeyBinding::new("right", "→", NavigateRight),
            KeyBinding::new("right", "→", FocusContent),
            KeyBinding::new("ctrl+r", "Ctrl+R", FormReset),
            KeyBinding::new("backtab", "Shift+Tab", NavigatePrevious),
            KeyBinding::new("G", "G", ShowDashboard),
        ])
    }

    #[test]
    fn test_parse_modifiers() {
        let pattern = parse_key_pattern("ctrl+r").unwrap();
        assert_eq!(pattern.code, KeyCode::Char('r'));
        assert_eq!(pattern.modifiers, KeyModifiers::CONTROL);

        let pattern = parse_key_pattern("shift+tab").unwrap();
        assert_eq!(pattern.code, KeyCode::Tab);
        assert_eq!(pattern.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_uppercase_implies_shift() {
        let pattern = parse_key_pattern("G").unwrap();
        assert_eq!(pattern.code, KeyCode::Char('G'));
        assert_eq!(pattern.modifiers, KeyModifiers::SHIFT);
    }

    #[test]
    fn test_parse_invalid_pattern() {
        assert!(parse_key_pattern("hyper+x").is_none());
        assert!(parse_key_pattern("notakey").is_none());
    }

    #[test]
    fn test_match_single_and_modified_keys() {
        let keymap = test_keymap();

        let j = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(keymap.match_key(&j), vec![CommandId::NavigateNext]);

        let ctrl_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(keymap.match_key(&ctrl_r), vec![CommandId::FormReset]);

        let plain_r = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE);
        assert!(keymap.match_key(&plain_r).is_empty());
    }

    #[test]
    fn test_match_returns_all_candidates_in_order() {
        let keymap = test_keymap();
        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(
            keymap.match_key(&right),
            vec![CommandId::NavigateRight, CommandId::FocusContent]
        );
    }

    #[test]
    fn test_backtab_matches_with_or_without_shift() {
        let keymap = test_keymap();
        let with_shift = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        let without = KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(keymap.match_key(&with_shift), vec![CommandId::NavigatePrevious]);
        assert_eq!(keymap.match_key(&without), vec![CommandId::NavigatePrevious]);
    }

    #[test]
    fn test_compact_hint() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateNext),
            Some("j/↓".to_string())
        );
        assert_eq!(keymap.compact_hint_for_command(CommandId::GlobalQuit), None);
    }
}
