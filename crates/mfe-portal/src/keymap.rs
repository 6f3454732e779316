pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("h", "h", NavigateLeft),
        KeyBinding::new("left", "←", NavigateLeft),
        KeyBinding::new("l", "l", NavigateRight),
        KeyBinding::new("right", "→", NavigateRight),
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("tab", "Tab", FocusContent),
        // Panels
        KeyBinding::new("1", "1", ShowDashboard),
        KeyBinding::new("2", "2", ShowCreateMfe),
        KeyBinding::new("3", "3", ShowRepositories),
        KeyBinding::new("4", "4", ShowPackages),
        KeyBinding::new("5", "5", ShowSettings),
        // Create MFE (character keys are typed into the form while it has focus)
        KeyBinding::new("ctrl+s", "Ctrl+S", FormSubmit),
        KeyBinding::new("ctrl+r", "Ctrl+R", FormReset),
        KeyBinding::new("o", "o", OpenCreatedRepository),
        KeyBinding::new("ctrl+o", "Ctrl+O", OpenCreatedRepository),
        // Help
        KeyBinding::new("?", "?", KeyBindingsToggleView),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("esc", "Esc", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
