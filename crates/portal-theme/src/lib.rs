//! Centralized colors and styles for the developer portal
//!
//! The palette mirrors the slate/blue look of the portal: a dark sidebar,
//! blue for the active item, and green/yellow/red for status.

use ratatui::style::{palette::tailwind, Color, Modifier, Style};

/// Application theme
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub bg_primary: Color,
    pub bg_sidebar: Color,
    pub bg_panel: Color,
    pub bg_card: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accents
    pub accent_primary: Color,
    pub active_bg: Color,
    pub active_fg: Color,

    // Status
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Dashboard stat colors
    pub stat_blue: Color,
    pub stat_green: Color,
    pub stat_purple: Color,
    pub stat_orange: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_sidebar: tailwind::SLATE.c900,
            bg_panel: tailwind::SLATE.c900,
            bg_card: tailwind::SLATE.c800,

            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c300,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::BLUE.c400,
            active_bg: tailwind::BLUE.c600,
            active_fg: Color::White,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::YELLOW.c400,
            status_info: tailwind::BLUE.c400,

            stat_blue: tailwind::BLUE.c500,
            stat_green: tailwind::GREEN.c500,
            stat_purple: tailwind::PURPLE.c500,
            stat_orange: tailwind::ORANGE.c500,
        }
    }

    /// Style for panel backgrounds
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for the sidebar background
    pub fn sidebar_background(&self) -> Style {
        Style::default().bg(self.bg_sidebar)
    }

    /// Style for card backgrounds (stats, form sections)
    pub fn card_background(&self) -> Style {
        Style::default().bg(self.bg_card)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Border style for the panel that currently has keyboard focus
    pub fn focused_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for page headings
    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Enter" in "Enter create")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    pub fn key_description(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the active sidebar item
    pub fn active_item(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.active_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Background used behind a focused input value
    pub fn selection_bg(&self) -> Color {
        tailwind::SLATE.c700
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent_primary)
    }

    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.status_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success(&self) -> Style {
        Style::default()
            .fg(self.status_success)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default()
            .fg(self.status_warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}
