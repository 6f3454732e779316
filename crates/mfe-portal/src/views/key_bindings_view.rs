//! Key Bindings Help Panel View
//!
//! Floating panel listing every binding of the keymap, grouped by category.

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::view_models::KeyBindingsPanelViewModel;
use crate::views::{View, ViewId};
use portal_theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct KeyBindingsView;

impl KeyBindingsView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeyBindingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for KeyBindingsView {
    fn view_id(&self) -> ViewId {
        ViewId::KeyBindings
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action, _state: &AppState) -> bool {
        // Read-only: only closing (or quitting) gets through
        matches!(action, Action::Global(_))
    }
}

const LEFT_PADDING: &str = "  ";

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = KeyBindingsPanelViewModel::from_state(state);

    let panel_width = (area.width * 60 / 100).max(40).min(area.width);
    let panel_height = (vm.line_count() as u16 + 2).min(area.height);
    let panel_area = Rect {
        x: area.x + (area.width - panel_width) / 2,
        y: area.y + (area.height - panel_height) / 2,
        width: panel_width,
        height: panel_height,
    };

    f.render_widget(
        Block::default().style(Style::default().bg(Color::Black).add_modifier(Modifier::DIM)),
        area,
    );
    f.render_widget(Clear, panel_area);

    let footer_hint = Line::from(vec![
        Span::styled(format!(" {}", vm.close_hint), theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .border_style(theme.panel_border())
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint);

    let paragraph = Paragraph::new(content_lines(&vm, theme))
        .block(block)
        .style(theme.panel_background());
    f.render_widget(paragraph, panel_area);
}

fn content_lines<'a>(vm: &'a KeyBindingsPanelViewModel, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    for section in &vm.sections {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled(section.category.as_str(), theme.section_header()),
        ]));
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::styled("─".repeat(section.category.chars().count()), theme.muted()),
        ]));

        for binding in &section.bindings {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::styled(format!("{:<16}", binding.keys), theme.key_hint()),
                Span::styled(binding.description.as_str(), theme.key_description()),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}
