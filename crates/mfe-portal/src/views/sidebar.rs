//! Sidebar: portal title, panel list, signed-in user

use crate::state::{ActiveView, AppState, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let focused = state.portal.focus == Focus::Sidebar;

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(if focused {
            theme.focused_border()
        } else {
            theme.panel_border()
        })
        .style(theme.sidebar_background());
    let inner = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 1,
    });
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let header = vec![
        Line::from(Span::styled("Developer Portal", theme.heading())),
        Line::from(Span::styled("Micro Frontend Manager", theme.muted())),
    ];
    f.render_widget(Paragraph::new(header), chunks[0]);

    let items: Vec<ListItem> = ActiveView::iter()
        .enumerate()
        .map(|(index, view)| {
            let label = format!(" {} {}", index + 1, view.label());
            let style = if view == state.portal.active_view {
                let style = theme.active_item();
                if focused {
                    style
                } else {
                    style.remove_modifier(Modifier::BOLD)
                }
            } else {
                theme.text_secondary()
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();
    f.render_widget(List::new(items), chunks[1]);

    let footer = vec![
        Line::from(Span::styled("Developer", theme.text_secondary().bold())),
        Line::from(Span::styled(format!("@{}", state.owner), theme.muted())),
    ];
    f.render_widget(Paragraph::new(footer), chunks[2]);
}
