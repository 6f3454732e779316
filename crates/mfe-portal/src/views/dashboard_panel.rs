//! Dashboard panel: stat cards and recent activity

use crate::state::AppState;
use crate::view_models::DashboardViewModel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = DashboardViewModel::new(theme);

    f.render_widget(Block::default().style(theme.panel_background()), area);
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let header = vec![
        Line::from(Span::styled("Dashboard", theme.heading())),
        Line::from(Span::styled(
            "Overview of your micro frontend ecosystem",
            theme.text_secondary(),
        )),
    ];
    f.render_widget(Paragraph::new(header), chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, vm.stats.len() as u32); vm.stats.len()])
        .split(chunks[1]);
    for (card, area) in vm.stats.iter().zip(cards.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.panel_border())
            .style(theme.card_background());
        let text = vec![
            Line::from(Span::styled(card.title, theme.text_secondary())),
            Line::from(Span::styled(card.value, theme.text().fg(card.color).bold())),
        ];
        f.render_widget(Paragraph::new(text).block(block), *area);
    }

    let rows = vm.recent.iter().map(|mfe| {
        let status_style = if mfe.is_deployed() {
            theme.success()
        } else {
            theme.warning()
        };
        Row::new(vec![
            Span::styled(mfe.name, theme.text().bold()),
            Span::styled(format!("Updated {}", mfe.last_update), theme.muted()),
            Span::styled(mfe.status, status_style),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ],
    )
    .block(
        Block::default()
            .title(" Recent Micro Frontends ")
            .title_bottom(Line::from(Span::styled(
                " Latest activity across your MFE projects ",
                theme.muted(),
            )))
            .title_style(theme.panel_title())
            .borders(Borders::ALL)
            .border_style(theme.panel_border()),
    )
    .style(theme.panel_background());
    f.render_widget(table, chunks[3]);
}
