use portal_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Placeholder for panels that have no content yet
pub fn render(title: &str, description: &str, theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(theme.panel_background()), area);
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(9), Constraint::Min(0)])
        .split(inner);

    let header = vec![
        Line::from(Span::styled(title.to_string(), theme.heading())),
        Line::from(Span::styled(description.to_string(), theme.text_secondary())),
    ];
    f.render_widget(Paragraph::new(header), chunks[0]);

    let card_width = chunks[1].width.min(60);
    let card = Rect {
        x: chunks[1].x + (chunks[1].width - card_width) / 2,
        width: card_width,
        ..chunks[1]
    };
    let body = vec![
        Line::from(""),
        Line::from(Span::styled("🚧 Coming Soon", theme.panel_title())),
        Line::from(""),
        Line::from(Span::styled(
            "This feature is currently under development and will be available in a future update.",
            theme.text_secondary(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Stay tuned for more updates on this exciting new feature!",
            theme.muted(),
        )),
    ];
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.panel_border())
                .style(theme.card_background()),
        );
    f.render_widget(paragraph, card);
}
