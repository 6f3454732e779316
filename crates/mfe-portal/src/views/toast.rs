//! Toast: the latest notification in the top-right corner until it expires

use crate::view_models::ToastViewModel;
use portal_theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 48;

pub fn render(vm: &ToastViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let width = TOAST_WIDTH.min(area.width);
    let height = if vm.description.is_empty() { 3 } else { 5 }.min(area.height);
    let toast_area = Rect {
        x: area.x + area.width - width,
        y: area.y,
        width,
        height,
    };

    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{} ", vm.emoji)),
        Span::styled(vm.title.as_str(), Style::default().fg(vm.accent).bold()),
    ])];
    if !vm.description.is_empty() {
        lines.push(Line::from(Span::styled(
            vm.description.as_str(),
            theme.text_secondary(),
        )));
    }

    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(vm.accent))
                .style(theme.card_background()),
        ),
        toast_area,
    );
}
