//! Create MFE panel
//!
//! The form on top, the progress of the current run below it, and the
//! created repository once the run completed.

use crate::state::AppState;
use crate::view_models::{CreateMfeViewModel, FieldRowViewModel, StepState};
use portal_theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the field label column
const LABEL_WIDTH: usize = 18;

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = CreateMfeViewModel::from_state(state);

    f.render_widget(Block::default().style(theme.panel_background()), area);
    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let progress_height = if vm.steps.is_empty() {
        0
    } else {
        vm.steps.len() as u16 + 2
    };
    let record_height = if vm.repository_rows.is_empty() {
        0
    } else {
        vm.repository_rows.len() as u16 + 3
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(13),
            Constraint::Length(progress_height),
            Constraint::Length(record_height),
            Constraint::Min(0),
        ])
        .split(inner);

    let header = vec![
        Line::from(Span::styled("Create Micro Frontend", theme.heading())),
        Line::from(Span::styled(
            "Set up a new micro frontend application with your preferred template and configuration.",
            theme.text_secondary(),
        )),
    ];
    f.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), chunks[0]);

    render_form(&vm, theme, state.portal.focus == crate::state::Focus::Content, chunks[1], f);

    if !vm.steps.is_empty() {
        render_progress(&vm, theme, chunks[2], f);
    }
    if !vm.repository_rows.is_empty() {
        render_record(&vm, theme, chunks[3], f);
    }
}

fn render_form(vm: &CreateMfeViewModel, theme: &Theme, focused: bool, area: Rect, f: &mut Frame) {
    let mut footer = vec![Span::raw(" ")];
    for (key, description) in &vm.footer_hints {
        footer.push(Span::styled(*key, theme.key_hint().bold()));
        footer.push(Span::styled(format!(" {}  ", description), theme.muted()));
    }

    let block = Block::default()
        .title(" Project Configuration ")
        .title_style(theme.panel_title())
        .title_bottom(Line::from(footer))
        .borders(Borders::ALL)
        .border_style(if focused {
            theme.focused_border()
        } else {
            theme.panel_border()
        });
    let inner = block.inner(area).inner(Margin {
        horizontal: 1,
        vertical: 0,
    });
    f.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Configure your new micro frontend project details and template selection.",
            theme.muted(),
        )),
        Line::from(""),
    ];
    for field in &vm.fields {
        lines.push(field_line(field, theme));
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(field.hint, theme.muted().italic()),
        ]));
    }

    if let Some((name, description)) = vm.template_info {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH + 2)),
            Span::styled(name, theme.accent().bold()),
            Span::styled(format!(" - {}", description), theme.text_secondary()),
        ]));
    } else {
        lines.push(Line::from(""));
    }

    let button_style = if vm.submit_enabled {
        Style::default()
            .fg(theme.active_fg)
            .bg(theme.active_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        theme.muted()
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(format!(" {} ", vm.submit_label), button_style),
    ]));

    f.render_widget(Paragraph::new(lines), inner);
}

fn field_line<'a>(field: &'a FieldRowViewModel, theme: &Theme) -> Line<'a> {
    let indicator = if field.focused { "> " } else { "  " };
    let label_style = if field.focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };

    let mut spans = vec![
        Span::styled(indicator, theme.accent().bold()),
        Span::styled(
            format!("{:width$}", format!("{} *", field.label), width = LABEL_WIDTH),
            label_style,
        ),
    ];

    if field.value.is_empty() {
        if field.focused {
            spans.push(Span::styled("▌", theme.accent()));
        }
        spans.push(Span::styled(
            field.placeholder,
            theme.muted().italic().add_modifier(Modifier::DIM),
        ));
    } else if field.focused {
        spans.push(Span::styled(
            field.value.as_str(),
            Style::default()
                .fg(theme.active_fg)
                .bg(theme.selection_bg()),
        ));
        spans.push(Span::styled("▌", theme.accent()));
    } else {
        spans.push(Span::styled(field.value.as_str(), theme.text()));
    }

    Line::from(spans)
}

fn render_progress(vm: &CreateMfeViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let lines: Vec<Line> = vm
        .steps
        .iter()
        .map(|step| {
            let (icon_style, label_style) = match step.state {
                StepState::Done => (theme.success(), theme.text()),
                StepState::Active => (theme.accent().bold(), theme.text().bold()),
                StepState::Pending => (theme.muted(), theme.muted()),
            };
            Line::from(vec![
                Span::styled(format!(" {} ", step.icon), icon_style),
                Span::styled(step.label.as_str(), label_style),
            ])
        })
        .collect();

    let block = Block::default()
        .title(" Workflow Progress ")
        .title_style(theme.panel_title())
        .borders(Borders::ALL)
        .border_style(theme.panel_border());
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_record(vm: &CreateMfeViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut lines = Vec::new();
    if let Some(message) = &vm.completion {
        lines.push(Line::from(Span::styled(message.as_str(), theme.success().bold())));
    }
    for (label, value) in &vm.repository_rows {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", label), theme.text_secondary()),
            Span::styled(value.as_str(), theme.text()),
        ]));
    }

    let block = Block::default()
        .title(" Created Repository ")
        .title_style(theme.panel_title())
        .borders(Borders::ALL)
        .border_style(theme.panel_border());
    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}
