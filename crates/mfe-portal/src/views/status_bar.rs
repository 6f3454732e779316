//! Status Bar Widget
//!
//! Format: `[timestamp] emoji title: description            [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &ts, vm.metadata_style);
            x += ts.chars().count() as u16;
        }

        buf.set_string(x, area.y, format!("{} ", vm.emoji), vm.message_style);
        // Emoji render two cells wide
        x += 3;

        let source = if vm.source.is_empty() {
            String::new()
        } else {
            format!("[{}]", vm.source)
        };
        let source_width = source.chars().count() as u16;

        let available = area
            .width
            .saturating_sub(x - area.x)
            .saturating_sub(source_width + 2) as usize;
        if vm.message.chars().count() > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if !source.is_empty() && area.width > source_width + 1 {
            let source_x = area.x + area.width - source_width - 1;
            buf.set_string(source_x, area.y, &source, vm.metadata_style);
        }
    }
}
