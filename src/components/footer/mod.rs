mod groups;

use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};
pub use groups::{HintGroup, KeyHint};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment
        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {}  ", err.message), theme.status_error)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.status_info)
        } else if state.menu.is_none() {
            Span::styled("  LOADING  ", theme.status_warn)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        if let Some(prefix) = state.selected_slot_prefix() {
            spans.push(Span::styled(format!(" {prefix} "), theme.header_item));
            spans.push(Span::raw(" "));
        }

        // Background tasks
        if state.active_tasks.is_empty() {
            spans.push(Span::raw("  "));
        } else {
            let frame = glyphs::SPINNER[(state.frame_count as usize) % glyphs::SPINNER.len()];
            let tasks_text = format!(" {frame} {} ", state.active_tasks.join(", "));
            spans.push(Span::styled(tasks_text, theme.status_info));
            spans.push(Span::raw("  "));
        }

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in groups::get_groups(state) {
            let Some(first_hint) = group.hints.first() else {
                continue;
            };

            // Stop once not even the first item of a group fits
            let first_hint_width = first_hint.keys.len() + first_hint.label.len() + 4;
            if current_width + first_hint_width > available_width {
                break;
            }

            if area.width > 100 {
                let group_label =
                    Span::styled(format!("{}: ", group.title), theme.footer_group_name);
                if current_width + group_label.width() + first_hint_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for hint in group.hints {
                let key_str = format!(" {} ", hint.keys);
                let desc_str = format!(" {} ", hint.label);

                let hint_width = key_str.len() + desc_str.len();
                if current_width + hint_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if hint.active {
                    (
                        theme.header_active,
                        theme.header_active.add_modifier(ratatui::style::Modifier::DIM),
                    )
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };

                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += hint_width + 1;
            }
            spans.push(Span::raw("  "));
            current_width += 2;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
