use crate::app::state::CommandBarState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{bottom_rect, draw_drop_shadow};
use crate::app::suggestion::MAX_SUGGESTIONS;

pub struct CommandBarModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandBarState<'a>,
}

impl Widget for CommandBarModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Input row, separator, suggestion rows and two border rows
        let height = 2 + 1 + 1 + MAX_SUGGESTIONS as u16;
        let modal_area = bottom_rect(80, height, 1, area);
        if modal_area.width < 4 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Suggestions
            ])
            .split(inner_area);

        let prompt = Span::styled(" > ", self.theme.footer_segment_key);
        buf.set_span(layout[0].x, layout[0].y, &prompt, layout[0].width);
        let input_area = Rect {
            x: layout[0].x + 3,
            width: layout[0].width.saturating_sub(3),
            ..layout[0]
        };
        if input_area.width > 0 {
            Widget::render(&self.state.text_area, input_area, buf);
        }

        if layout[1].height > 0 {
            let separator = "─".repeat(layout[1].width as usize);
            buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border);
        }

        if self.state.suggestions.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No suggestions.",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(layout[2].x, layout[2].y, &no_results, layout[2].width);
            return;
        }

        let items: Vec<ListItem> = self
            .state
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, suggestion)| {
                let (style, prefix) = if Some(i) == self.state.selected {
                    (self.theme.list_selected, "> ")
                } else {
                    (self.theme.list_item, "  ")
                };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(suggestion.as_str(), style),
                ]))
            })
            .collect();
        List::new(items).render(layout[2], buf);
    }
}
