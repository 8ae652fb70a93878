use crate::app::state::ThemeSelectionState;
use crate::theme::{PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Palette picker. Each row previews the colors used for catalog meals,
/// free text and the cursor.
pub struct ThemeSelectionModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ThemeSelectionState,
    pub current: PaletteType,
}

fn swatches(palette: PaletteType) -> Vec<Span<'static>> {
    let p = palette.palette();
    [p.catalog, p.free_text, p.accent, p.mail]
        .into_iter()
        .map(|color| Span::styled("██", Style::default().fg(color)))
        .collect()
}

impl Widget for ThemeSelectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(40, 30, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SELECT THEME ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let items: Vec<ListItem> = self
            .state
            .themes
            .iter()
            .enumerate()
            .map(|(i, &palette)| {
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };

                let mut spans = vec![Span::styled(if selected { "> " } else { "  " }, style)];
                spans.extend(swatches(palette));
                spans.push(Span::styled(format!(" {}", palette.label()), style));
                if palette == self.current {
                    spans.push(Span::styled(" (current)", self.theme.dimmed));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        List::new(items).block(block).render(modal_area, buf);
    }
}
