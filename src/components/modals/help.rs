use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            (" h / ←", "Previous day"),
            (" l / →", "Next day"),
            (" j / k", "Switch upper / lower zone"),
            (" click", "Select a slot"),
        ],
    ),
    (
        "Slots",
        &[
            (" s / Enter", "Set a sandwich on the slot"),
            (" t", "Set free text on the slot"),
            (" x / Del", "Clear the slot"),
            (" : / i", "Open the command bar"),
        ],
    ),
    (
        "Commands",
        &[
            (" mon-u-s club", "Sandwich from the meal list"),
            (" tue-l-t soup", "Free text"),
            (" wed-u-clear", "Clear (also reset, delete, remove)"),
            (" Tab / ↑↓", "Accept / pick a suggestion"),
            (" Ctrl-P / Ctrl-N", "Browse recent commands"),
        ],
    ),
    (
        "General",
        &[
            (" m", "Build the weekly mail (w saves it)"),
            (" T", "Choose a theme"),
            (" ?", "Show this help"),
            (" Esc", "Close modal / clear errors"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl HelpModal<'_> {
    fn rows(&self) -> Vec<Row<'static>> {
        let key_style: Style = self.theme.footer_segment_key;
        let desc_style: Style = self.theme.list_item;
        let category_style: Style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (category, entries)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *entries {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }
        rows
    }
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        Table::new(
            self.rows(),
            [Constraint::Percentage(35), Constraint::Percentage(65)],
        )
        .block(block)
        .render(help_area, buf);
    }
}
