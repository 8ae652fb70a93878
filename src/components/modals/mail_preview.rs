use crate::app::state::MailPreviewState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

pub struct MailPreviewModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a MailPreviewState,
}

impl Widget for MailPreviewModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(80, 80, area);
        if modal_area.width == 0 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" WEEKLY MAIL ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled("j/k", self.theme.footer_segment_key),
                    Span::raw(" scroll "),
                    Span::styled("w", self.theme.footer_segment_key),
                    Span::raw(" save "),
                    Span::styled("Esc", self.theme.footer_segment_key),
                    Span::raw(" close "),
                ])
                .alignment(Alignment::Center),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        // Ingredient rows start with "- "; everything else is template prose
        let lines: Vec<Line> = self
            .state
            .lines
            .iter()
            .map(|l| {
                if let Some(rest) = l.strip_prefix("- ") {
                    match rest.split_once(':') {
                        Some((name, ingredients)) => Line::from(vec![
                            Span::styled("- ", self.theme.dimmed),
                            Span::styled(name, self.theme.mail_heading),
                            Span::styled(format!(":{ingredients}"), self.theme.mail_text),
                        ]),
                        None => Line::from(Span::styled(l.as_str(), self.theme.mail_text)),
                    }
                } else {
                    Line::from(Span::styled(l.as_str(), self.theme.mail_text))
                }
            })
            .collect();

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(modal_area, buf);
    }
}
