use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect, draw_drop_shadow};

/// Rejected commands and failures, with recovery hints underneath.
pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl ErrorModal<'_> {
    fn title(&self) -> (&'static str, Style) {
        match self.error.severity {
            ErrorSeverity::Info => (" INFO ", self.theme.header_item),
            ErrorSeverity::Warning => (" REJECTED ", self.theme.header_warn),
            ErrorSeverity::Error => (" ERROR ", self.theme.status_error),
        }
    }

    fn hints_heading(&self) -> &'static str {
        match self.error.severity {
            ErrorSeverity::Warning => "Try:",
            _ => "Hints:",
        }
    }
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 30, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let (title_text, title_style) = self.title();
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(title_text, title_style),
                Span::raw(" "),
            ]))
            .title_bottom(
                Line::from(vec![
                    Span::styled(" Esc ", self.theme.footer_segment_key),
                    Span::styled(" dismiss ", self.theme.footer_segment_val),
                    Span::styled(
                        format!(" {} ", self.error.timestamp.format("%H:%M:%S")),
                        self.theme.dimmed,
                    ),
                ])
                .right_aligned(),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(title_style)
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.error.message.as_str(),
                self.theme.footer_segment_val,
            )),
        ];

        if !self.error.suggestions.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                self.hints_heading(),
                self.theme.footer_group_name,
            )));
            lines.extend(self.error.suggestions.iter().map(|hint| {
                Line::from(vec![
                    Span::styled("  • ", self.theme.header_item),
                    Span::styled(hint.as_str(), self.theme.footer_segment_key),
                ])
            }));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(error: &ErrorState) -> String {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 40);
        let mut buf = Buffer::empty(area);
        ErrorModal {
            theme: &theme,
            error,
        }
        .render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_rejection_shows_hints() {
        let error = ErrorState::new(
            "Unknown day \"xyz\".",
            ErrorSeverity::Warning,
            vec!["Known days: mon, tue".to_string()],
        );
        let text = rendered(&error);
        assert!(text.contains("REJECTED"));
        assert!(text.contains("Try:"));
        assert!(text.contains("Known days: mon, tue"));
        assert!(text.contains("dismiss"));
    }

    #[test]
    fn test_no_hint_heading_without_hints() {
        let error = ErrorState::new("disk full", ErrorSeverity::Error, Vec::new());
        let text = rendered(&error);
        assert!(text.contains("ERROR"));
        assert!(!text.contains("Hints:"));
    }
}
