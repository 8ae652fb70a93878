use crate::app::state::HeaderState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub state: &'a HeaderState,
    pub theme: &'a Theme,
    pub terminal_width: u16,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Separator styles: fg = current segment bg, bg = next segment bg
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let week_bg = self.theme.header_week.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let spans = vec![
            Span::styled(format!(" {} MEALPLAN ", glyphs::MENU), self.theme.header_logo),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(week_bg)),
            Span::styled(&self.state.week_text, self.theme.header_week),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(week_bg).bg(stats_bg)),
            Span::styled(&self.state.stats_text, self.theme.header_stats),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(stats_bg).bg(base_bg)),
            Span::styled(" ".repeat(self.terminal_width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
