#[derive(Debug, Clone, PartialEq, Default)]
pub struct MailPreviewState {
    pub content: String,
    pub lines: Vec<String>,
    pub scroll: u16,
}

impl MailPreviewState {
    #[must_use]
    pub fn new(content: String) -> Self {
        let lines = content.lines().map(str::to_string).collect();
        Self {
            content,
            lines,
            scroll: 0,
        }
    }

    pub fn scroll_down(&mut self, n: u16) {
        let max_scroll = self.lines.len().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(n).min(max_scroll);
    }

    pub fn scroll_up(&mut self, n: u16) {
        self.scroll = self.scroll.saturating_sub(n);
    }
}
