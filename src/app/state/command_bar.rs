use super::input::AppTextArea;

/// Marks the start of a placeholder in a hint such as `mon-u-s <sandwich name>`.
const PLACEHOLDER_START: &str = " <";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommandBarState<'a> {
    pub text_area: AppTextArea<'a>,
    pub suggestions: Vec<String>,
    pub selected: Option<usize>,
    /// Position in the recent-command list while browsing with Ctrl-P/Ctrl-N.
    pub history_index: Option<usize>,
}

impl CommandBarState<'_> {
    #[must_use]
    pub fn text(&self) -> String {
        self.text_area.text()
    }

    /// Replaces the input and drops any suggestion selection.
    pub fn set_text(&mut self, text: &str, suggestions: Vec<String>) {
        self.text_area = AppTextArea::from_text(text);
        self.suggestions = suggestions;
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1) % self.suggestions.len(),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.suggestions.len() - 1,
            Some(i) => i - 1,
        });
    }

    /// Text the input should hold once the highlighted (or first) suggestion
    /// is accepted. Placeholders are dropped so the user can type the value.
    #[must_use]
    pub fn accepted_text(&self) -> Option<String> {
        let suggestion = self.suggestions.get(self.selected.unwrap_or(0))?;
        Some(match suggestion.find(PLACEHOLDER_START) {
            Some(pos) => format!("{} ", &suggestion[..pos]),
            None => suggestion.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(suggestions: &[&str]) -> CommandBarState<'static> {
        CommandBarState {
            suggestions: suggestions.iter().map(|s| (*s).to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_selection_wraps() {
        let mut state = bar(&["a", "b", "c"]);
        state.select_prev();
        assert_eq!(state.selected, Some(2));
        state.select_next();
        assert_eq!(state.selected, Some(0));

        let mut empty = bar(&[]);
        empty.select_next();
        assert_eq!(empty.selected, None);
    }

    #[test]
    fn test_accepted_text_strips_placeholder() {
        let mut state = bar(&["generate", "mon-u-s <sandwich name>", "mon-u-s "]);
        assert_eq!(state.accepted_text().as_deref(), Some("generate"));
        state.selected = Some(1);
        assert_eq!(state.accepted_text().as_deref(), Some("mon-u-s "));
        state.selected = Some(2);
        assert_eq!(state.accepted_text().as_deref(), Some("mon-u-s "));
        assert_eq!(bar(&[]).accepted_text(), None);
    }
}
