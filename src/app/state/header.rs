use crate::domain::models::MenuGrid;

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    pub week_text: String,
    pub stats_text: String,
}

impl HeaderState {
    #[must_use]
    pub fn from_grid(grid: &MenuGrid) -> Self {
        let total = grid.day_count() * 2;
        let filled = grid.filled_count();
        let free_text = grid
            .entries()
            .filter(|e| e.is_free_text() && !e.is_unset())
            .count();
        Self {
            week_text: format!(" {} days ", grid.day_count()),
            stats_text: format!(" {filled}/{total} slots · {free_text} free text "),
        }
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            week_text: " no menu ".to_string(),
            stats_text: " Loading... ".to_string(),
        }
    }
}
