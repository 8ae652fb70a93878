use crate::theme::PaletteType;

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSelectionState {
    pub selected_index: usize,
    pub themes: Vec<PaletteType>,
}

impl ThemeSelectionState {
    /// Opens the picker with the active palette highlighted.
    #[must_use]
    pub fn starting_at(current: PaletteType) -> Self {
        let themes = PaletteType::all().to_vec();
        let selected_index = themes.iter().position(|t| *t == current).unwrap_or(0);
        Self {
            selected_index,
            themes,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<PaletteType> {
        self.themes.get(self.selected_index).copied()
    }

    pub fn next(&mut self) {
        if !self.themes.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.themes.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.themes.is_empty() {
            self.selected_index = self
                .selected_index
                .checked_sub(1)
                .unwrap_or(self.themes.len() - 1);
        }
    }
}
