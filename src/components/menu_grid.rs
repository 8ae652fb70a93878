use crate::app::state::GridCursor;
use crate::domain::{
    days::DayConfig,
    models::{MealEntry, MenuGrid, Zone},
};
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// The week as one column per day, upper zone above lower zone.
pub struct MenuGridView<'a> {
    pub grid: Option<&'a MenuGrid>,
    pub days: &'a DayConfig,
    pub cursor: GridCursor,
    pub theme: &'a Theme,
    pub focused: bool,
}

/// Columns inside the bordered grid area, one per day.
pub fn day_columns(area: Rect, day_count: usize) -> Vec<Rect> {
    if day_count == 0 {
        return Vec::new();
    }
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let count = u32::try_from(day_count).unwrap_or(u32::MAX);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..day_count).map(|_| Constraint::Ratio(1, count)))
        .split(inner)
        .to_vec()
}

/// Splits a day column into its label row, upper cell and lower cell.
pub fn day_cells(column: Rect) -> (Rect, Rect, Rect) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Ratio(1, 2),
            Constraint::Ratio(1, 2),
        ])
        .split(column);
    (parts[0], parts[1], parts[2])
}

/// Slot under a terminal position, if any.
pub fn cell_at(area: Rect, day_count: usize, column: u16, row: u16) -> Option<(usize, Zone)> {
    let position = Position::new(column, row);
    day_columns(area, day_count)
        .into_iter()
        .enumerate()
        .find_map(|(day, rect)| {
            let (_, upper, lower) = day_cells(rect);
            if upper.contains(position) {
                Some((day, Zone::Upper))
            } else if lower.contains(position) {
                Some((day, Zone::Lower))
            } else {
                None
            }
        })
}

impl MenuGridView<'_> {
    fn render_cell(&self, entry: Option<&MealEntry>, selected: bool, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let border_style = if selected && self.focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let block = if selected {
            block.style(self.theme.slot_selected)
        } else {
            block
        };

        let mut lines = Vec::new();
        match entry {
            Some(e) if !e.is_unset() && e.is_free_text() => {
                lines.push(Line::from(Span::styled(e.name(), self.theme.slot_free_text)));
            }
            Some(e) if !e.is_unset() => {
                lines.push(Line::from(Span::styled(e.name(), self.theme.slot_catalog)));
                if !e.image_ref().is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("{} {}", glyphs::IMAGE, e.image_ref()),
                        self.theme.slot_image,
                    )));
                }
            }
            _ => lines.push(Line::from(Span::styled("·", self.theme.slot_empty))),
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl Widget for MenuGridView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (border, title_style) = if self.focused {
            (self.theme.border_focus, self.theme.header_active)
        } else {
            (self.theme.border, self.theme.header_item)
        };
        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" WEEK MENU ", title_style),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .render(area, buf);

        let day_count = self
            .grid
            .map_or_else(|| self.days.day_count(), MenuGrid::day_count);

        for (day, column) in day_columns(area, day_count).into_iter().enumerate() {
            let (label_area, upper, lower) = day_cells(column);
            let is_selected_day = day == self.cursor.day;

            let label = self.days.label(day).unwrap_or("?");
            let (label_text, label_style) = if is_selected_day {
                (format!("{} {label}", glyphs::CURSOR), self.theme.day_label_selected)
            } else {
                (label.to_string(), self.theme.day_label)
            };
            Paragraph::new(Line::from(Span::styled(label_text, label_style)))
                .alignment(Alignment::Center)
                .render(label_area, buf);

            for (zone, cell) in [(Zone::Upper, upper), (Zone::Lower, lower)] {
                let entry = self.grid.and_then(|g| g.slot(day, zone));
                let selected = is_selected_day && zone == self.cursor.zone;
                self.render_cell(entry, selected, cell, buf);
            }
        }
    }
}
