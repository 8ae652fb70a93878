use crate::domain::models::Zone;

/// Selected cell of the week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCursor {
    pub day: usize,
    pub zone: Zone,
}

impl GridCursor {
    pub fn move_left(&mut self, day_count: usize) {
        if day_count > 0 {
            self.day = self.day.checked_sub(1).unwrap_or(day_count - 1);
        }
    }

    pub fn move_right(&mut self, day_count: usize) {
        if day_count > 0 {
            self.day = (self.day + 1) % day_count;
        }
    }

    pub fn toggle_zone(&mut self) {
        self.zone = match self.zone {
            Zone::Upper => Zone::Lower,
            Zone::Lower => Zone::Upper,
        };
    }

    /// Keeps the cursor inside a grid that may have shrunk.
    pub fn clamp(&mut self, day_count: usize) {
        self.day = self.day.min(day_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_moves_wrap() {
        let mut cursor = GridCursor::default();
        cursor.move_left(6);
        assert_eq!(cursor.day, 5);
        cursor.move_right(6);
        assert_eq!(cursor.day, 0);

        cursor.toggle_zone();
        assert_eq!(cursor.zone, Zone::Lower);

        cursor.day = 9;
        cursor.clamp(3);
        assert_eq!(cursor.day, 2);
    }
}
