use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    interpreter::SlotKind,
    state::{AppMode, AppState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::MoveLeft => {
            let day_count = state.day_count();
            state.cursor.move_left(day_count);
            UpdateResult::Handled(None)
        }
        Action::MoveRight => {
            let day_count = state.day_count();
            state.cursor.move_right(day_count);
            UpdateResult::Handled(None)
        }
        Action::MoveUp | Action::MoveDown => {
            state.cursor.toggle_zone();
            UpdateResult::Handled(None)
        }
        Action::SelectSlot(day, zone) => {
            if *day < state.day_count() {
                state.cursor.day = *day;
                state.cursor.zone = *zone;
            }
            UpdateResult::Handled(None)
        }
        Action::ClearSelectedSlot => {
            // Routed through the interpreter so the cascade rule applies
            let command = state
                .selected_slot_prefix()
                .map(|prefix| Command::Execute(format!("{prefix}-clear")));
            UpdateResult::Handled(command)
        }
        Action::EditSelectedSlot(kind) => {
            if let Some(prefix) = state.selected_slot_prefix() {
                let prefill = format!("{prefix}-{} ", kind.token());
                super::command_bar::open(state, Some(&prefill));
            }
            UpdateResult::Handled(None)
        }
        Action::GenerateMail => {
            if state.mode != AppMode::Normal {
                return UpdateResult::Handled(None);
            }
            state.active_tasks.push("Generating mail".to_string());
            UpdateResult::Handled(Some(Command::GenerateMail))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Kind of value a slot should be edited with: free text slots reopen as text.
#[must_use]
pub fn edit_kind_for_selection(state: &AppState) -> SlotKind {
    state
        .menu
        .as_ref()
        .and_then(|m| m.slot(state.cursor.day, state.cursor.zone))
        .filter(|e| e.is_free_text() && !e.is_unset())
        .map_or(SlotKind::Sandwich, |_| SlotKind::Text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MealEntry, MenuGrid, Zone};

    #[test]
    fn test_clear_selected_slot_builds_command() {
        let mut state = AppState::default();
        state.cursor.day = 1;
        state.cursor.zone = Zone::Upper;

        let result = update(&mut state, &Action::ClearSelectedSlot);
        assert!(matches!(
            result,
            UpdateResult::Handled(Some(Command::Execute(ref c))) if c == "tue-u-clear"
        ));
    }

    #[test]
    fn test_edit_selected_slot_prefills_bar() {
        let mut state = AppState::default();
        state.cursor.zone = Zone::Lower;

        update(&mut state, &Action::EditSelectedSlot(SlotKind::Text));
        assert_eq!(state.mode, AppMode::CommandBar);
        assert_eq!(
            state.command_bar.as_ref().map(|b| b.text()),
            Some("mon-l-t ".to_string())
        );
    }

    #[test]
    fn test_select_slot_ignores_out_of_range() {
        let mut state = AppState::default();
        update(&mut state, &Action::SelectSlot(3, Zone::Lower));
        assert_eq!((state.cursor.day, state.cursor.zone), (3, Zone::Lower));

        update(&mut state, &Action::SelectSlot(42, Zone::Upper));
        assert_eq!(state.cursor.day, 3);
    }

    #[test]
    fn test_edit_kind_follows_slot_content() {
        let mut state = AppState::default();
        assert_eq!(edit_kind_for_selection(&state), SlotKind::Sandwich);

        let mut grid = MenuGrid::empty(6);
        grid.set_slot(0, Zone::Upper, MealEntry::free_text("Soup"));
        state.menu = Some(grid);
        assert_eq!(edit_kind_for_selection(&state), SlotKind::Text);
    }
}
