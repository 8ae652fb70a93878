use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::{AppState, ErrorState, HeaderState},
};
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let features: [fn(&mut AppState, &Action) -> UpdateResult; 3] = [
        features::navigation::update,
        features::command_bar::update,
        features::ui::update,
    ];
    for feature in features {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }

    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
        }
        Action::MenuPublished(grid) => match grid {
            Some(grid) => {
                state.header_state = HeaderState::from_grid(&grid);
                state.cursor.clamp(grid.day_count());
                state.menu = Some(*grid);
            }
            None => {
                state.header_state = HeaderState::default();
                state.menu = None;
            }
        },
        Action::ExternalChangeDetected => {
            return Some(Command::ReloadMenu);
        }
        Action::ErrorOccurred(message) => {
            state.active_tasks.clear();
            state.last_error = Some(ErrorState::failure(message));
        }
        _ => {}
    }
    None
}
