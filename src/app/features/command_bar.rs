use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, CommandBarState, ErrorSeverity, ErrorState},
    suggestion::SuggestionEngine,
};
use std::time::{Duration, Instant};

/// How long a success message stays in the footer.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EnterCommandBar(prefill) => {
            open(state, prefill.as_deref());
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if let Some(bar) = &mut state.command_bar {
                bar.text_area.input(*key);
                bar.history_index = None;
                let text = bar.text();
                let suggestions = suggest(state, &text);
                if let Some(bar) = &mut state.command_bar {
                    bar.suggestions = suggestions;
                    bar.selected = None;
                }
            }
            UpdateResult::Handled(None)
        }
        Action::SuggestionNext => {
            if let Some(bar) = &mut state.command_bar {
                bar.select_next();
            }
            UpdateResult::Handled(None)
        }
        Action::SuggestionPrev => {
            if let Some(bar) = &mut state.command_bar {
                bar.select_prev();
            }
            UpdateResult::Handled(None)
        }
        Action::AcceptSuggestion => {
            if let Some(text) = state.command_bar.as_ref().and_then(CommandBarState::accepted_text) {
                replace_text(state, &text);
            }
            UpdateResult::Handled(None)
        }
        Action::HistoryPrev => {
            let next_index = state
                .command_bar
                .as_ref()
                .map_or(0, |bar| bar.history_index.map_or(0, |i| i + 1));
            if let Some(command) = state.recent_commands.get(next_index).cloned() {
                replace_text(state, &command);
                if let Some(bar) = &mut state.command_bar {
                    bar.history_index = Some(next_index);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::HistoryNext => {
            let current = state.command_bar.as_ref().and_then(|bar| bar.history_index);
            match current {
                Some(0) => {
                    replace_text(state, "");
                }
                Some(i) => {
                    if let Some(command) = state.recent_commands.get(i - 1).cloned() {
                        replace_text(state, &command);
                        if let Some(bar) = &mut state.command_bar {
                            bar.history_index = Some(i - 1);
                        }
                    }
                }
                None => {}
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitCommand => {
            let Some(bar) = state.command_bar.take() else {
                return UpdateResult::Handled(None);
            };
            state.mode = AppMode::Normal;

            let text = bar.text().trim().to_string();
            if text.is_empty() {
                return UpdateResult::Handled(None);
            }
            UpdateResult::Handled(Some(Command::Execute(text)))
        }
        Action::CommandExecuted(command, outcome) => {
            if outcome.success {
                state.last_error = None;
                state.status_message = Some(outcome.message.clone());
                state.status_clear_time = Some(Instant::now() + STATUS_TIMEOUT);
                remember(state, command);
            } else {
                state.last_error = Some(match &outcome.rejection {
                    Some(error) => ErrorState::rejected(error, &state.days),
                    None => ErrorState::new(
                        outcome.message.clone(),
                        ErrorSeverity::Warning,
                        Vec::new(),
                    ),
                });
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Opens the command bar with `prefill` and fresh suggestions for it.
pub fn open(state: &mut AppState, prefill: Option<&str>) {
    let text = prefill.unwrap_or_default();
    let mut bar = CommandBarState::default();
    bar.set_text(text, suggest(state, text));
    state.command_bar = Some(bar);
    state.mode = AppMode::CommandBar;
}

/// Records a successful command, most recent first, without duplicates.
pub fn remember(state: &mut AppState, command: &str) {
    let command = command.trim().to_string();
    if command.is_empty() {
        return;
    }
    if let Some(pos) = state.recent_commands.iter().position(|c| *c == command) {
        state.recent_commands.remove(pos);
    }
    state.recent_commands.insert(0, command);
    state
        .recent_commands
        .truncate(crate::app::state::MAX_RECENT_COMMANDS);

    if let Some(path) = &state.history_path {
        crate::app::persistence::save_recent_commands(path, &state.recent_commands);
    }
}

fn replace_text(state: &mut AppState, text: &str) {
    let suggestions = suggest(state, text);
    if let Some(bar) = &mut state.command_bar {
        bar.set_text(text, suggestions);
    }
}

fn suggest(state: &AppState, text: &str) -> Vec<String> {
    SuggestionEngine::new(&state.days, &state.catalog).suggest(text)
}
