use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppMode, AppState, ErrorState, MailPreviewState, ThemeSelectionState},
};
use crate::theme::Theme;

use super::command_bar::STATUS_TIMEOUT;
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.command_bar = None;
            state.last_error = None;
            state.mail_preview = None;
            state.theme_selection = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(ThemeSelectionState::starting_at(state.palette_type));
            UpdateResult::Handled(None)
        }
        Action::SelectThemeNext => {
            if let Some(ts) = &mut state.theme_selection {
                ts.next();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectThemePrev => {
            if let Some(ts) = &mut state.theme_selection {
                ts.prev();
            }
            UpdateResult::Handled(None)
        }
        Action::ConfirmThemeSelection => {
            if let Some(palette) = state.theme_selection.take().and_then(|ts| ts.selected()) {
                state.palette_type = palette;
                state.theme = Theme::from_palette_type(palette);
            }
            state.mode = AppMode::Normal;
            UpdateResult::Handled(None)
        }
        Action::MailGenerated(content) => {
            state.active_tasks.retain(|t| t != "Generating mail");
            state.mail_preview = Some(MailPreviewState::new(content.clone()));
            state.mode = AppMode::MailPreview;
            UpdateResult::Handled(None)
        }
        Action::ScrollMailUp(n) => {
            if let Some(preview) = &mut state.mail_preview {
                preview.scroll_up(*n);
            }
            UpdateResult::Handled(None)
        }
        Action::ScrollMailDown(n) => {
            if let Some(preview) = &mut state.mail_preview {
                preview.scroll_down(*n);
            }
            UpdateResult::Handled(None)
        }
        Action::SaveMail => {
            let command = state
                .mail_preview
                .as_ref()
                .filter(|_| state.mode == AppMode::MailPreview)
                .map(|preview| Command::SaveMail(preview.content.clone()));
            if command.is_some() {
                state.active_tasks.push("Saving mail".to_string());
            }
            UpdateResult::Handled(command)
        }
        Action::MailSaved(result) => {
            state.active_tasks.retain(|t| t != "Saving mail");
            match result {
                Ok(path) => {
                    state.status_message = Some(format!("Mail saved to {}", path.display()));
                    state.status_clear_time = Some(Instant::now() + STATUS_TIMEOUT);
                }
                Err(e) => {
                    state.last_error = Some(ErrorState::failure(format!("Failed to save mail: {e}")));
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
