use crate::app::{
    action::Action,
    features::navigation::edit_kind_for_selection,
    state::{AppMode, AppState},
    ui,
};
use crate::components::menu_grid;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == KeyEventKind::Release {
            return None;
        }
    }
    if let Event::Resize(w, h) = event {
        return Some(Action::Resize(w, h));
    }

    match app_state.mode {
        AppMode::CommandBar => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CancelMode),
                KeyCode::Enter => Some(Action::SubmitCommand),
                KeyCode::Tab => Some(Action::AcceptSuggestion),
                KeyCode::Down => Some(Action::SuggestionNext),
                KeyCode::Up | KeyCode::BackTab => Some(Action::SuggestionPrev),
                KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::HistoryPrev)
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::HistoryNext)
                }
                _ => Some(Action::TextAreaInput(key)),
            },
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::MailPreview => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::ScrollMailDown(1)),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::ScrollMailUp(1)),
                KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollMailDown(10)),
                KeyCode::PageUp => Some(Action::ScrollMailUp(10)),
                KeyCode::Char('w') => Some(Action::SaveMail),
                _ => None,
            },
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(Action::ScrollMailDown(1)),
                MouseEventKind::ScrollUp => Some(Action::ScrollMailUp(1)),
                _ => None,
            },
            _ => None,
        },
        AppMode::ThemeSelection => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelMode),
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
                KeyCode::Enter => Some(Action::ConfirmThemeSelection),
                _ => None,
            },
            _ => None,
        },
        AppMode::Normal => match event {
            Event::Key(key) => {
                if key.code == KeyCode::Esc && app_state.last_error.is_some() {
                    return Some(Action::CancelMode);
                }
                match app_state.keymap.get_action(key)? {
                    // Enter reopens a slot with the kind it already holds
                    Action::EditSelectedSlot(_) if key.code == KeyCode::Enter => Some(
                        Action::EditSelectedSlot(edit_kind_for_selection(app_state)),
                    ),
                    action => Some(action),
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::MoveLeft),
                MouseEventKind::ScrollDown => Some(Action::MoveRight),
                MouseEventKind::Down(MouseButton::Left) => {
                    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    let layout = ui::get_layout(area);
                    menu_grid::cell_at(
                        layout.grid,
                        app_state.day_count(),
                        mouse.column,
                        mouse.row,
                    )
                    .map(|(day, zone)| Action::SelectSlot(day, zone))
                }
                _ => None,
            },
            _ => None,
        },
    }
}
