use crate::app::state::{AppMode, AppState};

/// One key hint. `active` hints are drawn emphasized.
pub struct KeyHint {
    pub keys: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub struct HintGroup {
    pub title: &'static str,
    pub hints: Vec<KeyHint>,
}

fn item(keys: &'static str, label: &'static str) -> KeyHint {
    lit(keys, label, false)
}

fn lit(keys: &'static str, label: &'static str, active: bool) -> KeyHint {
    KeyHint {
        keys,
        label,
        active,
    }
}

pub fn get_groups(state: &AppState) -> Vec<HintGroup> {
    if state.last_error.is_some() {
        return vec![HintGroup {
            title: "ERROR",
            hints: vec![item("Esc", "dismiss")],
        }];
    }

    match state.mode {
        AppMode::Normal => {
            let selected_is_set = state
                .menu
                .as_ref()
                .and_then(|m| m.slot(state.cursor.day, state.cursor.zone))
                .is_some_and(|e| !e.is_unset());

            vec![
                HintGroup {
                    title: "NAV",
                    hints: vec![item("h/l", "day"), item("j/k", "zone")],
                },
                HintGroup {
                    title: "SLOT",
                    hints: vec![
                        item("s", "sandwich"),
                        item("t", "text"),
                        lit("x", "clear", selected_is_set),
                        item(":", "command"),
                    ],
                },
                HintGroup {
                    title: "WEEK",
                    hints: vec![lit("m", "mail", state.menu.is_some())],
                },
                HintGroup {
                    title: "APP",
                    hints: vec![item("T", "theme"), item("?", "help"), item("q", "quit")],
                },
            ]
        }
        AppMode::CommandBar => {
            let has_suggestions = state
                .command_bar
                .as_ref()
                .is_some_and(|bar| !bar.suggestions.is_empty());
            vec![
                HintGroup {
                    title: "INPUT",
                    hints: vec![item("ENTER", "run"), item("Esc", "cancel")],
                },
                HintGroup {
                    title: "COMPLETE",
                    hints: vec![
                        lit("Tab", "accept", has_suggestions),
                        item("↑/↓", "pick"),
                        item("^P/^N", "history"),
                    ],
                },
            ]
        }
        AppMode::MailPreview => vec![HintGroup {
            title: "MAIL",
            hints: vec![item("j/k", "scroll"), item("w", "save"), item("Esc", "close")],
        }],
        AppMode::ThemeSelection => vec![HintGroup {
            title: "THEME",
            hints: vec![item("j/k", "move"), item("ENTER", "apply"), item("Esc", "cancel")],
        }],
        AppMode::Help => vec![HintGroup {
            title: "HELP",
            hints: vec![item("Esc/?", "close")],
        }],
    }
}
