use super::action::Action;
use super::interpreter::SlotKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "vim".to_string(),
            custom: None,
        }
    }
}

/// Normal-mode bindings. Other modes are handled directly in `input.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub normal: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut normal = HashMap::new();

        // --- Shared ---
        normal.insert(key(KeyCode::Char('q')), Action::Quit);
        normal.insert(key(KeyCode::Left), Action::MoveLeft);
        normal.insert(key(KeyCode::Right), Action::MoveRight);
        normal.insert(key(KeyCode::Up), Action::MoveUp);
        normal.insert(key(KeyCode::Down), Action::MoveDown);
        normal.insert(key(KeyCode::Char(':')), Action::EnterCommandBar(None));
        normal.insert(key(KeyCode::Char('i')), Action::EnterCommandBar(None));
        normal.insert(key(KeyCode::Char('x')), Action::ClearSelectedSlot);
        normal.insert(key(KeyCode::Delete), Action::ClearSelectedSlot);
        normal.insert(key(KeyCode::Char('s')), Action::EditSelectedSlot(SlotKind::Sandwich));
        normal.insert(key(KeyCode::Char('t')), Action::EditSelectedSlot(SlotKind::Text));
        normal.insert(key(KeyCode::Enter), Action::EditSelectedSlot(SlotKind::Sandwich));
        normal.insert(key(KeyCode::Char('m')), Action::GenerateMail);
        normal.insert(key(KeyCode::Char('T')), Action::EnterThemeSelection);
        normal.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
        normal.insert(key(KeyCode::Esc), Action::CancelMode);

        // --- Profile ---
        if config.profile == "vim" {
            normal.insert(key(KeyCode::Char('h')), Action::MoveLeft);
            normal.insert(key(KeyCode::Char('l')), Action::MoveRight);
            normal.insert(key(KeyCode::Char('k')), Action::MoveUp);
            normal.insert(key(KeyCode::Char('j')), Action::MoveDown);
        }

        // --- User Overrides ---
        if let Some(custom) = &config.custom {
            for (key_spec, action_name) in custom {
                match (parse_key(key_spec), parse_action(action_name)) {
                    (Some(event), Some(action)) => {
                        normal.insert(event, action);
                    }
                    _ => warn!(key = %key_spec, action = %action_name, "Ignoring invalid key binding"),
                }
            }
        }

        Self { normal }
    }

    pub fn get_action(&self, mut event: KeyEvent) -> Option<Action> {
        // Terminals report '?' and ':' with SHIFT; the character already says it
        if matches!(event.code, KeyCode::Char(_)) {
            event.modifiers.remove(KeyModifiers::SHIFT);
        }
        self.normal
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

/// Parses `"g"`, `"ctrl-g"`, `"enter"`, `"f5"` style key names.
fn parse_key(spec: &str) -> Option<KeyEvent> {
    let (modifiers, raw) = if spec.to_lowercase().starts_with("ctrl-") {
        (KeyModifiers::CONTROL, spec.get(5..)?)
    } else {
        (KeyModifiers::empty(), spec)
    };

    let name = raw.to_lowercase();
    let code = match name.as_str() {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "delete" => KeyCode::Delete,
        "backspace" => KeyCode::Backspace,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => {
            // Single characters keep their case: "T" and "t" are different keys
            let mut chars = raw.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(c)
        }
    };
    Some(KeyEvent::new(code, modifiers))
}

fn parse_action(name: &str) -> Option<Action> {
    let action = match name {
        "quit" => Action::Quit,
        "move_left" => Action::MoveLeft,
        "move_right" => Action::MoveRight,
        "move_up" => Action::MoveUp,
        "move_down" => Action::MoveDown,
        "command" => Action::EnterCommandBar(None),
        "clear" => Action::ClearSelectedSlot,
        "set_sandwich" => Action::EditSelectedSlot(SlotKind::Sandwich),
        "set_text" => Action::EditSelectedSlot(SlotKind::Text),
        "mail" => Action::GenerateMail,
        "theme" => Action::EnterThemeSelection,
        "help" => Action::ToggleHelp,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_profile_binds_hjkl() {
        let map = KeyMap::from_config(&KeyConfig::default());
        assert_eq!(map.get_action(key(KeyCode::Char('h'))), Some(Action::MoveLeft));
        assert_eq!(map.get_action(key(KeyCode::Char('x'))), Some(Action::ClearSelectedSlot));
        assert_eq!(
            map.get_action(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some(Action::ToggleHelp)
        );
        assert_eq!(
            map.get_action(KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT)),
            Some(Action::EnterThemeSelection)
        );

        let arrows = KeyMap::from_config(&KeyConfig {
            profile: "arrows".to_string(),
            custom: None,
        });
        assert_eq!(arrows.get_action(key(KeyCode::Char('h'))), None);
        assert_eq!(arrows.get_action(key(KeyCode::Left)), Some(Action::MoveLeft));
    }

    #[test]
    fn test_custom_bindings_override() {
        let mut custom = HashMap::new();
        custom.insert("ctrl-g".to_string(), "mail".to_string());
        custom.insert("X".to_string(), "clear".to_string());
        custom.insert("F2".to_string(), "help".to_string());
        custom.insert("nonsense-key".to_string(), "quit".to_string());
        custom.insert("z".to_string(), "explode".to_string());

        let map = KeyMap::from_config(&KeyConfig {
            profile: "vim".to_string(),
            custom: Some(custom),
        });

        assert_eq!(
            map.get_action(KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL)),
            Some(Action::GenerateMail)
        );
        assert_eq!(map.get_action(key(KeyCode::Char('X'))), Some(Action::ClearSelectedSlot));
        assert_eq!(map.get_action(key(KeyCode::F(2))), Some(Action::ToggleHelp));
        assert_eq!(map.get_action(key(KeyCode::Char('z'))), None);
    }
}
