use super::interpreter::CommandError;
use crate::domain::days::DayConfig;

/// Day tokens listed in hints before the list is cut.
const MAX_LISTED_TOKENS: usize = 8;

#[must_use]
pub fn get_suggestions(error: &CommandError, days: &DayConfig) -> Vec<String> {
    match error {
        CommandError::Uninitialized => {
            vec!["Wait for the menu to load, or restart the app".to_string()]
        }
        CommandError::GenerationUnavailable => vec![
            "Fill the week with: <day>-u-s <sandwich name>".to_string(),
            "Press m to build the weekly mail instead".to_string(),
        ],
        CommandError::UnknownDay(_) => {
            let tokens: Vec<String> = days
                .ordered_tokens()
                .into_iter()
                .take(MAX_LISTED_TOKENS)
                .collect();
            vec![
                format!("Known days: {}", tokens.join(", ")),
                format!("Day labels also work: {}", days.labels.join(", ")),
            ]
        }
        CommandError::UpperZoneFirst(_) => vec![
            "Set the upper zone first, e.g. mon-u-s <sandwich name>".to_string(),
            "Free text counts too: mon-u-t <your text>".to_string(),
        ],
        CommandError::AmbiguousMeal(_) => vec![
            "Type more of the name, or press Tab to pick a suggestion".to_string(),
        ],
        CommandError::MealNotFound(_) => vec![
            "Check the spelling, suggestions list matching sandwiches".to_string(),
            "Use t instead of s to store it as free text".to_string(),
        ],
        CommandError::InvalidSyntax => vec![
            "Set a slot: <day>-<u|l>-<s|t> <value>".to_string(),
            "Clear a slot: <day>-<u|l>-clear".to_string(),
        ],
    }
}

/// Hints for failures that do not come from the command language.
#[must_use]
pub fn get_message_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("permission denied") || msg_lower.contains("read-only") {
        suggestions.push("Check that the data directory is writable".to_string());
    }

    if msg_lower.contains("no such file") || msg_lower.contains("not found") {
        suggestions.push("Check the paths in ~/.config/mealplan/config.toml".to_string());
    }

    suggestions
}
