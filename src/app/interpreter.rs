//! Text command language for editing the menu.
//!
//! ```text
//! generate | gen
//! <day>-<u|l>-<clear|empty|reset>
//! <day>-<u|l>-<s|t> <value>
//! ```
//!
//! Commands are case-insensitive. `<day>` is an alias or a day label made of
//! ASCII letters. Every command yields a [`CommandOutcome`]; the menu is only
//! touched, saved and published when the outcome is a success.

use super::store::MenuStore;
use crate::domain::{
    catalog::{CatalogMatch, MealCatalog},
    days::DayConfig,
    models::{MealEntry, Zone},
};
use thiserror::Error;
use tracing::info;

pub const CLEAR_SYNONYMS: [&str; 3] = ["clear", "empty", "reset"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Sandwich,
    Text,
}

impl SlotKind {
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            SlotKind::Sandwich => "s",
            SlotKind::Text => "t",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Generate,
    Clear {
        day: String,
        zone: Zone,
    },
    Set {
        day: String,
        zone: Zone,
        kind: SlotKind,
        value: String,
    },
    Invalid,
}

/// Why a command was refused. The `Display` text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Menu data is not initialized.")]
    Uninitialized,
    #[error("Generation feature is not available.")]
    GenerationUnavailable,
    #[error("Unknown day \"{0}\".")]
    UnknownDay(String),
    #[error("Configure the upper zone for {0} before using the lower zone.")]
    UpperZoneFirst(String),
    #[error("Multiple sandwiches match \"{0}\". Please be more specific.")]
    AmbiguousMeal(String),
    #[error("Sandwich \"{0}\" was not found in the meal list.")]
    MealNotFound(String),
    #[error("Invalid command. Use day-zone-type value or day-zone-clear.")]
    InvalidSyntax,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    pub message: String,
    pub rejection: Option<CommandError>,
}

impl CommandOutcome {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            rejection: None,
        }
    }

    #[must_use]
    pub fn rejected(error: CommandError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            rejection: Some(error),
        }
    }
}

impl From<Result<String, CommandError>> for CommandOutcome {
    fn from(result: Result<String, CommandError>) -> Self {
        match result {
            Ok(message) => Self::accepted(message),
            Err(error) => Self::rejected(error),
        }
    }
}

/// Splits a raw command into one of the known shapes. Day tokens are not
/// resolved here so that unknown days can be reported by name.
#[must_use]
pub fn parse(input: &str) -> ParsedCommand {
    let trimmed = input.trim();
    let lowered = trimmed.to_lowercase();
    if lowered == "generate" || lowered == "gen" {
        return ParsedCommand::Generate;
    }

    let (head, value) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, Some(rest.trim())),
        None => (trimmed, None),
    };
    // Slot values are single-line
    if value.is_some_and(|v| v.contains(['\n', '\r'])) {
        return ParsedCommand::Invalid;
    }

    let mut parts = head.split('-');
    let (Some(day), Some(zone), Some(kind), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return ParsedCommand::Invalid;
    };

    if day.is_empty() || !day.chars().all(|c| c.is_ascii_alphabetic()) {
        return ParsedCommand::Invalid;
    }
    let Some(zone) = Zone::from_token(zone) else {
        return ParsedCommand::Invalid;
    };
    let day = day.to_string();
    let kind = kind.to_ascii_lowercase();

    match (kind.as_str(), value) {
        (k, None) if CLEAR_SYNONYMS.contains(&k) => ParsedCommand::Clear { day, zone },
        ("s", Some(value)) if !value.is_empty() => ParsedCommand::Set {
            day,
            zone,
            kind: SlotKind::Sandwich,
            value: value.to_string(),
        },
        ("t", Some(value)) if !value.is_empty() => ParsedCommand::Set {
            day,
            zone,
            kind: SlotKind::Text,
            value: value.to_string(),
        },
        _ => ParsedCommand::Invalid,
    }
}

pub struct CommandInterpreter<'a> {
    catalog: &'a MealCatalog,
    days: &'a DayConfig,
}

impl<'a> CommandInterpreter<'a> {
    #[must_use]
    pub fn new(catalog: &'a MealCatalog, days: &'a DayConfig) -> Self {
        Self { catalog, days }
    }

    pub fn execute(&self, store: &mut MenuStore, command: &str) -> CommandOutcome {
        let outcome = CommandOutcome::from(self.apply(store, command));
        info!(
            command = command.trim(),
            success = outcome.success,
            message = %outcome.message,
            "Command executed"
        );
        outcome
    }

    fn apply(&self, store: &mut MenuStore, command: &str) -> Result<String, CommandError> {
        let Some(grid) = store.grid() else {
            return Err(CommandError::Uninitialized);
        };

        match parse(command) {
            ParsedCommand::Generate => Err(CommandError::GenerationUnavailable),
            ParsedCommand::Invalid => Err(CommandError::InvalidSyntax),
            ParsedCommand::Clear { day, zone } => {
                let (day_index, label) = self.resolve_day(&day)?;

                store.set_slot(day_index, zone, MealEntry::empty());
                // Upper dominates lower: clearing it empties the whole day
                if zone == Zone::Upper {
                    store.set_slot(day_index, Zone::Lower, MealEntry::empty());
                }
                store.save();
                store.notify();

                Ok(format!("Cleared the {zone} zone for {label}."))
            }
            ParsedCommand::Set {
                day,
                zone,
                kind,
                value,
            } => {
                let (day_index, label) = self.resolve_day(&day)?;

                if zone == Zone::Lower && !grid.day(day_index).is_some_and(|d| d.accepts_lower()) {
                    return Err(CommandError::UpperZoneFirst(label));
                }

                let (entry, message) = match kind {
                    SlotKind::Sandwich => match self.catalog.lookup(&value) {
                        CatalogMatch::Unique(meal) => (
                            MealEntry::Catalog(meal.clone()),
                            format!("Set {label} {zone} zone to sandwich \"{}\".", meal.name),
                        ),
                        CatalogMatch::Ambiguous(_) => {
                            return Err(CommandError::AmbiguousMeal(value));
                        }
                        CatalogMatch::NotFound => return Err(CommandError::MealNotFound(value)),
                    },
                    SlotKind::Text => (
                        MealEntry::free_text(value),
                        format!("Updated {label} {zone} zone text."),
                    ),
                };

                store.set_slot(day_index, zone, entry);
                store.save();
                store.notify();

                Ok(message)
            }
        }
    }

    fn resolve_day(&self, token: &str) -> Result<(usize, String), CommandError> {
        self.days
            .resolve(token)
            .and_then(|index| self.days.label(index).map(|label| (index, label.to_string())))
            .ok_or_else(|| CommandError::UnknownDay(token.to_string()))
    }
}
