use crate::app::interpreter::CommandError;
use crate::app::recovery;
use crate::domain::days::DayConfig;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning, // Command refused by the interpreter, menu untouched
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub severity: ErrorSeverity,
    pub suggestions: Vec<String>,
}

impl ErrorState {
    pub fn new(message: impl Into<String>, severity: ErrorSeverity, suggestions: Vec<String>) -> Self {
        Self {
            message: message.into(),
            timestamp: Local::now(),
            severity,
            suggestions,
        }
    }

    /// A refused command, with hints for its rejection category.
    #[must_use]
    pub fn rejected(error: &CommandError, days: &DayConfig) -> Self {
        Self::new(
            error.to_string(),
            ErrorSeverity::Warning,
            recovery::get_suggestions(error, days),
        )
    }

    /// An I/O or startup failure; hints are guessed from the message.
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let suggestions = recovery::get_message_suggestions(&message);
        Self::new(message, ErrorSeverity::Error, suggestions)
    }
}
