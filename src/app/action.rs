use crate::app::command::Command;
use crate::app::interpreter::{CommandOutcome, SlotKind};
use crate::domain::models::{MenuGrid, Zone};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Navigation (Week Grid) ---
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    SelectSlot(usize, Zone), // Mouse click on a cell

    // --- Menu Intents ---
    // Quick actions are turned into command strings for the interpreter
    ClearSelectedSlot,         // `<day>-<zone>-clear`
    EditSelectedSlot(SlotKind), // Open the bar with `<day>-<zone>-<s|t> `
    GenerateMail,              // Build the weekly mail
    SaveMail,                  // Write the previewed mail to disk

    // --- Command Bar ---
    EnterCommandBar(Option<String>), // Open the bar, optionally pre-filled
    TextAreaInput(crossterm::event::KeyEvent),
    SuggestionNext,
    SuggestionPrev,
    AcceptSuggestion, // Tab
    HistoryPrev,      // Ctrl-P
    HistoryNext,      // Ctrl-N
    SubmitCommand,    // Enter

    // --- UI Mode Transitions ---
    CancelMode,          // ESC key (close modal/mode)
    ToggleHelp,          // Toggle the help overlay (?)
    EnterThemeSelection, // Open theme selection modal (T)
    SelectThemeNext,
    SelectThemePrev,
    ConfirmThemeSelection,
    ScrollMailUp(u16),
    ScrollMailDown(u16),

    // --- Async Results (The "Callback") ---
    CommandExecuted(String, CommandOutcome), // Raw command and what the interpreter said
    MenuPublished(Option<Box<MenuGrid>>),    // Store published a new grid
    MailGenerated(String),
    MailSaved(Result<PathBuf, String>),
    ExternalChangeDetected, // Persisted menu changed on disk
    ErrorOccurred(String),
}
