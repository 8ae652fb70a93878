use super::config::AppConfig;
use super::keymap::{KeyConfig, KeyMap};
use crate::domain::{catalog::MealCatalog, days::DayConfig, models::MenuGrid};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

pub mod command_bar;
pub mod error;
pub mod grid;
pub mod header;
pub mod input;
pub mod mail;
pub mod theme;

// Re-exports
pub use command_bar::CommandBarState;
pub use error::{ErrorSeverity, ErrorState};
pub use grid::GridCursor;
pub use header::HeaderState;
pub use input::AppTextArea;
pub use mail::MailPreviewState;
pub use theme::ThemeSelectionState;

pub const MAX_RECENT_COMMANDS: usize = 20;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Navigating the week grid
    CommandBar,     // Typing a command
    Help,           // Showing the help overlay
    MailPreview,    // Reading the generated mail
    ThemeSelection, // Choosing a UI theme
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "Cleared the upper zone for Lundi."
    pub status_clear_time: Option<Instant>,
    pub active_tasks: Vec<String>,

    // --- Read-only tables (shared with the interpreter) ---
    pub days: Arc<DayConfig>,
    pub catalog: Arc<MealCatalog>,

    // --- Menu (last value published by the store) ---
    pub menu: Option<MenuGrid>,
    pub header_state: HeaderState,
    pub cursor: GridCursor,

    // --- Input Handling ---
    pub command_bar: Option<CommandBarState<'a>>,
    pub recent_commands: Vec<String>,
    pub history_path: Option<PathBuf>,

    // --- Modals ---
    pub mail_preview: Option<MailPreviewState>,
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    /// State for the interactive app: config-driven keys and palette, and
    /// command history backed by the user's config directory.
    #[must_use]
    pub fn new(config: &AppConfig, days: Arc<DayConfig>, catalog: Arc<MealCatalog>) -> Self {
        let history_path = super::persistence::history_path();
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.palette,
            theme: crate::theme::Theme::from_palette_type(config.palette),
            recent_commands: history_path
                .as_deref()
                .map(super::persistence::load_recent_commands)
                .unwrap_or_default(),
            history_path,
            days,
            catalog,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn day_count(&self) -> usize {
        self.menu
            .as_ref()
            .map_or_else(|| self.days.day_count(), MenuGrid::day_count)
    }

    /// Shortest command prefix addressing the selected slot, e.g. `mon-u`.
    #[must_use]
    pub fn selected_slot_prefix(&self) -> Option<String> {
        let token = self.days.token_for(self.cursor.day)?;
        Some(format!("{token}-{}", self.cursor.zone.token()))
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            active_tasks: Vec::new(),
            days: Arc::new(DayConfig::default()),
            catalog: Arc::new(MealCatalog::default()),
            menu: None,
            header_state: HeaderState::default(),
            cursor: GridCursor::default(),
            command_bar: None,
            recent_commands: Vec::new(),
            history_path: None,
            mail_preview: None,
            theme_selection: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
