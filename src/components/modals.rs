mod command_bar;
mod error;
mod help;
pub mod helpers;
mod mail_preview;
mod manager;
mod theme_selection;

pub use command_bar::CommandBarModal;
pub use error::ErrorModal;
pub use help::HelpModal;
pub use mail_preview::MailPreviewModal;
pub use manager::ModalManager;
pub use theme_selection::ThemeSelectionModal;
