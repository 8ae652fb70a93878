use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::command_bar::CommandBarModal;
use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::mail_preview::MailPreviewModal;
use super::theme_selection::ThemeSelectionModal;

pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'a>,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // --- Visual Dimming ---
        let is_modal_active =
            self.app_state.mode != AppMode::Normal || self.app_state.last_error.is_some();
        if is_modal_active {
            dim_area(buf, area);
        }

        match self.app_state.mode {
            AppMode::Normal => {}
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::CommandBar => {
                if let Some(bar) = &self.app_state.command_bar {
                    CommandBarModal {
                        theme: self.theme,
                        state: bar,
                    }
                    .render(area, buf);
                }
            }
            AppMode::MailPreview => {
                if let Some(preview) = &self.app_state.mail_preview {
                    MailPreviewModal {
                        theme: self.theme,
                        state: preview,
                    }
                    .render(area, buf);
                }
            }
            AppMode::ThemeSelection => {
                if let Some(ts) = &self.app_state.theme_selection {
                    ThemeSelectionModal {
                        theme: self.theme,
                        state: ts,
                        current: self.app_state.palette_type,
                    }
                    .render(area, buf);
                }
            }
        }

        // --- Error Modal (drawn over everything) ---
        if let Some(err) = &self.app_state.last_error {
            ErrorModal {
                theme: self.theme,
                error: err,
            }
            .render(area, buf);
        }
    }
}
