use crate::app::state::{AppMode, AppState};
use crate::components::{
    footer::Footer, header::Header, menu_grid::MenuGridView, modals::ModalManager,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub grid: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Week grid
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        grid: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let theme = &app_state.theme;
    let layout = get_layout(area);

    if layout.header.height > 0 {
        f.render_widget(
            Header {
                state: &app_state.header_state,
                theme,
                terminal_width: area.width,
            },
            layout.header,
        );
    }

    if layout.grid.height > 0 {
        f.render_widget(
            MenuGridView {
                grid: app_state.menu.as_ref(),
                days: &app_state.days,
                cursor: app_state.cursor,
                theme,
                focused: app_state.mode == AppMode::Normal,
            },
            layout.grid,
        );
    }

    if layout.footer.height > 0 {
        f.render_widget(
            Footer {
                state: app_state,
                theme,
            },
            layout.footer,
        );
    }

    f.render_widget(ModalManager { theme, app_state }, area);
}
