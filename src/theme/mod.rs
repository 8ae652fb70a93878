use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub day_label: Style,
    pub day_label_selected: Style,
    pub slot_catalog: Style,
    pub slot_free_text: Style,
    pub slot_empty: Style,
    pub slot_image: Style,
    pub slot_selected: Style,

    pub mail_heading: Style,
    pub mail_text: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_week: Style,
    pub header_stats: Style,
    pub header_active: Style,
    pub header_warn: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn palette(self) -> &'static Palette {
        match self {
            PaletteType::CatppuccinMocha => &catppuccin::CATPPUCCIN_MOCHA,
            PaletteType::Nord => &nord::NORD,
            PaletteType::Gruvbox => &gruvbox::GRUVBOX,
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        Self::from_palette(t.palette())
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.rule),
            border_focus: Style::default().fg(p.accent),

            day_label: Style::default().fg(p.soft).add_modifier(Modifier::BOLD),
            day_label_selected: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            slot_catalog: Style::default().fg(p.catalog).add_modifier(Modifier::BOLD),
            slot_free_text: Style::default().fg(p.free_text).add_modifier(Modifier::ITALIC),
            slot_empty: Style::default().fg(p.faint).add_modifier(Modifier::DIM),
            slot_image: Style::default().fg(p.rule).add_modifier(Modifier::DIM),
            slot_selected: Style::default().bg(dim_color(p.accent, 0.3)),

            mail_heading: Style::default().fg(p.mail).add_modifier(Modifier::BOLD),
            mail_text: Style::default().fg(p.foreground),

            status_ready: Style::default()
                .bg(p.catalog)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.caution)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.danger)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_week: Style::default()
                .bg(p.mail)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_stats: Style::default().bg(p.panel).fg(p.soft),
            header_active: Style::default()
                .bg(p.catalog)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_warn: Style::default()
                .bg(p.caution)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.panel).fg(p.foreground),
            header: Style::default().bg(p.background).fg(p.foreground),

            footer_segment_key: Style::default()
                .bg(p.panel)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.background).fg(p.foreground),
            footer_group_name: Style::default().fg(p.muted).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.shadow).fg(p.muted),

            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.shadow)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.foreground),
            dimmed: Style::default().fg(p.hint).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
