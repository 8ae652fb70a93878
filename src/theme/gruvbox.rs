use super::palette::Palette;
use ratatui::style::Color;

pub const GRUVBOX: Palette = Palette {
    background: Color::Rgb(40, 40, 40),
    shadow: Color::Rgb(29, 32, 33),
    foreground: Color::Rgb(235, 219, 178),
    muted: Color::Rgb(189, 174, 147),
    soft: Color::Rgb(213, 196, 161),
    panel: Color::Rgb(60, 56, 54),
    rule: Color::Rgb(102, 92, 84),
    faint: Color::Rgb(124, 111, 100),
    hint: Color::Rgb(146, 131, 116),
    accent: Color::Rgb(131, 165, 152),
    catalog: Color::Rgb(184, 187, 38),
    caution: Color::Rgb(250, 189, 47),
    free_text: Color::Rgb(254, 128, 25),
    danger: Color::Rgb(251, 73, 52),
    mail: Color::Rgb(211, 134, 155),
};
