use super::palette::Palette;
use ratatui::style::Color;

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),
    shadow: Color::Rgb(17, 17, 27),
    foreground: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(166, 173, 200),
    soft: Color::Rgb(186, 194, 222),
    panel: Color::Rgb(49, 50, 68),
    rule: Color::Rgb(88, 91, 112),
    faint: Color::Rgb(108, 112, 134),
    hint: Color::Rgb(127, 132, 156),
    accent: Color::Rgb(137, 180, 250),
    catalog: Color::Rgb(166, 227, 161),
    caution: Color::Rgb(249, 226, 175),
    free_text: Color::Rgb(250, 179, 135),
    danger: Color::Rgb(243, 139, 168),
    mail: Color::Rgb(203, 166, 247),
};
