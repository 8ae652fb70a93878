use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    background: Color::Rgb(46, 52, 64),
    shadow: Color::Rgb(43, 48, 59),
    foreground: Color::Rgb(236, 239, 244),
    muted: Color::Rgb(216, 222, 233),
    soft: Color::Rgb(229, 233, 240),
    panel: Color::Rgb(76, 86, 106),
    rule: Color::Rgb(67, 76, 94),
    faint: Color::Rgb(129, 161, 193),
    hint: Color::Rgb(136, 192, 208),
    accent: Color::Rgb(129, 161, 193),
    catalog: Color::Rgb(163, 190, 140),
    caution: Color::Rgb(235, 203, 139),
    free_text: Color::Rgb(208, 135, 112),
    danger: Color::Rgb(191, 97, 106),
    mail: Color::Rgb(180, 142, 173),
};
