use ratatui::style::Color;

/// Colors by role. `Theme::from_palette` turns them into widget styles.
pub struct Palette {
    pub background: Color,
    pub shadow: Color,
    pub foreground: Color,
    pub muted: Color,
    pub soft: Color,
    pub panel: Color,
    pub rule: Color,
    pub faint: Color,
    pub hint: Color,
    pub accent: Color,
    // Catalog meals in the grid
    pub catalog: Color,
    pub caution: Color,
    // Free-text entries in the grid
    pub free_text: Color,
    pub danger: Color,
    pub mail: Color,
}

/// Darkens an `Rgb` color toward black; `factor` 1.0 keeps it. Named and
/// indexed colors pass through.
#[must_use]
pub fn dim_color(c: Color, factor: f32) -> Color {
    let Color::Rgb(r, g, b) = c else {
        return c;
    };
    let scale = |channel: u8| (f32::from(channel) * factor.clamp(0.0, 1.0)) as u8;
    Color::Rgb(scale(r), scale(g), scale(b))
}
