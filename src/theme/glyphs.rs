//! Symbols shared by the header, grid and footer.

pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const MENU: &str = "\u{f0f5}";
pub const CURSOR: &str = "▶";
pub const IMAGE: &str = "◇";
pub const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];
