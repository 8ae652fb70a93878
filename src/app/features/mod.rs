pub mod command_bar;
pub mod navigation;
pub mod ui;
