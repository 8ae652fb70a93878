pub mod footer;
pub mod header;
pub mod menu_grid;
pub mod modals;
