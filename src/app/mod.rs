pub mod action;
pub mod command;
pub mod config;
pub mod context;
pub mod features;
pub mod input;
pub mod interpreter;
pub mod keymap;
pub mod logging;
pub mod r#loop;
pub mod mail;
pub mod persistence;
pub mod recovery;
pub mod reducer;
pub mod state;
pub mod store;
pub mod suggestion;
pub mod ui;
