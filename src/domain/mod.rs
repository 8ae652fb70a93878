pub mod catalog;
pub mod days;
pub mod ingredients;
pub mod models;
pub mod storage;
