pub mod assets;
pub mod defaults;
pub mod file_storage;
pub mod memory_storage;
