//! Persistence adapter implementations.

mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
