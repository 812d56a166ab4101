pub mod memory_store;
pub mod snapshot;
