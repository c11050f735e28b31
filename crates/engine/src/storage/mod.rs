//! Storage adapters behind the persistence ports

pub mod json_file;
pub mod memory;
pub mod regulation_library;

pub use json_file::JsonFileSnapshotStore;
pub use memory::InMemorySnapshotStore;
pub use regulation_library::RegulationLibrary;
