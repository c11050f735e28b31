//! Wolfmoot Engine - the collaborators around the game core
//!
//! Everything the core treats as external lives here: the snapshot
//! persistence port and its adapters, environment-driven configuration,
//! tracing setup, the event journal, and the `GameSession` that wires one
//! GM's game together.

pub mod config;
pub mod journal;
pub mod ports;
pub mod session;
pub mod storage;
pub mod telemetry;

pub use config::AppConfig;
pub use journal::{attach_log_listener, GameJournal};
pub use ports::SnapshotStorePort;
pub use session::GameSession;
pub use storage::{InMemorySnapshotStore, JsonFileSnapshotStore, RegulationLibrary};
pub use telemetry::init_tracing;
