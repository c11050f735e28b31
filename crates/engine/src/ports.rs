//! Snapshot store port - Interface for game persistence
//!
//! This port abstracts the storage medium from the core: a session only
//! needs somewhere to put the latest snapshot and get it back. Adapters
//! (in-memory, JSON file) implement the trait; tests mock it.

use anyhow::Result;
use wolfmoot_domain::Snapshot;

/// Port for saving and loading game snapshots
///
/// Synchronous like the rest of the core: one GM, one operation at a
/// time. `load` returns `None` when nothing has been saved yet, which is
/// a normal first-run condition, not an error.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait SnapshotStorePort {
    /// Persist a snapshot, replacing any previously stored one.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Load the most recently saved snapshot, if any.
    fn load(&self) -> Result<Option<Snapshot>>;
}
