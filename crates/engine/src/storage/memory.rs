//! In-memory snapshot store
//!
//! Keeps the latest snapshot in a cell, last write wins. This is the
//! default backend while no durable storage is configured, and the store
//! most tests run against.

use std::cell::RefCell;

use anyhow::Result;
use wolfmoot_domain::Snapshot;

use crate::ports::SnapshotStorePort;

/// Snapshot store holding at most one snapshot in process memory
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    latest: RefCell<Option<Snapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// Port Implementation
// =============================================================================

impl SnapshotStorePort for InMemorySnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        *self.latest.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        Ok(self.latest.borrow().clone())
    }
}
