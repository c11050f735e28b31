//! JSON file snapshot store
//!
//! Persists the latest snapshot as pretty-printed JSON at a fixed path.
//! A missing file loads as `None`; the parent directory is created on the
//! first save.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wolfmoot_domain::Snapshot;

use crate::ports::SnapshotStorePort;

/// Snapshot store writing one JSON document to disk
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the snapshot is stored at.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

// =============================================================================
// Port Implementation
// =============================================================================

impl SnapshotStorePort for JsonFileSnapshotStore {
    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(snapshot).context("failed to encode snapshot")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let snapshot = serde_json::from_str(&json)
            .with_context(|| format!("failed to decode {}", self.path.display()))?;
        Ok(Some(snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use wolfmoot_domain::{EventBus, Game, PlayerName, Regulation, Role};

    fn sample_snapshot() -> Snapshot {
        let regulation = Regulation::new()
            .with_role(Role::Werewolf, 1)
            .with_role(Role::Villager, 2);
        let mut game = Game::new(regulation, Rc::new(EventBus::new()));
        for name in ["Ada", "Brie", "Cleo"] {
            game.add_player(PlayerName::new(name).unwrap()).unwrap();
        }
        game.start_game().unwrap();
        game.snapshot()
    }

    #[test]
    fn missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path().join("snapshot.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path().join("snapshot.json"));
        let snapshot = sample_snapshot();

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSnapshotStore::new(dir.path().join("data/saves/snapshot.json"));

        store.save(&sample_snapshot()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn corrupt_file_is_an_error_not_a_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(&path, "not json").unwrap();

        let store = JsonFileSnapshotStore::new(path);
        assert!(store.load().is_err());
    }
}
