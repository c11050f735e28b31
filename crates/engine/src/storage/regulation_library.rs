//! Regulation preset library
//!
//! GMs reuse the same role quotas across tables, so named presets are
//! kept in a single JSON file under the data directory. Loading a library
//! that has never been saved yields an empty one.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use wolfmoot_domain::Regulation;

/// Named regulation presets stored in one JSON file
#[derive(Debug, Clone)]
pub struct RegulationLibrary {
    path: PathBuf,
}

impl RegulationLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the presets are stored at.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store a preset under a name, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Fails on an empty regulation (a preset with no roles cannot start
    /// a game) or on IO/encoding problems.
    pub fn save(&self, name: &str, regulation: &Regulation) -> Result<()> {
        if regulation.is_empty() {
            anyhow::bail!("regulation preset {name:?} has no roles");
        }

        let mut presets = self.load_all()?;
        presets.insert(name.to_string(), regulation.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json =
            serde_json::to_string_pretty(&presets).context("failed to encode regulation presets")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Load every stored preset, name -> regulation.
    ///
    /// A missing file is the empty library.
    pub fn load_all(&self) -> Result<BTreeMap<String, Regulation>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("failed to decode {}", self.path.display()))
    }

    /// Load one preset by name.
    pub fn load(&self, name: &str) -> Result<Option<Regulation>> {
        Ok(self.load_all()?.remove(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wolfmoot_domain::Role;

    fn five_player_regulation() -> Regulation {
        Regulation::new()
            .with_role(Role::Werewolf, 1)
            .with_role(Role::Seer, 1)
            .with_role(Role::Villager, 3)
    }

    #[test]
    fn unsaved_library_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let library = RegulationLibrary::new(dir.path().join("regulations.json"));
        assert!(library.load_all().unwrap().is_empty());
        assert_eq!(library.load("standard five").unwrap(), None);
    }

    #[test]
    fn presets_round_trip_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let library = RegulationLibrary::new(dir.path().join("regulations.json"));
        let regulation = five_player_regulation();

        library.save("standard five", &regulation).unwrap();
        library
            .save("wolf pack", &regulation.clone().with_role(Role::Werewolf, 2))
            .unwrap();

        let presets = library.load_all().unwrap();
        assert_eq!(presets.len(), 2);
        assert_eq!(library.load("standard five").unwrap(), Some(regulation));
    }

    #[test]
    fn saving_overwrites_a_preset_with_the_same_name() {
        let dir = tempfile::tempdir().unwrap();
        let library = RegulationLibrary::new(dir.path().join("regulations.json"));

        library.save("table", &five_player_regulation()).unwrap();
        let bigger = five_player_regulation().with_role(Role::Villager, 5);
        library.save("table", &bigger).unwrap();

        assert_eq!(library.load("table").unwrap(), Some(bigger));
    }

    #[test]
    fn empty_regulation_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let library = RegulationLibrary::new(dir.path().join("regulations.json"));
        assert!(library.save("empty", &Regulation::new()).is_err());
        assert!(!library.path().exists());
    }
}
