//! Application configuration

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory for snapshots and regulation presets
    pub data_dir: PathBuf,
    /// Smallest roster a game may start with
    pub min_players: u32,
    /// Largest roster a session accepts
    pub max_players: u32,
    /// Default day-discussion timer, in seconds
    pub discussion_seconds: u64,
    /// Maximum events the journal retains
    pub journal_capacity: usize,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_dir: env::var("WOLFMOOT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./data")),

            min_players: env::var("WOLFMOOT_MIN_PLAYERS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("WOLFMOOT_MIN_PLAYERS must be a number")?,
            max_players: env::var("WOLFMOOT_MAX_PLAYERS")
                .unwrap_or_else(|_| "20".to_string())
                .parse()
                .context("WOLFMOOT_MAX_PLAYERS must be a number")?,

            discussion_seconds: env::var("WOLFMOOT_DISCUSSION_SECONDS")
                .unwrap_or_else(|_| "180".to_string())
                .parse()
                .context("WOLFMOOT_DISCUSSION_SECONDS must be a number")?,

            journal_capacity: env::var("WOLFMOOT_JOURNAL_CAPACITY")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .context("WOLFMOOT_JOURNAL_CAPACITY must be a number")?,
        })
    }

    /// Where the latest snapshot is persisted.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join("snapshot.json")
    }

    /// Where regulation presets are persisted.
    pub fn regulations_path(&self) -> PathBuf {
        self.data_dir.join("regulations.json")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            min_players: 3,
            max_players: 20,
            discussion_seconds: 180,
            journal_capacity: 1000,
        }
    }
}
