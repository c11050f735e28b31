//! Game session - composition root for one GM
//!
//! A session owns the bus, the game, the journal, and a snapshot store
//! behind the port. It is constructed explicitly per GM; nothing here is
//! process-global. Registration goes through the session so the
//! application player bounds apply on top of the game's own rules.

use std::rc::Rc;

use anyhow::{Context, Result};
use wolfmoot_domain::{EventBus, Game, PlayerName, Regulation, Snapshot};

use crate::config::AppConfig;
use crate::journal::{attach_log_listener, GameJournal};
use crate::ports::SnapshotStorePort;

/// One GM's game, wired to its observers and persistence
pub struct GameSession {
    config: AppConfig,
    bus: Rc<EventBus>,
    game: Game,
    journal: GameJournal,
    store: Box<dyn SnapshotStorePort>,
}

impl GameSession {
    /// Build a session: fresh bus, log listener, journal, and a game
    /// under the given regulation.
    pub fn new(
        regulation: Regulation,
        config: AppConfig,
        store: Box<dyn SnapshotStorePort>,
    ) -> Self {
        let bus = Rc::new(EventBus::new());
        attach_log_listener(&bus);
        let journal = GameJournal::attach(&bus, config.journal_capacity);
        let game = Game::new(regulation, Rc::clone(&bus));

        tracing::info!(game_id = %game.id(), "game session created");
        Self {
            config,
            bus,
            game,
            journal,
            store,
        }
    }

    /// The session's configuration.
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The bus observers subscribe on.
    #[inline]
    pub fn bus(&self) -> &Rc<EventBus> {
        &self.bus
    }

    /// Read access to the game.
    #[inline]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// GM operations (phase changes, kills, reset) go straight to the
    /// game; the session adds nothing to them.
    #[inline]
    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// The recorded event history.
    #[inline]
    pub fn journal(&self) -> &GameJournal {
        &self.journal
    }

    /// Register a player, enforcing the configured roster ceiling.
    pub fn register_player(&mut self, name: &str) -> Result<u32> {
        let registered = self.game.players().len();
        if registered >= self.config.max_players as usize {
            anyhow::bail!(
                "cannot register {name:?}: the table is full ({} players)",
                self.config.max_players
            );
        }
        let name = PlayerName::new(name)?;
        Ok(self.game.add_player(name)?)
    }

    /// Start the game, enforcing the configured roster floor first.
    pub fn start(&mut self) -> Result<()> {
        let registered = self.game.players().len();
        if registered < self.config.min_players as usize {
            anyhow::bail!(
                "cannot start with {registered} players, at least {} required",
                self.config.min_players
            );
        }
        self.game.start_game()?;
        Ok(())
    }

    /// Capture a snapshot and persist it through the store.
    pub fn checkpoint(&mut self) -> Result<Snapshot> {
        let snapshot = self.game.snapshot();
        self.store
            .save(&snapshot)
            .context("failed to persist checkpoint")?;
        tracing::info!(game_id = %self.game.id(), "checkpoint saved");
        Ok(snapshot)
    }

    /// Restore the game from the latest stored snapshot.
    ///
    /// Returns false when the store holds nothing yet; the game is left
    /// untouched in that case.
    pub fn restore_latest(&mut self) -> Result<bool> {
        match self.store.load().context("failed to load checkpoint")? {
            Some(snapshot) => {
                self.game.restore(&snapshot)?;
                tracing::info!(game_id = %self.game.id(), "checkpoint restored");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
