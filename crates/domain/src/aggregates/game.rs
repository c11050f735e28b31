//! Game aggregate - roster, phase machine, and end-condition detection
//!
//! One `Game` is one table of Werewolf run by one GM. The aggregate owns
//! every `Player`, drives the phase/round state machine, deals roles, and
//! publishes a `GameEvent` on every meaningful transition to the
//! `EventBus` injected at construction (no hidden global bus).
//!
//! # Invariants
//!
//! - Registration mutations are Setup-only; seat numbers are unique
//! - The roster size must exactly match the regulation before the game
//!   starts
//! - While inactive, no phase-changing or round-advancing operation
//!   mutates anything
//! - The round counter only increases, and only while active
//! - Once an end condition fires the game is permanently inactive; only a
//!   reset (a new Setup) follows

use std::rc::Rc;

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::aggregates::{PlayerSnapshot, Snapshot};
use crate::entities::Player;
use crate::error::DomainError;
use crate::events::{
    EventBus, EventEnvelope, EventSource, GameEvent, GameOutcome, KillOutcome, KillReport,
    PhaseChange,
};
use crate::value_objects::{GamePhase, PlayerName, Regulation, TeamCounts};
use wolfmoot_domain::GameId;

/// Authoritative state for one game of Werewolf
#[derive(Debug)]
pub struct Game {
    // Identity
    id: GameId,

    // Roster, insertion order = registration order
    players: Vec<Player>,
    next_seat: u32,

    // Progression
    phase: GamePhase,
    round: u32,
    active: bool,

    // Role quota, replaceable only during Setup
    regulation: Regulation,

    // Notification channel, injected
    bus: Rc<EventBus>,

    // Timestamps
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Game {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new game in Setup with an empty roster.
    ///
    /// The bus is shared: observers subscribe on their own clone of the
    /// `Rc` before or after construction.
    pub fn new(regulation: Regulation, bus: Rc<EventBus>) -> Self {
        let now = Utc::now();
        Self {
            id: GameId::new(),
            players: Vec::new(),
            next_seat: 1,
            phase: GamePhase::Setup,
            round: 0,
            active: false,
            regulation,
            bus,
            created_at: now,
            updated_at: now,
        }
    }

    // =========================================================================
    // Accessors (read-only)
    // =========================================================================

    /// Returns the game's unique identifier.
    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Returns the roster in registration order.
    #[inline]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the current phase.
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns the current round (0 during Setup).
    #[inline]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Returns the configured role quota.
    #[inline]
    pub fn regulation(&self) -> &Regulation {
        &self.regulation
    }

    /// Returns true from a successful start until an end condition fires.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns when the game was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the game was last mutated.
    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Look up a player by name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players
            .iter()
            .find(|player| player.name().as_str() == name)
    }

    /// Alive players, in roster order.
    pub fn alive_players(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|player| player.is_alive())
            .collect()
    }

    /// Alive head-count per team.
    ///
    /// Players with no role yet (Setup) count toward neither side.
    pub fn team_counts(&self) -> TeamCounts {
        let mut counts = TeamCounts::default();
        for player in self.players.iter().filter(|player| player.is_alive()) {
            if let Some(team) = player.team() {
                counts.record(team);
            }
        }
        counts
    }

    // =========================================================================
    // Registration (Setup-only)
    // =========================================================================

    /// Register a player; returns the assigned seat number.
    ///
    /// # Errors
    ///
    /// - `InvalidState` once the game has left Setup
    /// - `Validation` if the name is already taken
    pub fn add_player(&mut self, name: PlayerName) -> Result<u32, DomainError> {
        self.ensure_setup("register players")?;
        if self.player(name.as_str()).is_some() {
            return Err(DomainError::validation(format!(
                "Player name {} is already taken",
                name
            )));
        }

        let number = self.next_seat;
        self.next_seat += 1;
        self.players.push(Player::new(number, name.clone()));
        self.touch();

        self.publish(GameEvent::PlayerAdded {
            name: name.to_string(),
            number,
        });
        Ok(number)
    }

    /// Remove a registered player.
    ///
    /// Remaining seat numbers are not renumbered: unique, not necessarily
    /// contiguous afterward.
    ///
    /// # Errors
    ///
    /// - `InvalidState` once the game has left Setup
    /// - `NotFound` if no player has that name
    pub fn remove_player(&mut self, name: &str) -> Result<(), DomainError> {
        self.ensure_setup("remove players")?;
        let index = self
            .players
            .iter()
            .position(|player| player.name().as_str() == name)
            .ok_or_else(|| DomainError::not_found("Player", name))?;

        let removed = self.players.remove(index);
        self.touch();

        self.publish(GameEvent::PlayerRemoved {
            name: removed.name().to_string(),
            number: removed.number(),
        });
        Ok(())
    }

    /// Replace the role quota.
    ///
    /// # Errors
    ///
    /// `InvalidState` once the game has left Setup; the regulation is
    /// read-only from start to reset.
    pub fn set_regulation(&mut self, regulation: Regulation) -> Result<(), DomainError> {
        self.ensure_setup("change the regulation")?;
        let total_players = regulation.total_players() as u32;
        self.regulation = regulation;
        self.touch();

        self.publish(GameEvent::RegulationChanged { total_players });
        Ok(())
    }

    // =========================================================================
    // Start & role distribution
    // =========================================================================

    /// Validate the regulation against the roster, deal roles, and open
    /// the first day.
    ///
    /// Publishes one `RoleAssigned` per player, then `GameStarted`, then
    /// the Setup -> DayDiscussion `PhaseChanged`.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the game is already active or has ended
    /// - `Configuration` if the roster size does not match the quota; the
    ///   game stays in Setup with nothing mutated
    pub fn start_game(&mut self) -> Result<(), DomainError> {
        self.start_game_with_rng(&mut rand::thread_rng())
    }

    /// `start_game` with an injected RNG so tests can seed the shuffle.
    pub fn start_game_with_rng(&mut self, rng: &mut impl Rng) -> Result<(), DomainError> {
        if self.active {
            return Err(DomainError::invalid_state("Game has already started"));
        }
        if !self.phase.is_setup() {
            return Err(DomainError::invalid_state(
                "Game has ended; reset before starting again",
            ));
        }
        self.regulation.validate_player_count(self.players.len())?;

        // Uniform permutation of the quota multiset (Fisher-Yates)
        let mut tokens = self.regulation.role_multiset();
        tokens.shuffle(rng);

        for (player, role) in self.players.iter_mut().zip(tokens) {
            player.clear_role();
            player.assign_role(role)?;
        }

        let from = self.phase;
        self.active = true;
        self.round = 1;
        self.phase = GamePhase::DayDiscussion;
        self.touch();

        for player in &self.players {
            if let Some(role) = player.role() {
                self.publish(GameEvent::RoleAssigned {
                    name: player.name().to_string(),
                    role,
                });
            }
        }
        self.publish(GameEvent::GameStarted {
            player_count: self.players.len() as u32,
            round: self.round,
            phase: self.phase,
        });
        self.publish(GameEvent::PhaseChanged {
            from,
            to: self.phase,
            round: self.round,
        });

        tracing::info!(game_id = %self.id, players = self.players.len(), "game started");
        Ok(())
    }

    // =========================================================================
    // Phase & round machine
    // =========================================================================

    /// Step to the next phase.
    ///
    /// On an inactive (ended) game this is a warn-logged no-op returning
    /// `IgnoredInactive` - a caller that lands here after an end condition
    /// has a logic bug upstream, but the state must not be corrupted.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` if `to` is not the legal successor of the
    /// current phase, or when called from Setup (only `start_game` leaves
    /// Setup).
    pub fn change_phase(&mut self, to: GamePhase) -> Result<PhaseChange, DomainError> {
        if self.phase.is_setup() {
            return Err(DomainError::invalid_transition(self.phase, to));
        }
        if !self.active {
            tracing::warn!(
                game_id = %self.id,
                requested = %to,
                "phase change ignored: game is not active"
            );
            return Ok(PhaseChange::IgnoredInactive);
        }

        let from = self.phase;
        match from.successor() {
            Some(next) if next == to => {}
            _ => return Err(DomainError::invalid_transition(from, to)),
        }

        if from.ends_round() {
            self.round += 1;
        }
        self.phase = to;
        self.touch();

        self.publish(GameEvent::PhaseChanged {
            from,
            to,
            round: self.round,
        });
        if from.ends_round() {
            self.publish(GameEvent::RoundAdvanced { round: self.round });
        }

        Ok(PhaseChange::Applied {
            from,
            to,
            round: self.round,
        })
    }

    /// Drive the machine forward to the next DayDiscussion.
    ///
    /// Applies the same inactive guard and transition validation as
    /// `change_phase`; every intermediate phase publishes its own event.
    pub fn next_round(&mut self) -> Result<PhaseChange, DomainError> {
        if self.phase.is_setup() {
            return Err(DomainError::invalid_transition(
                self.phase,
                GamePhase::DayDiscussion,
            ));
        }
        if !self.active {
            tracing::warn!(game_id = %self.id, "round advance ignored: game is not active");
            return Ok(PhaseChange::IgnoredInactive);
        }

        loop {
            let Some(next) = self.phase.successor() else {
                return Err(DomainError::invalid_transition(
                    self.phase,
                    GamePhase::DayDiscussion,
                ));
            };
            let applied = self.change_phase(next)?;
            if self.phase == GamePhase::DayDiscussion {
                return Ok(applied);
            }
        }
    }

    // =========================================================================
    // Death & end conditions
    // =========================================================================

    /// Mark a player dead and evaluate the end condition.
    ///
    /// Killing an already-dead player is an idempotent success
    /// (`AlreadyDead`): no event, no count change. On an inactive game
    /// this is the same warn-logged no-op as `change_phase`.
    ///
    /// # Errors
    ///
    /// `NotFound` if no player has that name.
    pub fn kill_player(&mut self, name: &str) -> Result<KillReport, DomainError> {
        if !self.active {
            tracing::warn!(
                game_id = %self.id,
                player = name,
                "kill ignored: game is not active"
            );
            return Ok(KillReport::IgnoredInactive);
        }

        let round = self.round;
        let phase = self.phase;
        let player = self
            .players
            .iter_mut()
            .find(|player| player.name().as_str() == name)
            .ok_or_else(|| DomainError::not_found("Player", name))?;

        if let KillOutcome::AlreadyDead = player.kill(round, phase) {
            return Ok(KillReport::AlreadyDead);
        }
        let Some(team) = player.team() else {
            return Err(DomainError::invalid_state(format!(
                "Player {} has no role in an active game",
                name
            )));
        };
        self.touch();

        self.publish(GameEvent::PlayerDied {
            name: name.to_string(),
            team,
            round,
            phase,
        });

        let ended = self.evaluate_end_condition();
        Ok(KillReport::Died {
            name: name.to_string(),
            team,
            ended,
        })
    }

    /// End the game if a team has been wiped out. Both teams at zero is a
    /// draw, a distinct outcome.
    fn evaluate_end_condition(&mut self) -> Option<GameOutcome> {
        let counts = self.team_counts();
        let outcome = match (counts.village, counts.werewolves) {
            (0, 0) => GameOutcome::Draw,
            (_, 0) => GameOutcome::VillageWins,
            (0, _) => GameOutcome::WerewolvesWin,
            _ => return None,
        };

        self.active = false;
        self.touch();
        self.publish(GameEvent::GameEnded {
            outcome,
            final_round: self.round,
            counts,
        });
        tracing::info!(game_id = %self.id, %outcome, round = self.round, "game ended");
        Some(outcome)
    }

    // =========================================================================
    // Snapshot / restore / reset
    // =========================================================================

    /// Capture a deep, independent copy of everything mutable.
    pub fn snapshot(&self) -> Snapshot {
        let players = self
            .players
            .iter()
            .map(|player| PlayerSnapshot {
                number: player.number(),
                name: player.name().clone(),
                role: player.role(),
                is_alive: player.is_alive(),
            })
            .collect();
        Snapshot::new(players, self.phase, self.round, self.active)
    }

    /// Replace all mutable state from a snapshot, atomically.
    ///
    /// The replacement roster is fully built and validated before any live
    /// field changes; on error the game is untouched. Publishes nothing -
    /// a restore is a checkpoint operation, not a game transition.
    ///
    /// # Errors
    ///
    /// `Validation` if the snapshot has duplicate seat numbers or names,
    /// or claims to be active while a player has no role.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), DomainError> {
        let mut players = Vec::with_capacity(snapshot.players().len());
        let mut max_seat = 0;
        for captured in snapshot.players() {
            if players
                .iter()
                .any(|existing: &Player| existing.number() == captured.number)
            {
                return Err(DomainError::validation(format!(
                    "Snapshot repeats seat number {}",
                    captured.number
                )));
            }
            if players
                .iter()
                .any(|existing: &Player| existing.name() == &captured.name)
            {
                return Err(DomainError::validation(format!(
                    "Snapshot repeats player name {}",
                    captured.name
                )));
            }
            if snapshot.active() && captured.role.is_none() {
                return Err(DomainError::validation(format!(
                    "Snapshot is active but player {} has no role",
                    captured.name
                )));
            }
            players.push(Player::restored(
                captured.number,
                captured.name.clone(),
                captured.role,
                captured.is_alive,
                snapshot.round(),
                snapshot.phase(),
            ));
        }

        // Commit point: everything below is infallible
        self.next_seat = players
            .iter()
            .map(Player::number)
            .max()
            .map_or(1, |seat| seat + 1);
        self.players = players;
        self.phase = snapshot.phase();
        self.round = snapshot.round();
        self.active = snapshot.active();
        self.touch();
        Ok(())
    }

    /// Abandon the current game and return to Setup.
    ///
    /// The roster and regulation survive; roles are cleared, everyone is
    /// revived, histories restart. Publishes `GameReset`.
    pub fn reset(&mut self) {
        self.active = false;
        self.phase = GamePhase::Setup;
        self.round = 0;
        for player in &mut self.players {
            player.reset_for_new_game();
        }
        self.touch();

        self.publish(GameEvent::GameReset);
        tracing::info!(game_id = %self.id, "game reset to setup");
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_setup(&self, operation: &str) -> Result<(), DomainError> {
        if self.phase.is_setup() && !self.active {
            Ok(())
        } else {
            Err(DomainError::invalid_state(format!(
                "Cannot {} once the game has started",
                operation
            )))
        }
    }

    fn publish(&self, event: GameEvent) {
        self.bus
            .publish(&EventEnvelope::new(EventSource::Game, event));
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Tests
// ============================================================================
