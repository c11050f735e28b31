//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String or anyhow.

use thiserror::Error;

use crate::value_objects::GamePhase;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Regulation does not fit the registered roster
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Operation attempted in a state that forbids it
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Requested phase transition is not a legal successor
    #[error("Invalid phase transition: {from} -> {to}")]
    InvalidTransition { from: GamePhase, to: GamePhase },

    /// Referenced entity does not exist
    #[error("Entity not found: {entity_type} named {name}")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a configuration error for regulation/roster mismatches.
    ///
    /// Raised only by `start_game`: the game stays in Setup and the caller
    /// may fix the regulation or the roster and retry.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates an invalid-state error.
    ///
    /// Use this when an operation is attempted in a state that forbids it:
    /// - Re-starting an active game
    /// - Registering or removing players after the game has started
    /// - Assigning a role to a player that already has one
    ///
    /// The call fails with no mutation; the caller may retry after
    /// correcting state.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Create an invalid-transition error
    pub fn invalid_transition(from: GamePhase, to: GamePhase) -> Self {
        Self::InvalidTransition { from, to }
    }

    /// Create a not-found error
    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }

    /// Creates a validation error for bad inputs.
    ///
    /// Use this when domain invariants or constraints are violated:
    /// - Required fields are empty or missing
    /// - A player name is already taken
    /// - A snapshot fails integrity checks on restore
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
