//! Validated name newtypes
//!
//! Names are valid by construction: non-empty, within length limits, and
//! trimmed of leading/trailing whitespace.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum length for player names
const MAX_NAME_LENGTH: usize = 100;

/// A validated player display name (non-empty, <=100 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    /// Create a new validated player name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 100 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Player name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Player name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PlayerName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_name_is_trimmed() {
        let name = PlayerName::new("  Ada  ").unwrap();
        assert_eq!(name.as_str(), "Ada");
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(PlayerName::new("").is_err());
        assert!(PlayerName::new("   ").is_err());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let long = "x".repeat(101);
        assert!(PlayerName::new(long).is_err());
        let max = "x".repeat(100);
        assert!(PlayerName::new(max).is_ok());
    }

    #[test]
    fn serde_round_trip_validates() {
        let name = PlayerName::new("Greta").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"Greta\"");
        let back: PlayerName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        let bad: Result<PlayerName, _> = serde_json::from_str("\"  \"");
        assert!(bad.is_err());
    }
}
