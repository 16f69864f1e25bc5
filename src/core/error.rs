//! Error types for game setup and turn actions.

use thiserror::Error;

/// Errors raised by the game model.
///
/// `Allocation` and `EmptyRegistry` are setup failures; the rest describe a
/// rejected action and leave the game state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The territory registry could not be allocated.
    #[error("could not allocate a registry of {requested} territories")]
    Allocation {
        /// Number of territories requested.
        requested: usize,
    },

    /// A registry must hold at least one territory.
    #[error("a registry needs at least one territory")]
    EmptyRegistry,

    /// A 1-based territory number outside `1..=len`.
    #[error("territory {ordinal} is out of range (1 to {len})")]
    TerritoryOutOfRange {
        /// The number that was given.
        ordinal: usize,
        /// Size of the registry.
        len: usize,
    },

    /// Attacker and defender belong to the same faction.
    #[error("cannot attack a territory of your own army ({color})")]
    SameFaction {
        /// The shared faction color.
        color: String,
    },

    /// A mission catalog must hold at least one mission.
    #[error("the mission catalog is empty")]
    EmptyCatalog,
}

/// Result type for game operations.
pub type WarResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GameError::TerritoryOutOfRange { ordinal: 7, len: 3 };
        assert_eq!(err.to_string(), "territory 7 is out of range (1 to 3)");

        let err = GameError::SameFaction {
            color: "Azul".to_string(),
        };
        assert!(err.to_string().contains("Azul"));
    }
}
