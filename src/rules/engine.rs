//! Game results and turn phases.
//!
//! A turn moves through these phases:
//!
//! ```text
//! AwaitingSelection -> ValidatingOwnership -> Resolving -> CheckingVictory -> AwaitingContinue
//!        ^                    |                                  |                 |  |
//!        +---- rejected ------+                                  +--> Ended <- no -+  |
//!        +-------------------------------- yes ---------------------------------------+
//! ```

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::missions::Mission;
use crate::territory::TerritoryId;

/// Result of a finished session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player accomplished their mission.
    Victory {
        /// Winning player.
        player: PlayerId,
        /// The mission they held.
        mission: Mission,
    },
    /// The players chose not to continue.
    Stopped,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Victory { player: p, .. } => *p == player,
            GameResult::Stopped => false,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Victory { player, .. } => Some(*player),
            GameResult::Stopped => None,
        }
    }
}

/// Where a turn currently stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for attacker and defender numbers.
    AwaitingSelection,
    /// Both picked; checking they belong to different factions.
    ValidatingOwnership {
        /// Attacking territory.
        attacker: TerritoryId,
        /// Defending territory.
        defender: TerritoryId,
    },
    /// Rolling dice and applying the result.
    Resolving {
        /// Attacking territory.
        attacker: TerritoryId,
        /// Defending territory.
        defender: TerritoryId,
    },
    /// Checking each player's mission, player 1 first.
    CheckingVictory,
    /// Asking whether to keep playing.
    AwaitingContinue,
    /// Session over.
    Ended(GameResult),
}

impl TurnPhase {
    /// Whether this is the terminal phase.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::Ended(_))
    }

    /// The result, once ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match self {
            TurnPhase::Ended(result) => Some(result),
            _ => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TurnPhase::AwaitingSelection => "awaiting-selection",
            TurnPhase::ValidatingOwnership { .. } => "validating-ownership",
            TurnPhase::Resolving { .. } => "resolving",
            TurnPhase::CheckingVictory => "checking-victory",
            TurnPhase::AwaitingContinue => "awaiting-continue",
            TurnPhase::Ended(_) => "ended",
        }
    }
}
