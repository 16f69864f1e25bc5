//! Game configuration.
//!
//! `GameConfig` gathers the tunables the rest of the crate reads:
//! - Text limits applied at registration (name and color length)
//! - The troop threshold used by the default mission evaluator
//! - Faction colors announced on each campaign turn
//! - Which answers to "continue?" keep the war going
//!
//! Nothing here is read from disk; the CLI overrides individual fields.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Longest territory name kept at registration, in characters.
pub const MAX_NAME_LEN: usize = 29;

/// Longest faction color kept at registration, in characters.
pub const MAX_COLOR_LEN: usize = 9;

/// A territory holding more troops than this satisfies any mission.
pub const DEFAULT_VICTORY_TROOPS: u32 = 15;

/// Territories registered by the fixed-size registration mode.
pub const FIXED_REGISTRATION_SIZE: usize = 5;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players holding a mission.
    pub player_count: usize,

    /// Maximum territory name length in characters.
    pub max_name_len: usize,

    /// Maximum faction color length in characters.
    pub max_color_len: usize,

    /// Strict lower bound on troops for the threshold mission rule.
    pub victory_troops: u32,

    /// Faction announced on odd turns, then even turns, and so on.
    pub turn_colors: Vec<String>,

    /// First characters that mean "yes, keep playing".
    pub affirmative: Vec<char>,

    /// Size of the fixed registration form.
    pub fixed_registration_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            max_name_len: MAX_NAME_LEN,
            max_color_len: MAX_COLOR_LEN,
            victory_troops: DEFAULT_VICTORY_TROOPS,
            turn_colors: vec!["Red".to_string(), "Blue".to_string()],
            affirmative: vec!['s', 'S', 'y', 'Y'],
            fixed_registration_size: FIXED_REGISTRATION_SIZE,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Must have at least 1 player");
        self.player_count = count;
        self
    }

    /// Set the victory troop threshold.
    #[must_use]
    pub fn with_victory_troops(mut self, troops: u32) -> Self {
        self.victory_troops = troops;
        self
    }

    /// Set the faction colors announced per turn.
    #[must_use]
    pub fn with_turn_colors<S: Into<String>>(
        mut self,
        colors: impl IntoIterator<Item = S>,
    ) -> Self {
        self.turn_colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the affirmative continue answers.
    #[must_use]
    pub fn with_affirmative(mut self, answers: impl IntoIterator<Item = char>) -> Self {
        self.affirmative = answers.into_iter().collect();
        self
    }

    /// Set the fixed registration size.
    #[must_use]
    pub fn with_fixed_registration_size(mut self, size: usize) -> Self {
        self.fixed_registration_size = size;
        self
    }

    /// Iterate over all players.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count)
    }

    /// Faction announced on a 1-based turn number.
    ///
    /// Returns `None` if no turn colors are configured.
    #[must_use]
    pub fn turn_color(&self, turn: u32) -> Option<&str> {
        if self.turn_colors.is_empty() {
            return None;
        }
        let slot = (turn.saturating_sub(1) as usize) % self.turn_colors.len();
        Some(self.turn_colors[slot].as_str())
    }

    /// Whether an answer to the continue prompt means "keep going".
    ///
    /// Only the first non-blank character counts.
    #[must_use]
    pub fn is_affirmative(&self, answer: &str) -> bool {
        answer
            .trim()
            .chars()
            .next()
            .is_some_and(|c| self.affirmative.contains(&c))
    }
}
