//! Mission catalog and assignment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameError, RandomSource, WarResult};

/// The five canned objectives.
pub const DEFAULT_MISSIONS: [&str; 5] = [
    "Conquer 3 territories in a row.",
    "Eliminate every red troop.",
    "Hold at least 2 territories with more than 10 troops each.",
    "Control every blue territory.",
    "Field twice as many troops as the enemy.",
];

/// A textual objective held by one player.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mission {
    /// Objective text as shown to the player.
    pub text: String,
}

impl Mission {
    /// Create a mission from its text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl std::fmt::Display for Mission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Ordered, read-only list of objectives to draw from.
///
/// ```
/// use territory_war::missions::MissionCatalog;
///
/// let catalog = MissionCatalog::standard();
/// assert_eq!(catalog.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionCatalog {
    entries: Vec<String>,
}

impl MissionCatalog {
    /// Build a catalog from arbitrary entries.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCatalog` if no entries are given.
    pub fn new<S: Into<String>>(entries: impl IntoIterator<Item = S>) -> WarResult<Self> {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        Ok(Self { entries })
    }

    /// The five standard objectives.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            entries: DEFAULT_MISSIONS.iter().map(|m| (*m).to_string()).collect(),
        }
    }

    /// Number of objectives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a catalog holds at least one objective.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Objective text at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Whether `text` is one of the catalog's objectives.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.entries.iter().any(|e| e == text)
    }

    /// Iterate over objectives in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for MissionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Draw one mission uniformly from the catalog.
///
/// Every call is independent: two players may draw the same objective.
pub fn assign<R: RandomSource + ?Sized>(catalog: &MissionCatalog, rng: &mut R) -> Mission {
    let index = rng.pick_index(catalog.len()).min(catalog.len().saturating_sub(1));
    debug!(index, "mission drawn");
    Mission::new(catalog.entries[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedRolls, GameRng};

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            MissionCatalog::new(Vec::<String>::new()),
            Err(GameError::EmptyCatalog)
        );
    }

    #[test]
    fn test_assign_uses_picked_index() {
        let catalog = MissionCatalog::standard();
        let mut picks = FixedRolls::new().with_picks([3, 0]);

        assert_eq!(assign(&catalog, &mut picks).text, DEFAULT_MISSIONS[3]);
        assert_eq!(assign(&catalog, &mut picks).text, DEFAULT_MISSIONS[0]);
    }

    #[test]
    fn test_duplicate_missions_allowed() {
        let catalog = MissionCatalog::standard();
        let mut picks = FixedRolls::new().with_picks([2, 2]);

        let first = assign(&catalog, &mut picks);
        let second = assign(&catalog, &mut picks);
        assert_eq!(first, second);
    }

    #[test]
    fn test_assign_covers_catalog() {
        let catalog = MissionCatalog::standard();
        let mut rng = GameRng::new(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(assign(&catalog, &mut rng).text);
        }

        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = MissionCatalog::new(["Hold the line."]).unwrap();
        let mut rng = GameRng::new(0);
        assert_eq!(assign(&catalog, &mut rng).to_string(), "Hold the line.");
        assert!(catalog.contains("Hold the line."));
        assert!(!catalog.contains("Retreat."));
    }
}
