//! Territory records and checked territory indices.

use serde::{Deserialize, Serialize};

use crate::core::GameConfig;

/// Index of a territory inside a `Registry`.
///
/// Only a registry hands these out, after checking the bounds, so holding a
/// `TerritoryId` means the slot existed when it was minted. Indices are 0-based
/// internally and 1-based at the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(usize);

impl TerritoryId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Number as shown at the console (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.number())
    }
}

/// A named map region held by one faction.
///
/// Faction colors compare by exact, case-sensitive text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Territory {
    /// Display name.
    pub name: String,

    /// Owning faction color.
    pub color: String,

    /// Troops stationed here. Never negative.
    pub troops: u32,
}

impl Territory {
    /// Create a territory as given.
    pub fn new(name: impl Into<String>, color: impl Into<String>, troops: u32) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            troops,
        }
    }

    /// Create a territory from registration input, applying the configured
    /// length limits to name and color.
    #[must_use]
    pub fn registered(name: &str, color: &str, troops: u32, config: &GameConfig) -> Self {
        Self {
            name: truncate_chars(name, config.max_name_len),
            color: truncate_chars(color, config.max_color_len),
            troops,
        }
    }

    /// Whether both territories fly the same faction color.
    #[must_use]
    pub fn same_faction(&self, other: &Territory) -> bool {
        self.color == other.color
    }
}

/// Keep at most `max` characters of `text`.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_territory_id_numbering() {
        let id = TerritoryId::new(0);
        assert_eq!(id.index(), 0);
        assert_eq!(id.number(), 1);
        assert_eq!(format!("{}", TerritoryId::new(4)), "[5]");
    }

    #[test]
    fn test_registered_truncates_by_characters() {
        let config = GameConfig::new();
        let long_name = "A".repeat(40);
        let t = Territory::registered(&long_name, "Vermelhoooo", 3, &config);

        assert_eq!(t.name.chars().count(), 29);
        assert_eq!(t.color, "Vermelhoo");
        assert_eq!(t.troops, 3);

        // Multi-byte characters count once each
        let t = Territory::registered("São Paulo", "Açafrão-escuro", 1, &config);
        assert_eq!(t.name, "São Paulo");
        assert_eq!(t.color, "Açafrão-e");
    }

    #[test]
    fn test_same_faction_is_case_sensitive() {
        let a = Territory::new("Norte", "Azul", 1);
        let b = Territory::new("Sul", "Azul", 2);
        let c = Territory::new("Leste", "azul", 2);

        assert!(a.same_faction(&b));
        assert!(!a.same_faction(&c));
    }
}
