//! Territory registry.
//!
//! The `Registry` stores every territory of a session in registration order.
//! Its size is fixed once built; territories never move, so a `TerritoryId`
//! stays valid for the whole game.

use serde::{Deserialize, Serialize};

use super::definition::{Territory, TerritoryId};
use crate::core::{GameError, WarResult};

/// Fixed-size, ordered collection of territories.
///
/// ## Example
///
/// ```
/// use territory_war::territory::{Registry, Territory};
///
/// let registry = Registry::new(vec![
///     Territory::new("Norte", "Vermelho", 10),
///     Territory::new("Sul", "Azul", 4),
/// ])
/// .unwrap();
///
/// let sul = registry.id_from_number(2).unwrap();
/// assert_eq!(registry[sul].name, "Sul");
/// assert!(registry.id_from_number(3).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Build a registry from already-collected territories.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRegistry` if `territories` is empty.
    pub fn new(territories: Vec<Territory>) -> WarResult<Self> {
        if territories.is_empty() {
            return Err(GameError::EmptyRegistry);
        }
        Ok(Self { territories })
    }

    /// Build a registry of `len` territories, filling each slot in order.
    ///
    /// Storage is reserved up front; the fill function receives the slot's id
    /// and may fail, in which case the partial registry is dropped.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyRegistry` for `len == 0`,
    /// `GameError::Allocation` if storage cannot be reserved, or whatever the
    /// fill function returns.
    pub fn try_build<E>(
        len: usize,
        mut fill: impl FnMut(TerritoryId) -> Result<Territory, E>,
    ) -> Result<Self, E>
    where
        E: From<GameError>,
    {
        if len == 0 {
            return Err(GameError::EmptyRegistry.into());
        }

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(len)
            .map_err(|_| GameError::Allocation { requested: len })?;

        for index in 0..len {
            territories.push(fill(TerritoryId::new(index))?);
        }

        Ok(Self { territories })
    }

    /// Number of territories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Always false: a registry holds at least one territory.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Check a 1-based territory number and turn it into an id.
    ///
    /// # Errors
    ///
    /// Returns `GameError::TerritoryOutOfRange` unless `1 <= number <= len`.
    pub fn id_from_number(&self, number: usize) -> WarResult<TerritoryId> {
        if (1..=self.len()).contains(&number) {
            Ok(TerritoryId::new(number - 1))
        } else {
            Err(GameError::TerritoryOutOfRange {
                ordinal: number,
                len: self.len(),
            })
        }
    }

    /// Get a territory by id.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.territories.get(id.index())
    }

    /// Get a mutable territory by id.
    pub fn get_mut(&mut self, id: TerritoryId) -> Option<&mut Territory> {
        self.territories.get_mut(id.index())
    }

    /// Borrow two distinct territories mutably at once.
    ///
    /// Returns `None` if the ids are equal or either is out of bounds.
    pub fn pair_mut(
        &mut self,
        first: TerritoryId,
        second: TerritoryId,
    ) -> Option<(&mut Territory, &mut Territory)> {
        let (a, b) = (first.index(), second.index());
        if a == b || a >= self.len() || b >= self.len() {
            return None;
        }

        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }

    /// Iterate over territories in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Iterate over (TerritoryId, &Territory) pairs.
    pub fn entries(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId::new(i), t))
    }

    /// All territories as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Territory] {
        &self.territories
    }
}

impl std::ops::Index<TerritoryId> for Registry {
    type Output = Territory;

    fn index(&self, id: TerritoryId) -> &Self::Output {
        &self.territories[id.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_territories() -> Registry {
        Registry::new(vec![
            Territory::new("Norte", "Vermelho", 10),
            Territory::new("Sul", "Azul", 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert_eq!(Registry::new(vec![]), Err(GameError::EmptyRegistry));

        let built: Result<Registry, GameError> =
            Registry::try_build(0, |_| Ok(Territory::new("x", "y", 1)));
        assert_eq!(built, Err(GameError::EmptyRegistry));
    }

    #[test]
    fn test_try_build_fills_in_order() {
        let built: Result<Registry, GameError> = Registry::try_build(3, |id| {
            Ok(Territory::new(format!("T{}", id.number()), "Verde", id.index() as u32))
        });
        let registry = built.unwrap();

        assert_eq!(registry.len(), 3);
        let names: Vec<_> = registry.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["T1", "T2", "T3"]);
    }

    #[test]
    fn test_try_build_propagates_fill_error() {
        let result = Registry::try_build(2, |id| {
            if id.index() == 1 {
                Err(GameError::EmptyCatalog)
            } else {
                Ok(Territory::new("a", "b", 1))
            }
        });
        assert_eq!(result, Err(GameError::EmptyCatalog));
    }

    #[test]
    fn test_try_build_allocation_failure() {
        let result: Result<Registry, GameError> =
            Registry::try_build(usize::MAX, |_| Ok(Territory::new("a", "b", 1)));
        assert_eq!(result, Err(GameError::Allocation { requested: usize::MAX }));
    }

    #[test]
    fn test_id_from_number_bounds() {
        let registry = two_territories();

        assert_eq!(registry.id_from_number(1).unwrap().index(), 0);
        assert_eq!(registry.id_from_number(2).unwrap().index(), 1);
        assert_eq!(
            registry.id_from_number(0),
            Err(GameError::TerritoryOutOfRange { ordinal: 0, len: 2 })
        );
        assert_eq!(
            registry.id_from_number(3),
            Err(GameError::TerritoryOutOfRange { ordinal: 3, len: 2 })
        );
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut registry = two_territories();
        let a = registry.id_from_number(1).unwrap();
        let b = registry.id_from_number(2).unwrap();

        {
            let (x, y) = registry.pair_mut(a, b).unwrap();
            assert_eq!(x.name, "Norte");
            assert_eq!(y.name, "Sul");
        }
        {
            let (x, y) = registry.pair_mut(b, a).unwrap();
            assert_eq!(x.name, "Sul");
            assert_eq!(y.name, "Norte");
            x.troops = 99;
        }

        assert_eq!(registry[b].troops, 99);
        assert!(registry.pair_mut(a, a).is_none());
    }
}
