//! Players and the per-player mission slots.
//!
//! Players are counted from 0 internally and announced from 1 at the console.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A player seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Player at a 0-based seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Seat as announced at the console (1-based).
    #[must_use]
    pub const fn number(self) -> usize {
        self.0 as usize + 1
    }

    /// Seats in victory-check order, player 1 first.
    ///
    /// Counts past the last `u8` seat are cut off.
    ///
    /// ```
    /// use territory_war::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..=u8::MAX).take(player_count).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// One value per player, in seat order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Fill every seat from `factory`, called once per player in seat order.
    pub fn new(player_count: usize, factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::all(player_count).map(factory).collect(),
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Value for a seat, if the map has one.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all(self.data.len()).zip(self.data.iter())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_numbering() {
        let second = PlayerId::new(1);

        assert_eq!(second.index(), 1);
        assert_eq!(second.number(), 2);
        assert_eq!(second.to_string(), "Player 2");
    }

    #[test]
    fn test_all_caps_at_u8_seats() {
        assert_eq!(PlayerId::all(0).count(), 0);
        assert_eq!(PlayerId::all(1000).count(), 256);
    }

    #[test]
    fn test_map_fills_in_seat_order() {
        let mut calls = Vec::new();
        let map = PlayerMap::new(3, |p| {
            calls.push(p);
            p.number() * 10
        });

        assert_eq!(calls, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
        assert_eq!(map[PlayerId::new(2)], 30);
        assert_eq!(map.get(PlayerId::new(3)), None);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs[0], (PlayerId::new(0), &10));
    }

    #[test]
    fn test_map_serde() {
        let map = PlayerMap::new(2, |p| format!("Goal {}", p.number()));
        let json = serde_json::to_string(&map).unwrap();
        let back: PlayerMap<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
