//! Random number generation for dice and mission draws.
//!
//! ## Key Features
//!
//! - **One source per process**: `GameRng` is seeded once and owned by `GameState`
//! - **Deterministic**: Same seed produces identical dice and missions
//! - **Substitutable**: Everything that draws goes through `RandomSource`, so tests
//!   can script exact dice with `FixedRolls`
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use territory_war::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.roll_die();
//! assert!((1..=6).contains(&roll));
//!
//! // Same seed, same sequence
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.roll_die(), b.roll_die());
//! ```

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on a combat die.
pub const DIE_FACES: u8 = 6;

/// Source of the randomness the game consumes.
///
/// Combat draws one die per side; mission assignment draws one catalog index
/// per player. Implementations must return values inside the documented ranges.
pub trait RandomSource {
    /// Roll one six-sided die, uniform in `1..=6`.
    fn roll_die(&mut self) -> u8;

    /// Pick an index uniform in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Seeded game RNG.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible from the seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the system clock.
    ///
    /// Falls back to a fixed seed if the clock reads before the UNIX epoch.
    #[must_use]
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Derive a seed from the wall clock.
#[must_use]
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Scripted randomness for tests and replays.
///
/// Dice and picks are served from separate queues in the order they were
/// pushed. An exhausted queue falls back to the lowest legal value
/// (die `1`, index `0`) so a short script never panics mid-game.
///
/// ```
/// use territory_war::core::{FixedRolls, RandomSource};
///
/// let mut dice = FixedRolls::dice([6, 1]);
/// assert_eq!(dice.roll_die(), 6);
/// assert_eq!(dice.roll_die(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FixedRolls {
    dice: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl FixedRolls {
    /// Create an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a script with the given dice.
    #[must_use]
    pub fn dice(dice: impl IntoIterator<Item = u8>) -> Self {
        Self::new().with_dice(dice)
    }

    /// Append dice to the script. Values are clamped to `1..=6`.
    #[must_use]
    pub fn with_dice(mut self, dice: impl IntoIterator<Item = u8>) -> Self {
        self.dice
            .extend(dice.into_iter().map(|d| d.clamp(1, DIE_FACES)));
        self
    }

    /// Append index picks to the script.
    #[must_use]
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Dice not yet consumed.
    #[must_use]
    pub fn remaining_dice(&self) -> usize {
        self.dice.len()
    }
}

impl RandomSource for FixedRolls {
    fn roll_die(&mut self) -> u8 {
        self.dice.pop_front().unwrap_or(1)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.picks
            .pop_front()
            .map_or(0, |pick| pick % len.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_die_stays_in_range_and_covers_faces() {
        let mut rng = GameRng::new(99);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            let roll = rng.roll_die();
            assert!((1..=6).contains(&roll));
            seen[usize::from(roll - 1)] = true;
        }

        assert!(seen.iter().all(|&s| s), "every face should appear");
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut rng = GameRng::new(3);
        for len in 1..10 {
            for _ in 0..50 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_fixed_rolls_order_and_fallback() {
        let mut fixed = FixedRolls::dice([4, 2]).with_picks([3, 7]);

        assert_eq!(fixed.roll_die(), 4);
        assert_eq!(fixed.roll_die(), 2);
        assert_eq!(fixed.roll_die(), 1);

        assert_eq!(fixed.pick_index(5), 3);
        assert_eq!(fixed.pick_index(5), 2);
        assert_eq!(fixed.pick_index(5), 0);
    }

    #[test]
    fn test_fixed_rolls_clamps_dice() {
        let mut fixed = FixedRolls::dice([0, 9]);
        assert_eq!(fixed.roll_die(), 1);
        assert_eq!(fixed.roll_die(), 6);
        assert_eq!(fixed.remaining_dice(), 0);
    }
}
