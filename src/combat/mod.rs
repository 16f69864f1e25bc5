//! Dice combat between two territories.
//!
//! One die per side. The higher die wins; a tie changes nothing.
//! - Attacker wins: the defender switches to the attacker's color and both
//!   sides end with half the attacker's troops (integer division)
//! - Defender holds: the attacker loses one troop, never going below zero

mod resolver;

pub use resolver::{resolve, resolve_with_rolls, BattleResult, CombatOutcome, DiceRolls};
