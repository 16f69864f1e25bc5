//! Combat resolution.
//!
//! `resolve` draws the dice from a `RandomSource`; `resolve_with_rolls` applies
//! a known pair of dice and is what the tests drive directly. Both mutate the
//! two territories in place and return a `CombatOutcome` describing what
//! happened, so callers can narrate or assert without parsing text.
//!
//! The caller is responsible for refusing attacks between territories of the
//! same faction; the resolver does not re-check.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::RandomSource;
use crate::territory::Territory;

/// One die per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRolls {
    /// Attacker's die, `1..=6`.
    pub attacker: u8,
    /// Defender's die, `1..=6`.
    pub defender: u8,
}

impl DiceRolls {
    /// Create a pair of rolls.
    #[must_use]
    pub const fn new(attacker: u8, defender: u8) -> Self {
        Self { attacker, defender }
    }

    /// Roll both dice, attacker first.
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let attacker = rng.roll_die();
        let defender = rng.roll_die();
        Self { attacker, defender }
    }

    /// Who won this pair of dice.
    #[must_use]
    pub fn result(self) -> BattleResult {
        match self.attacker.cmp(&self.defender) {
            Ordering::Greater => BattleResult::AttackerWins,
            Ordering::Less => BattleResult::DefenderHolds,
            Ordering::Equal => BattleResult::Tie,
        }
    }
}

/// How a single attack ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    /// Attacker rolled higher and took the territory.
    AttackerWins,
    /// Defender rolled higher; the attacker lost a troop.
    DefenderHolds,
    /// Equal dice; nothing changed.
    Tie,
}

/// Full record of one attack: the dice, the result and both territories
/// before and after.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatOutcome {
    /// Dice rolled.
    pub rolls: DiceRolls,
    /// Winner of the exchange.
    pub result: BattleResult,
    /// Attacker as it was before the dice.
    pub attacker_before: Territory,
    /// Defender as it was before the dice.
    pub defender_before: Territory,
    /// Attacker after the exchange.
    pub attacker_after: Territory,
    /// Defender after the exchange.
    pub defender_after: Territory,
}

impl CombatOutcome {
    /// Whether the defender changed hands.
    #[must_use]
    pub fn conquered(&self) -> bool {
        self.result == BattleResult::AttackerWins
    }

    /// Whether either territory changed.
    #[must_use]
    pub fn changed_state(&self) -> bool {
        self.attacker_before != self.attacker_after || self.defender_before != self.defender_after
    }
}

/// Roll the dice and resolve an attack.
pub fn resolve<R: RandomSource + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut R,
) -> CombatOutcome {
    let rolls = DiceRolls::roll(rng);
    resolve_with_rolls(attacker, defender, rolls)
}

/// Resolve an attack with known dice.
pub fn resolve_with_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    rolls: DiceRolls,
) -> CombatOutcome {
    let attacker_before = attacker.clone();
    let defender_before = defender.clone();
    let result = rolls.result();

    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attacker_die = rolls.attacker,
        defender_die = rolls.defender,
        ?result,
        "dice rolled"
    );

    match result {
        BattleResult::AttackerWins => {
            defender.color.clone_from(&attacker.color);
            defender.troops = attacker.troops / 2;
            attacker.troops /= 2;
            info!(
                territory = %defender.name,
                color = %defender.color,
                troops = defender.troops,
                "territory conquered"
            );
        }
        BattleResult::DefenderHolds => {
            attacker.troops = attacker.troops.saturating_sub(1);
        }
        BattleResult::Tie => {}
    }

    CombatOutcome {
        rolls,
        result,
        attacker_before,
        defender_before,
        attacker_after: attacker.clone(),
        defender_after: defender.clone(),
    }
}
