//! Game state: the single owner of everything a session mutates.
//!
//! ## GameState
//!
//! - Configuration
//! - Territory registry
//! - One mission per player (campaign games only)
//! - The process-lifetime random source
//! - Turn counter
//!
//! Dropping the state releases all of it, whichever way the session ended.

use tracing::{info, warn};

use super::config::GameConfig;
use super::error::{GameError, WarResult};
use super::player::{PlayerId, PlayerMap};
use super::rng::{GameRng, RandomSource};
use crate::combat::{self, CombatOutcome};
use crate::missions::{self, Mission, MissionCatalog, MissionEvaluator};
use crate::territory::{Registry, TerritoryId};

/// Complete game state.
///
/// Generic over the random source so tests can script dice with
/// `FixedRolls`; real games use the default `GameRng`.
#[derive(Clone, Debug)]
pub struct GameState<R = GameRng> {
    config: GameConfig,

    /// All territories, in registration order.
    pub registry: Registry,

    missions: Option<PlayerMap<Mission>>,

    rng: R,

    /// Turn number (starts at 1).
    pub turn_number: u32,
}

impl<R: RandomSource> GameState<R> {
    /// Create a new state around an already-built registry.
    #[must_use]
    pub fn new(config: GameConfig, registry: Registry, rng: R) -> Self {
        Self {
            config,
            registry,
            missions: None,
            rng,
            turn_number: 1,
        }
    }

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Mutable access to the random source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    // === Missions ===

    /// Draw one mission per player from `catalog`, replacing any held before.
    pub fn assign_missions(&mut self, catalog: &MissionCatalog) -> &PlayerMap<Mission> {
        let rng = &mut self.rng;
        let assigned = PlayerMap::new(self.config.player_count, |player| {
            let mission = missions::assign(catalog, rng);
            info!(player = player.number(), mission = %mission, "mission assigned");
            mission
        });
        self.missions.insert(assigned)
    }

    /// Missions held by each player, if they have been assigned.
    #[must_use]
    pub fn missions(&self) -> Option<&PlayerMap<Mission>> {
        self.missions.as_ref()
    }

    /// Mission held by one player.
    #[must_use]
    pub fn mission(&self, player: PlayerId) -> Option<&Mission> {
        self.missions.as_ref()?.get(player)
    }

    /// First player, in player order, whose mission is accomplished.
    ///
    /// Player 1 is checked first and wins if several are satisfied at once.
    /// Returns `None` when no missions have been assigned.
    pub fn check_victory<E>(&self, evaluator: &E) -> Option<(PlayerId, &Mission)>
    where
        E: MissionEvaluator + ?Sized,
    {
        self.missions
            .as_ref()?
            .iter()
            .find(|(_, mission)| evaluator.is_satisfied(mission, &self.registry))
    }

    // === Combat ===

    /// Attack `defender` from `attacker`, rolling the dice from the state's source.
    ///
    /// # Errors
    ///
    /// Returns `GameError::SameFaction` without rolling if both territories
    /// share a color (including attacking a territory with itself), and
    /// `GameError::TerritoryOutOfRange` for an id this registry never issued.
    pub fn attack(
        &mut self,
        attacker: TerritoryId,
        defender: TerritoryId,
    ) -> WarResult<CombatOutcome> {
        let len = self.registry.len();
        let out_of_range = |id: TerritoryId| GameError::TerritoryOutOfRange {
            ordinal: id.number(),
            len,
        };

        let attacker_color = self
            .registry
            .get(attacker)
            .ok_or_else(|| out_of_range(attacker))?
            .color
            .clone();
        let defender_color = &self
            .registry
            .get(defender)
            .ok_or_else(|| out_of_range(defender))?
            .color;

        if attacker_color == *defender_color {
            warn!(
                attacker = attacker.number(),
                defender = defender.number(),
                color = %attacker_color,
                "attack on own faction rejected"
            );
            return Err(GameError::SameFaction {
                color: attacker_color,
            });
        }

        let (from, to) = self
            .registry
            .pair_mut(attacker, defender)
            .ok_or_else(|| out_of_range(defender))?;

        Ok(combat::resolve(from, to, &mut self.rng))
    }

    // === Turns ===

    /// Faction announced for the current turn.
    #[must_use]
    pub fn active_color(&self) -> Option<&str> {
        self.config.turn_color(self.turn_number)
    }

    /// Advance to the next turn.
    pub fn advance_turn(&mut self) {
        self.turn_number += 1;
    }
}

impl GameState<GameRng> {
    /// Create a state with a seeded `GameRng`.
    #[must_use]
    pub fn seeded(config: GameConfig, registry: Registry, seed: u64) -> Self {
        Self::new(config, registry, GameRng::new(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::BattleResult;
    use crate::core::FixedRolls;
    use crate::missions::{TroopThreshold, DEFAULT_MISSIONS};
    use crate::territory::Territory;

    fn scenario(rolls: FixedRolls) -> GameState<FixedRolls> {
        let registry = Registry::new(vec![
            Territory::new("Norte", "Vermelho", 10),
            Territory::new("Sul", "Azul", 4),
            Territory::new("Leste", "Azul", 2),
        ])
        .unwrap();
        GameState::new(GameConfig::new(), registry, rolls)
    }

    fn ids(state: &GameState<FixedRolls>, a: usize, b: usize) -> (TerritoryId, TerritoryId) {
        (
            state.registry.id_from_number(a).unwrap(),
            state.registry.id_from_number(b).unwrap(),
        )
    }

    #[test]
    fn test_attack_conquers() {
        let mut state = scenario(FixedRolls::dice([6, 1]));
        let (a, b) = ids(&state, 1, 2);

        let outcome = state.attack(a, b).unwrap();
        assert_eq!(outcome.result, BattleResult::AttackerWins);
        assert_eq!(state.registry[b].color, "Vermelho");
        assert_eq!(state.registry[b].troops, 5);
        assert_eq!(state.registry[a].troops, 5);
    }

    #[test]
    fn test_same_faction_rejected_without_rolling() {
        let mut state = scenario(FixedRolls::dice([6, 1]));
        let (a, b) = ids(&state, 2, 3);
        let before = state.registry.clone();

        let err = state.attack(a, b).unwrap_err();
        assert_eq!(
            err,
            GameError::SameFaction {
                color: "Azul".to_string()
            }
        );
        assert_eq!(state.registry, before);
        assert_eq!(state.rng_mut().remaining_dice(), 2);
    }

    #[test]
    fn test_self_attack_is_same_faction() {
        let mut state = scenario(FixedRolls::new());
        let (a, _) = ids(&state, 1, 1);
        assert!(matches!(state.attack(a, a), Err(GameError::SameFaction { .. })));
    }

    #[test]
    fn test_missions_assigned_per_player() {
        let mut state = scenario(FixedRolls::new().with_picks([1, 4]));
        assert!(state.missions().is_none());

        state.assign_missions(&MissionCatalog::standard());

        assert_eq!(state.mission(PlayerId::new(0)).unwrap().text, DEFAULT_MISSIONS[1]);
        assert_eq!(state.mission(PlayerId::new(1)).unwrap().text, DEFAULT_MISSIONS[4]);
        assert!(state.mission(PlayerId::new(2)).is_none());
    }

    #[test]
    fn test_victory_checks_player_one_first() {
        let mut state = scenario(FixedRolls::new().with_picks([0, 2]));
        let rule = TroopThreshold::default();

        assert!(state.check_victory(&rule).is_none());

        state.assign_missions(&MissionCatalog::standard());
        assert!(state.check_victory(&rule).is_none());

        let (a, _) = ids(&state, 1, 1);
        state.registry.get_mut(a).unwrap().troops = 20;

        let (winner, mission) = state.check_victory(&rule).unwrap();
        assert_eq!(winner, PlayerId::new(0));
        assert_eq!(mission.text, DEFAULT_MISSIONS[0]);
    }

    #[test]
    fn test_turn_colors_follow_counter() {
        let mut state = scenario(FixedRolls::new());
        assert_eq!(state.active_color(), Some("Red"));
        state.advance_turn();
        assert_eq!(state.turn_number, 2);
        assert_eq!(state.active_color(), Some("Blue"));
    }
}
