//! # territory-war
//!
//! A console territory-conquest game: players register territories, attack
//! each other with one die per side and race to accomplish a secret mission.
//!
//! ## Design Principles
//!
//! 1. **Model apart from console**: `core`, `territory`, `combat`,
//!    `missions` and `rules` never touch stdin or stdout. `session` wires
//!    them to any `BufRead`/`Write` pair.
//!
//! 2. **Replaceable randomness**: every roll and draw goes through
//!    `RandomSource`. Sessions use a seeded `GameRng`; tests script exact
//!    dice with `FixedRolls`.
//!
//! 3. **One owner**: `GameState` owns the registry, the missions and the
//!    random source for the whole session.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, state, errors
//! - `territory`: territories and the registry
//! - `combat`: dice combat resolution
//! - `missions`: mission catalog, assignment and evaluation
//! - `rules`: game results and the turn state machine
//! - `session`: console input, rendering and the three game modes

pub mod combat;
pub mod core;
pub mod missions;
pub mod rules;
pub mod session;
pub mod territory;

// Re-export commonly used types
pub use crate::core::{
    FixedRolls, GameConfig, GameError, GameRng, GameState, PlayerId, PlayerMap, RandomSource,
    WarResult,
};

pub use crate::territory::{Registry, Territory, TerritoryId};

pub use crate::combat::{resolve, BattleResult, CombatOutcome, DiceRolls};

pub use crate::missions::{assign, Mission, MissionCatalog, MissionEvaluator, TroopThreshold};

pub use crate::rules::{GameResult, TurnPhase};

pub use crate::session::{
    run_session, write_summary, GameMode, Prompter, SessionError, SessionOptions, SessionReport,
    SummaryFormat,
};
