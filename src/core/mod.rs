//! Core game types: players, RNG, configuration, state, errors.
//!
//! Everything else in the crate builds on these. `GameState` is the one
//! owner of a session's mutable data.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{
    GameConfig, DEFAULT_VICTORY_TROOPS, FIXED_REGISTRATION_SIZE, MAX_COLOR_LEN, MAX_NAME_LEN,
};
pub use error::{GameError, WarResult};
pub use player::{PlayerId, PlayerMap};
pub use rng::{time_seed, FixedRolls, GameRng, GameRngState, RandomSource, DIE_FACES};
pub use state::GameState;
