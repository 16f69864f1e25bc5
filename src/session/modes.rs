//! The three ways to play.
//!
//! - `Register`: fill a fixed-size form and print it back
//! - `Skirmish`: register any number of territories and attack until the
//!   players stop
//! - `Campaign`: skirmish plus secret missions, a turn banner and victory
//!   checks after every attack

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::info;

use super::display::{write_listing, write_map, write_missions};
use super::registration::{read_registry, register_territories};
use super::{Prompter, SessionError, TurnLoop};
use crate::core::{GameConfig, GameState, PlayerMap, RandomSource};
use crate::missions::{Mission, MissionCatalog, TroopThreshold};
use crate::rules::GameResult;
use crate::territory::Registry;

/// Which game to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Fixed-size registration only.
    Register,
    /// Attack loop without missions.
    Skirmish,
    /// Attack loop with missions and victory checks.
    #[default]
    Campaign,
}

/// Everything a session needs besides its console and random source.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Game to run.
    pub mode: GameMode,
    /// Tunables.
    pub config: GameConfig,
    /// Objectives missions are drawn from.
    pub catalog: MissionCatalog,
}

/// What a finished session leaves behind.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// Game that was played.
    pub mode: GameMode,
    /// Seed reported for the run (0 when the source was scripted).
    pub seed: u64,
    /// Last turn number reached.
    pub turns: u32,
    /// How the game ended; `None` for registration only.
    pub result: Option<GameResult>,
    /// Final territories.
    pub territories: Registry,
    /// Missions, for campaign games.
    pub missions: Option<PlayerMap<Mission>>,
}

/// Run one session of `options.mode` to completion.
///
/// The registry, missions and random source all live in a `GameState` owned
/// by this call and are released when it returns, on every path.
///
/// # Errors
///
/// Returns `SessionError` for allocation failure, closed input or console I/O
/// failure.
pub fn run_session<R, I, W>(
    options: &SessionOptions,
    rng: R,
    seed: u64,
    io: &mut Prompter<I, W>,
) -> Result<SessionReport, SessionError>
where
    R: RandomSource,
    I: BufRead,
    W: Write,
{
    info!(mode = ?options.mode, seed, "session started");
    let config = &options.config;

    match options.mode {
        GameMode::Register => {
            writeln!(io.output(), "=== TERRITORY REGISTRATION ===\n")?;
            let registry = register_territories(io, config.fixed_registration_size, config)?;
            writeln!(io.output(), "\n=== REGISTERED TERRITORIES ===")?;
            write_listing(io.output(), &registry)?;
            writeln!(io.output(), "\nRegistration complete!")?;

            Ok(SessionReport {
                mode: options.mode,
                seed,
                turns: 0,
                result: None,
                territories: registry,
                missions: None,
            })
        }

        GameMode::Skirmish => {
            writeln!(io.output(), "=== TERRITORY WAR ===\n")?;
            let registry = read_registry(io, config)?;
            writeln!(io.output(), "\n=== REGISTERED TERRITORIES ===")?;
            write_listing(io.output(), &registry)?;

            let mut state = GameState::new(config.clone(), registry, rng);
            let result = TurnLoop::without_missions().run(&mut state, io)?;

            writeln!(io.output(), "\n=== FINAL STATE ===")?;
            write_listing(io.output(), &state.registry)?;

            Ok(SessionReport {
                mode: options.mode,
                seed,
                turns: state.turn_number,
                result: Some(result),
                territories: state.registry,
                missions: None,
            })
        }

        GameMode::Campaign => {
            writeln!(io.output(), "=== TERRITORY WAR: CAMPAIGN ===\n")?;
            let registry = read_registry(io, config)?;

            let mut state = GameState::new(config.clone(), registry, rng);
            let missions = state.assign_missions(&options.catalog).clone();
            write_missions(io.output(), &missions)?;

            writeln!(io.output(), "\n=== INITIAL MAP ===")?;
            write_map(io.output(), &state.registry)?;

            let rule = TroopThreshold::new(config.victory_troops);
            let result = TurnLoop::with_missions(&rule).run(&mut state, io)?;

            Ok(SessionReport {
                mode: options.mode,
                seed,
                turns: state.turn_number,
                result: Some(result),
                territories: state.registry,
                missions: Some(missions),
            })
        }
    }
}
