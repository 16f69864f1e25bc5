//! The attack loop.
//!
//! `TurnLoop` walks a `GameState` through the `TurnPhase` machine until a
//! mission is accomplished or the players stop. Selection re-prompts forever
//! on bad numbers; a same-faction pick skips combat and goes straight back to
//! selection, still counting as a turn.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use super::display::{write_map, write_outcome, write_victory};
use super::{Prompter, SessionError};
use crate::core::{GameState, RandomSource};
use crate::missions::MissionEvaluator;
use crate::rules::{GameResult, TurnPhase};

/// Drives turns for one session.
///
/// With an evaluator, missions are checked after every attack and the map is
/// shown each turn. Without one, only the players can end the war.
pub struct TurnLoop<'a, E: ?Sized> {
    evaluator: Option<&'a E>,
}

impl TurnLoop<'static, dyn MissionEvaluator> {
    /// A loop that never checks missions (skirmish play).
    #[must_use]
    pub fn without_missions() -> Self {
        Self { evaluator: None }
    }
}

impl<'a, E: MissionEvaluator + ?Sized> TurnLoop<'a, E> {
    /// A loop that checks missions after every attack (campaign play).
    pub fn with_missions(evaluator: &'a E) -> Self {
        Self {
            evaluator: Some(evaluator),
        }
    }

    fn checks_missions(&self) -> bool {
        self.evaluator.is_some()
    }

    /// Run turns until the session ends.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InputClosed` if input ends mid-game, or an I/O
    /// error from the console.
    pub fn run<R, I, W>(
        &self,
        state: &mut GameState<R>,
        io: &mut Prompter<I, W>,
    ) -> Result<GameResult, SessionError>
    where
        R: RandomSource,
        I: BufRead,
        W: Write,
    {
        let mut phase = TurnPhase::AwaitingSelection;

        loop {
            debug!(phase = phase.name(), turn = state.turn_number, "turn phase");
            phase = match phase {
                TurnPhase::AwaitingSelection => {
                    self.write_banner(state, io)?;
                    let attacker = io.read_territory(&state.registry, "attacker")?;
                    let defender = io.read_territory(&state.registry, "defender")?;
                    TurnPhase::ValidatingOwnership { attacker, defender }
                }

                TurnPhase::ValidatingOwnership { attacker, defender } => {
                    if state.registry[attacker].same_faction(&state.registry[defender]) {
                        writeln!(
                            io.output(),
                            "\nYou cannot attack a territory of your own army!"
                        )?;
                        state.advance_turn();
                        TurnPhase::AwaitingSelection
                    } else {
                        TurnPhase::Resolving { attacker, defender }
                    }
                }

                TurnPhase::Resolving { attacker, defender } => {
                    let outcome = state.attack(attacker, defender)?;
                    write_outcome(io.output(), &outcome)?;
                    if self.checks_missions() {
                        writeln!(io.output(), "\n--- MAP AFTER THE TURN ---")?;
                        write_map(io.output(), &state.registry)?;
                    }
                    TurnPhase::CheckingVictory
                }

                TurnPhase::CheckingVictory => {
                    let winner = self.evaluator.and_then(|evaluator| {
                        state
                            .check_victory(evaluator)
                            .map(|(player, mission)| (player, mission.clone()))
                    });

                    match winner {
                        Some((player, mission)) => {
                            write_victory(io.output(), player, &mission)?;
                            info!(
                                player = player.number(),
                                turn = state.turn_number,
                                "mission accomplished"
                            );
                            TurnPhase::Ended(GameResult::Victory { player, mission })
                        }
                        None => TurnPhase::AwaitingContinue,
                    }
                }

                TurnPhase::AwaitingContinue => {
                    let answer = io.read_answer("\nContinue the war? (s/n): ")?;
                    let keep_going = state.config().is_affirmative(&answer);
                    state.advance_turn();
                    if keep_going {
                        TurnPhase::AwaitingSelection
                    } else {
                        info!(turn = state.turn_number, "war called off");
                        TurnPhase::Ended(GameResult::Stopped)
                    }
                }

                TurnPhase::Ended(result) => return Ok(result),
            };
        }
    }

    fn write_banner<R, I, W>(
        &self,
        state: &GameState<R>,
        io: &mut Prompter<I, W>,
    ) -> Result<(), SessionError>
    where
        R: RandomSource,
        I: BufRead,
        W: Write,
    {
        if self.checks_missions() {
            writeln!(io.output(), "\n=== TURN {} ===", state.turn_number)?;
            if let Some(color) = state.active_color() {
                writeln!(io.output(), "Player to move: {color}")?;
            }
        } else {
            writeln!(io.output(), "\n=== ATTACK PHASE ===")?;
        }
        Ok(())
    }
}
