//! Console sessions.
//!
//! The game model knows nothing about consoles. This module wires it to a
//! line source and an output sink:
//! - `input`: prompting and typed, re-prompting reads
//! - `display`: rendering territories, combat and results
//! - `registration`: building the registry from answers
//! - `turn`: the attack loop state machine
//! - `modes`: the three ways to play, start to finish

pub mod display;
pub mod input;
pub mod modes;
pub mod registration;
pub mod turn;

pub use display::{write_summary, SummaryFormat};
pub use input::{parse_integer, parse_troops, InputError, Prompter};
pub use modes::{run_session, GameMode, SessionOptions, SessionReport};
pub use registration::{read_registry, register_territories};
pub use turn::TurnLoop;

use thiserror::Error;

use crate::core::GameError;

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before the session finished.
    #[error("input ended before the game finished")]
    InputClosed,

    /// The game model refused to continue.
    #[error(transparent)]
    Game(#[from] GameError),

    /// The summary could not be encoded.
    #[error("could not encode the summary: {0}")]
    Summary(#[from] serde_json::Error),
}
