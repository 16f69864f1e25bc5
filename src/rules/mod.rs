//! Game outcomes and the turn state machine.
//!
//! - `GameResult`: how a session ended (a mission accomplished, or the
//!   players stopped)
//! - `TurnPhase`: the states a turn moves through, from territory selection
//!   to the continue prompt

pub mod engine;

pub use engine::{GameResult, TurnPhase};
