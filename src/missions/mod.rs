//! Secret missions.
//!
//! Each player draws one objective from a fixed catalog, independently and
//! with repetition. Whether a mission is accomplished is decided by a
//! `MissionEvaluator`; the default `TroopThreshold` rule ignores the mission
//! text and only looks for any territory above a troop count.

mod catalog;
mod evaluator;

pub use catalog::{assign, Mission, MissionCatalog, DEFAULT_MISSIONS};
pub use evaluator::{MissionEvaluator, TroopThreshold};
