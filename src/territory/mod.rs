//! Territories and the registry that holds them.
//!
//! - `Territory`: name, owning faction color, troop count
//! - `TerritoryId`: checked index into a registry
//! - `Registry`: the fixed-size, ordered set of territories for one session

mod definition;
mod registry;

pub use definition::{Territory, TerritoryId};
pub use registry::Registry;
