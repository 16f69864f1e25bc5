//! Mission evaluation.
//!
//! `MissionEvaluator` is the extension point for per-mission rules. The only
//! rule shipped is `TroopThreshold`, which treats every mission alike: it is
//! accomplished as soon as any territory, of any faction, holds more troops
//! than the threshold.

use crate::core::DEFAULT_VICTORY_TROOPS;
use crate::territory::Registry;

use super::Mission;

/// Decides whether a mission is currently accomplished.
pub trait MissionEvaluator {
    /// Check `mission` against the current registry.
    fn is_satisfied(&self, mission: &Mission, registry: &Registry) -> bool;
}

/// Any territory with strictly more than `threshold` troops satisfies any mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TroopThreshold {
    /// Troop count that must be exceeded.
    pub threshold: u32,
}

impl TroopThreshold {
    /// Create the rule with a custom threshold.
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self { threshold }
    }
}

impl Default for TroopThreshold {
    fn default() -> Self {
        Self::new(DEFAULT_VICTORY_TROOPS)
    }
}

impl MissionEvaluator for TroopThreshold {
    fn is_satisfied(&self, _mission: &Mission, registry: &Registry) -> bool {
        registry.iter().any(|t| t.troops > self.threshold)
    }
}

impl<F> MissionEvaluator for F
where
    F: Fn(&Mission, &Registry) -> bool,
{
    fn is_satisfied(&self, mission: &Mission, registry: &Registry) -> bool {
        self(mission, registry)
    }
}
