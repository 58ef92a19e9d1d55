//! Cached combat profile of a spell.

use crate::damage::{DamageType, DamageVector};
use crate::effect::{CrowdControl, EffectInstance};

/// Combat stats derived from a spell's runes, written by
/// [`Evaluator::derive_combat`](crate::eval::Evaluator::derive_combat).
///
/// `dot` holds damage per tick; total DoT damage is `dot * dot_duration`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub burst: DamageVector,
    pub dot: DamageVector,
    pub dot_duration: f64,
    pub penetration: f64,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub instant_cc: Vec<CrowdControl>,
    pub effects: Vec<EffectInstance>,
}

impl CombatStats {
    /// Total DoT damage dealt by one damage type over the full duration.
    pub fn dot_total(&self, damage_type: DamageType) -> f64 {
        self.dot.get(damage_type) * self.dot_duration.max(0.0)
    }

    /// Burst plus full-duration DoT for one damage type.
    pub fn damage_of(&self, damage_type: DamageType) -> f64 {
        self.burst.get(damage_type) + self.dot_total(damage_type)
    }

    /// Burst plus full-duration DoT over all damage types.
    pub fn total_damage(&self) -> f64 {
        self.burst.total() + self.dot.total() * self.dot_duration.max(0.0)
    }
}
