//! Static rune data.

use std::collections::BTreeMap;

use crate::damage::DamageType;
use crate::effect::{CrowdControl, EffectBlueprint};

use super::RuneSymbol;

/// Category tags a rune can carry.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RuneTag {
    Elemental,
    Kinetic,
    Arcane,
    Support,
    Control,
    /// Each occurrence adds armor penetration.
    Piercing,
    /// Each occurrence raises the critical multiplier.
    Precision,
    Volatile,
    Binding,
    Ward,
}

/// Bonus effect unlocked when an infusion on this rune reaches `threshold`
/// extra mana.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Overcharge {
    pub threshold: f64,
    pub effect: EffectBlueprint,
}

/// Immutable definition of a single rune.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuneDefinition {
    pub symbol: RuneSymbol,
    pub name: String,
    pub power_factor: f64,
    pub control_factor: f64,
    /// Base instability in `[0, 1]`.
    pub instability_base: f64,
    pub mana_cost: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<RuneTag>,
    /// Damage multiplier per type.
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage: BTreeMap<DamageType, f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub crowd_control: Vec<CrowdControl>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<EffectBlueprint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overcharge: Vec<Overcharge>,
    /// Share of this rune's damage dealt over time, in `[0, 1]`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub dot_affinity: Option<f64>,
}

impl RuneDefinition {
    /// Creates a definition with no tags, damage or effects.
    pub fn new(
        symbol: RuneSymbol,
        name: impl Into<String>,
        power_factor: f64,
        control_factor: f64,
        instability_base: f64,
        mana_cost: f64,
    ) -> Self {
        Self {
            symbol,
            name: name.into(),
            power_factor,
            control_factor,
            instability_base,
            mana_cost,
            tags: Vec::new(),
            damage: BTreeMap::new(),
            crowd_control: Vec::new(),
            effects: Vec::new(),
            overcharge: Vec::new(),
            dot_affinity: None,
        }
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = RuneTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    #[must_use]
    pub fn with_damage(mut self, damage_type: DamageType, multiplier: f64) -> Self {
        self.damage.insert(damage_type, multiplier);
        self
    }

    #[must_use]
    pub fn with_crowd_control(mut self, cc: CrowdControl) -> Self {
        self.crowd_control.push(cc);
        self
    }

    #[must_use]
    pub fn with_effect(mut self, effect: EffectBlueprint) -> Self {
        self.effects.push(effect);
        self
    }

    #[must_use]
    pub fn with_overcharge(mut self, threshold: f64, effect: EffectBlueprint) -> Self {
        self.overcharge.push(Overcharge { threshold, effect });
        self
    }

    #[must_use]
    pub fn with_dot_affinity(mut self, affinity: f64) -> Self {
        self.dot_affinity = Some(affinity);
        self
    }

    pub fn has_tag(&self, tag: RuneTag) -> bool {
        self.tags.contains(&tag)
    }

    /// DoT share clamped to `[0, 1]`, zero when the rune has none.
    pub fn dot_share(&self) -> f64 {
        self.dot_affinity.unwrap_or(0.0).clamp(0.0, 1.0)
    }

    /// Checks value ranges. Returns the first violated constraint.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        let finite = [
            self.power_factor,
            self.control_factor,
            self.instability_base,
            self.mana_cost,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err("factors must be finite");
        }
        if self.power_factor < 0.0 || self.control_factor < 0.0 {
            return Err("power and control factors must be non-negative");
        }
        if !(0.0..=1.0).contains(&self.instability_base) {
            return Err("instability base must be within [0, 1]");
        }
        if self.mana_cost < 0.0 {
            return Err("mana cost must be non-negative");
        }
        if self.damage.values().any(|m| !m.is_finite() || *m < 0.0) {
            return Err("damage multipliers must be non-negative");
        }
        if self
            .dot_affinity
            .is_some_and(|dot| !(0.0..=1.0).contains(&dot))
        {
            return Err("dot affinity must be within [0, 1]");
        }
        if self.overcharge.iter().any(|o| o.threshold < 0.0) {
            return Err("overcharge thresholds must be non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::EffectKind;

    #[test]
    fn builder_accumulates_data() {
        let rune = RuneDefinition::new(RuneSymbol::F, "Fire", 1.2, 0.4, 0.1, 7.0)
            .with_tags([RuneTag::Elemental, RuneTag::Volatile])
            .with_damage(DamageType::Fire, 1.0)
            .with_effect(EffectBlueprint::new(EffectKind::Burn, 2.0, 3.0))
            .with_dot_affinity(0.4);

        assert!(rune.has_tag(RuneTag::Volatile));
        assert!(!rune.has_tag(RuneTag::Ward));
        assert_eq!(rune.damage.get(&DamageType::Fire), Some(&1.0));
        assert_eq!(rune.dot_share(), 0.4);
        assert!(rune.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let unstable = RuneDefinition::new(RuneSymbol::V, "Void", 1.0, 0.2, 1.5, 4.0);
        assert!(unstable.validate().is_err());

        let negative_cost = RuneDefinition::new(RuneSymbol::V, "Void", 1.0, 0.2, 0.5, -1.0);
        assert!(negative_cost.validate().is_err());

        let bad_dot =
            RuneDefinition::new(RuneSymbol::V, "Void", 1.0, 0.2, 0.5, 1.0).with_dot_affinity(2.0);
        assert!(bad_dot.validate().is_err());
    }
}
