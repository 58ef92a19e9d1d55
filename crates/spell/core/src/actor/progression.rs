//! Per-actor progression state: rune familiarity and elemental XP/affinity.

use std::collections::BTreeMap;

use crate::damage::DamageType;
use crate::rune::RuneSymbol;

/// Sparse progression maps owned by an actor.
///
/// Values are stored as supplied by the owner (persistence may hand back
/// anything); readers always clamp to the documented ranges and treat
/// missing entries as zero.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    #[cfg_attr(feature = "serde", serde(default))]
    rune_familiarity: BTreeMap<RuneSymbol, f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    damage_xp: BTreeMap<DamageType, f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    damage_affinity: BTreeMap<DamageType, f64>,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Familiarity with a rune in `[0, 1]`; also the rune affinity the
    /// evaluator amplifies with.
    pub fn rune_familiarity(&self, symbol: RuneSymbol) -> f64 {
        clamp_unit(self.rune_familiarity.get(&symbol).copied().unwrap_or(0.0))
    }

    pub fn set_rune_familiarity(&mut self, symbol: RuneSymbol, value: f64) {
        self.rune_familiarity.insert(symbol, value);
    }

    #[must_use]
    pub fn with_rune_familiarity(mut self, symbol: RuneSymbol, value: f64) -> Self {
        self.set_rune_familiarity(symbol, value);
        self
    }

    /// Iterates over recorded familiarity entries (raw values).
    pub fn rune_familiarity_entries(&self) -> impl Iterator<Item = (RuneSymbol, f64)> + '_ {
        self.rune_familiarity.iter().map(|(s, v)| (*s, *v))
    }

    /// Accumulated XP for a damage type, never negative.
    pub fn damage_xp(&self, damage_type: DamageType) -> f64 {
        self.damage_xp
            .get(&damage_type)
            .copied()
            .unwrap_or(0.0)
            .max(0.0)
    }

    pub fn add_damage_xp(&mut self, damage_type: DamageType, amount: f64) {
        let entry = self.damage_xp.entry(damage_type).or_insert(0.0);
        *entry = (*entry + amount).max(0.0);
    }

    pub fn damage_xp_entries(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        self.damage_xp.iter().map(|(t, v)| (*t, *v))
    }

    /// Derived elemental affinity in `[0, 1]`.
    pub fn damage_affinity(&self, damage_type: DamageType) -> f64 {
        clamp_unit(
            self.damage_affinity
                .get(&damage_type)
                .copied()
                .unwrap_or(0.0),
        )
    }

    pub fn damage_affinity_entries(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        self.damage_affinity.iter().map(|(t, v)| (*t, *v))
    }

    /// Replaces the derived affinity map wholesale.
    pub(crate) fn replace_damage_affinity(&mut self, affinity: BTreeMap<DamageType, f64>) {
        self.damage_affinity = affinity;
    }
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_entries_read_as_zero() {
        let progression = Progression::new();
        assert_eq!(progression.rune_familiarity(RuneSymbol::F), 0.0);
        assert_eq!(progression.damage_xp(DamageType::Fire), 0.0);
        assert_eq!(progression.damage_affinity(DamageType::Fire), 0.0);
    }

    #[test]
    fn readers_clamp_adversarial_values() {
        let progression = Progression::new()
            .with_rune_familiarity(RuneSymbol::F, 7.0)
            .with_rune_familiarity(RuneSymbol::W, -3.0)
            .with_rune_familiarity(RuneSymbol::N, f64::NAN);
        assert_eq!(progression.rune_familiarity(RuneSymbol::F), 1.0);
        assert_eq!(progression.rune_familiarity(RuneSymbol::W), 0.0);
        assert_eq!(progression.rune_familiarity(RuneSymbol::N), 0.0);
    }

    #[test]
    fn xp_never_drops_below_zero() {
        let mut progression = Progression::new();
        progression.add_damage_xp(DamageType::Ice, 5.0);
        progression.add_damage_xp(DamageType::Ice, -20.0);
        assert_eq!(progression.damage_xp(DamageType::Ice), 0.0);
    }
}
