//! Progression service: elemental XP/affinity and rune familiarity.
//!
//! Only a confirmed cast advances progression; evaluating or previewing a
//! spell never does. All writes go through `&mut` access to the actor, so
//! updates for one actor are serialized by whoever owns it.

use std::collections::BTreeMap;

use crate::actor::{Caster, clamp_unit};
use crate::config::ProgressionConfig;
use crate::damage::DamageType;
use crate::rune::RuneSymbol;
use crate::spell::Spell;

/// XP at which affinity reaches one half.
pub const DEFAULT_XP_HALF_POINT: f64 = 100.0;

/// Maps accumulated XP to affinity: `clamp((xp/100) / (1 + xp/100), 0, 1)`.
///
/// Monotonic, asymptotic to 1, and 0.5 at 100 XP.
pub fn xp_to_affinity(xp: f64) -> f64 {
    xp_to_affinity_with(xp, DEFAULT_XP_HALF_POINT)
}

/// [`xp_to_affinity`] with a configurable half point.
pub fn xp_to_affinity_with(xp: f64, half_point: f64) -> f64 {
    if half_point <= 0.0 || xp.is_nan() {
        return 0.0;
    }
    if xp == f64::INFINITY {
        return 1.0;
    }
    let scaled = xp.max(0.0) / half_point;
    clamp_unit(scaled / (1.0 + scaled))
}

/// Records an actual cast of `spell` by `actor`.
///
/// Each damage type earns `xp_per_cast * (burst_focus + dot_weight * dot_focus)`
/// XP, where the focus values are that type's share of the spell's burst and
/// of its full-duration DoT. Affinity is then recomputed from XP for every
/// type, and each rune occurrence nudges its familiarity toward 1.
///
/// Returns the XP granted per damage type.
pub fn record_spell_use(
    actor: &mut (impl Caster + ?Sized),
    spell: &Spell,
    config: &ProgressionConfig,
) -> BTreeMap<DamageType, f64> {
    let combat = &spell.combat;
    let total_burst = combat.burst.total();
    let total_dot: f64 = DamageType::all()
        .into_iter()
        .map(|t| combat.dot_total(t))
        .sum();

    let mut granted = BTreeMap::new();
    for damage_type in DamageType::all() {
        let burst_focus = if total_burst > 0.0 {
            combat.burst.get(damage_type) / total_burst
        } else {
            0.0
        };
        let dot_focus = if total_dot > 0.0 {
            combat.dot_total(damage_type) / total_dot * config.dot_weight
        } else {
            0.0
        };

        let xp = config.xp_per_cast * (burst_focus + dot_focus);
        if xp > 0.0 {
            granted.insert(damage_type, xp);
        }
    }

    let progression = actor.progression_mut();
    for (damage_type, xp) in &granted {
        progression.add_damage_xp(*damage_type, *xp);
    }

    let affinity: BTreeMap<DamageType, f64> = progression
        .damage_xp_entries()
        .map(|(t, xp)| (t, xp_to_affinity_with(xp, config.xp_half_point)))
        .collect();
    progression.replace_damage_affinity(affinity);

    let gain = clamp_unit(config.rune_familiarity_gain);
    for symbol in spell.runes() {
        let current = progression.rune_familiarity(*symbol);
        progression.set_rune_familiarity(*symbol, current + gain * (1.0 - current));
    }

    tracing::debug!(
        actor = %actor.id(),
        spell = %spell.id,
        types = granted.len(),
        "recorded spell use"
    );

    granted
}

/// Familiarity with a single rune, 0 when absent.
pub fn rune_familiarity(actor: &(impl Caster + ?Sized), symbol: RuneSymbol) -> f64 {
    actor.progression().rune_familiarity(symbol)
}

/// `Σ profile[r] * familiarity(r)` over every position of the rune sequence,
/// so repeated runes count once per occurrence.
pub fn spell_familiarity_score(actor: &(impl Caster + ?Sized), spell: &Spell) -> f64 {
    spell
        .runes()
        .iter()
        .map(|symbol| spell.frequency(*symbol) * rune_familiarity(actor, *symbol))
        .sum()
}
