//! Combat stat derivation.
//!
//! ```text
//! amount   = power_factor * (1 + power_scale * affinity) * damage_scale
//! portion  = amount * damage_multiplier[type]
//! dot pool = portion * dot_share,  burst = portion * (1 - dot_share)
//! duration = dot_base_duration + dot_duration_step * (dot runes - 1)
//! dot/tick = dot pool / duration
//! ```

use crate::actor::{Caster, clamp_unit};
use crate::config::SpellConfig;
use crate::damage::DamageVector;
use crate::rune::{RuneCatalog, RuneTag};
use crate::spell::{CombatStats, Spell};

pub(crate) fn derive_combat(
    catalog: &RuneCatalog,
    config: &SpellConfig,
    spell: &Spell,
    actor: &(impl Caster + ?Sized),
    control: f64,
) -> CombatStats {
    let combat_cfg = &config.combat;

    let mut burst = DamageVector::zero();
    let mut dot_pool = DamageVector::zero();
    let mut dot_runes = 0usize;
    let mut piercing = 0usize;
    let mut precision = 0usize;
    let mut instant_cc = Vec::new();
    let mut effects = Vec::new();

    for (index, symbol) in spell.runes().iter().enumerate() {
        let rune = catalog.get(*symbol);
        let affinity = clamp_unit(actor.rune_affinity(*symbol));
        let power_amp = 1.0 + config.affinity.power_scale * affinity;
        let amount = rune.power_factor * power_amp * combat_cfg.damage_scale;
        let dot_share = rune.dot_share();

        if dot_share > 0.0 && !rune.damage.is_empty() {
            dot_runes += 1;
        }
        for (damage_type, multiplier) in &rune.damage {
            let portion = amount * multiplier;
            burst.add(*damage_type, portion * (1.0 - dot_share));
            dot_pool.add(*damage_type, portion * dot_share);
        }

        if rune.has_tag(RuneTag::Piercing) {
            piercing += 1;
        }
        if rune.has_tag(RuneTag::Precision) {
            precision += 1;
        }

        for cc in &rune.crowd_control {
            if !instant_cc.contains(cc) {
                instant_cc.push(*cc);
            }
        }

        effects.extend(rune.effects.iter().map(|e| e.resolve(power_amp)));

        let infused = spell.infused_mana(index);
        if infused > 0.0 {
            effects.extend(
                rune.overcharge
                    .iter()
                    .filter(|o| infused >= o.threshold)
                    .map(|o| o.effect.resolve(power_amp)),
            );
        }
    }

    let (dot, dot_duration) = if dot_runes > 0 && combat_cfg.dot_base_duration > 0.0 {
        let duration = combat_cfg.dot_base_duration
            + combat_cfg.dot_duration_step.max(0.0) * (dot_runes - 1) as f64;
        (dot_pool.scaled(1.0 / duration), duration)
    } else {
        // Without a usable duration the DoT share lands immediately.
        for (damage_type, amount) in dot_pool.iter_nonzero() {
            burst.add(damage_type, amount);
        }
        (DamageVector::zero(), 0.0)
    };

    let crit_chance = (combat_cfg.base_crit_chance + combat_cfg.crit_chance_per_control * control)
        .min(combat_cfg.max_crit_chance)
        .max(0.0);
    let crit_multiplier = (combat_cfg.base_crit_multiplier
        + combat_cfg.crit_multiplier_per_rune * precision as f64)
        .max(1.0);
    let penetration = (combat_cfg.penetration_per_rune * piercing as f64)
        .min(combat_cfg.max_penetration)
        .max(0.0);

    CombatStats {
        burst,
        dot,
        dot_duration,
        penetration,
        crit_chance,
        crit_multiplier,
        instant_cc,
        effects,
    }
}
