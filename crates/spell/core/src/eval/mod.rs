//! Spell evaluation: power, control, instability, cost and combat stats.
//!
//! # Formula
//!
//! For every rune in the sequence, with `a = clamp(affinity[rune], 0, 1)`:
//!
//! ```text
//! power           += power_factor     * (1 + 0.5  * a)
//! control         += control_factor   * (1 + 0.25 * a)
//! instability_sum += instability_base * (1 - 0.35 * a)
//! ```
//!
//! Then:
//!
//! ```text
//! instability = round3(max(0, mean_instability * (1 + formation_penalty)) * stability_growth_mit)
//! power       = round2(power)
//! ```
mod combat;
mod cost;
mod formation;

pub use cost::{base_mana_cost, compute_spell_mana_cost, effective_efficiency};
pub use formation::{clashes, formation_penalty};

use std::collections::BTreeSet;

use crate::actor::{Caster, clamp_unit};
use crate::config::SpellConfig;
use crate::rune::{RuneCatalog, RuneTag};
use crate::spell::{CombatStats, Spell};

/// Snapshot of one evaluation, cached on [`Spell::last_eval`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub power: f64,
    pub control: f64,
    pub cost: f64,
    pub instability: f64,
    /// Always 0: the synergy hook exists but has no rules yet.
    pub synergy: f64,
    pub formation_penalty: f64,
    pub effect_tags: BTreeSet<RuneTag>,
}

/// Evaluates spells against an injected rune catalog and rule set.
#[derive(Clone, Copy, Debug)]
pub struct Evaluator<'a> {
    runes: &'a RuneCatalog,
    config: &'a SpellConfig,
}

struct Accumulated {
    power: f64,
    control: f64,
    instability_sum: f64,
    tags: BTreeSet<RuneTag>,
}

impl<'a> Evaluator<'a> {
    pub fn new(runes: &'a RuneCatalog, config: &'a SpellConfig) -> Self {
        Self { runes, config }
    }

    pub fn catalog(&self) -> &'a RuneCatalog {
        self.runes
    }

    pub fn config(&self) -> &'a SpellConfig {
        self.config
    }

    fn accumulate(&self, spell: &Spell, actor: &(impl Caster + ?Sized)) -> Accumulated {
        let affinity_cfg = &self.config.affinity;
        let mut acc = Accumulated {
            power: 0.0,
            control: 0.0,
            instability_sum: 0.0,
            tags: BTreeSet::new(),
        };

        for symbol in spell.runes() {
            let rune = self.runes.get(*symbol);
            let affinity = clamp_unit(actor.rune_affinity(*symbol));

            let power_amp = 1.0 + affinity_cfg.power_scale * affinity;
            let control_amp = 1.0 + affinity_cfg.control_scale * affinity;
            let instability_mit = (1.0 - affinity_cfg.instability_scale * affinity).max(0.0);

            acc.power += rune.power_factor * power_amp;
            acc.control += rune.control_factor * control_amp;
            acc.instability_sum += rune.instability_base * instability_mit;
            acc.tags.extend(rune.tags.iter().copied());
        }

        acc
    }

    /// `1 - clamp(growth / divisor, 0, cap)`
    fn growth_mitigation(&self, growth: f64) -> f64 {
        let cfg = &self.config.growth;
        if cfg.divisor <= 0.0 || !growth.is_finite() {
            return 1.0;
        }
        1.0 - (growth / cfg.divisor).min(cfg.cap.max(0.0)).max(0.0)
    }

    /// Computes an evaluation without touching the spell.
    pub fn preview(&self, spell: &Spell, actor: &(impl Caster + ?Sized)) -> Evaluation {
        let acc = self.accumulate(spell, actor);
        let rune_count = spell.runes().len().max(1) as f64;

        let penalty = formation_penalty(spell.runes(), &self.config.formation);
        // Control growth is tracked but only stability growth mitigates instability.
        let _control_growth_mit = self.growth_mitigation(spell.growth.control);
        let stability_growth_mit = self.growth_mitigation(spell.growth.stability);

        let mean_instability = acc.instability_sum / rune_count;
        let instability =
            round3((mean_instability * (1.0 + penalty)).max(0.0) * stability_growth_mit);

        let control_bonus = actor.control_bonus().filter(|b| b.is_finite()).unwrap_or(0.0);

        Evaluation {
            power: round2(acc.power.max(0.0)),
            control: (acc.control + control_bonus).max(0.0),
            cost: compute_spell_mana_cost(self.runes, &self.config.cost, actor, spell),
            instability,
            synergy: self.synergy(spell),
            formation_penalty: penalty,
            effect_tags: acc.tags,
        }
    }

    /// Evaluates a spell and caches the result on `last_eval` and `craft_cost`.
    pub fn evaluate(&self, spell: &mut Spell, actor: &(impl Caster + ?Sized)) -> Evaluation {
        let evaluation = self.preview(spell, actor);
        tracing::trace!(
            spell = %spell.id,
            power = evaluation.power,
            instability = evaluation.instability,
            cost = evaluation.cost,
            "spell evaluated"
        );
        spell.craft_cost = Some(evaluation.cost);
        spell.last_eval = Some(evaluation.clone());
        evaluation
    }

    /// Derives combat stats for `actor` and caches them on `spell.combat`.
    ///
    /// Control is recomputed for this actor; the cached `last_eval` may
    /// belong to another caster.
    pub fn derive_combat(&self, spell: &mut Spell, actor: &(impl Caster + ?Sized)) -> CombatStats {
        let control = self.preview(spell, actor).control;
        let combat = combat::derive_combat(self.runes, self.config, spell, actor, control);
        spell.combat = combat.clone();
        combat
    }

    /// Evaluates and derives combat stats in one pass.
    pub fn prepare(&self, spell: &mut Spell, actor: &(impl Caster + ?Sized)) -> Evaluation {
        let evaluation = self.evaluate(spell, actor);
        spell.combat =
            combat::derive_combat(self.runes, self.config, spell, actor, evaluation.control);
        evaluation
    }

    /// Synergy between runes. No synergy rules exist, so this is always 0.
    pub fn synergy(&self, _spell: &Spell) -> f64 {
        0.0
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{ActorId, Creature, Player, Progression};
    use crate::damage::DamageType;
    use crate::effect::{CrowdControl, EffectKind, EffectTarget};
    use crate::fixtures;
    use crate::rune::RuneSymbol::{self, *};
    use crate::spell::{SpellFactory, SpellGrowth};

    fn spell_of(runes: &[RuneSymbol]) -> Spell {
        SpellFactory::new()
            .create_nameless(ActorId(1), runes)
            .unwrap()
    }

    #[test]
    fn worked_scenario() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let player = Player::new(ActorId(1), "Ilse");
        let mut spell = spell_of(&[F, A, R]);

        let eval = evaluator.evaluate(&mut spell, &player);

        assert!((eval.power - 2.90).abs() < 1e-9);
        assert!((eval.formation_penalty - 0.05).abs() < 1e-9);
        assert!((eval.instability - 0.070).abs() < 1e-9);
        assert!((eval.cost - 13.0).abs() < 1e-9);
        assert_eq!(eval.synergy, 0.0);
        assert_eq!(spell.last_eval.as_ref(), Some(&eval));
        assert_eq!(spell.craft_cost, Some(eval.cost));
    }

    #[test]
    fn affinity_amplifies_power_and_mitigates_instability() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let spell = spell_of(&[F]);

        let novice = Creature::new(ActorId(2), "Imp");
        let adept = Creature::new(ActorId(3), "Archmage")
            .with_progression(Progression::new().with_rune_familiarity(F, 1.0));

        let base = evaluator.preview(&spell, &novice);
        let amplified = evaluator.preview(&spell, &adept);

        // 1.2 * 1.5 = 1.8
        assert!((amplified.power - 1.8).abs() < 1e-9);
        assert!(amplified.instability < base.instability);
        assert!(amplified.control > base.control);
    }

    #[test]
    fn adversarial_affinity_is_clamped() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let spell = spell_of(&[F, W, F]);

        let wild = Player::new(ActorId(4), "Wild")
            .with_progression(
                Progression::new()
                    .with_rune_familiarity(F, 50.0)
                    .with_rune_familiarity(W, -50.0),
            )
            .with_cost_efficiency(9.0);
        let eval = evaluator.preview(&spell, &wild);

        assert!(eval.instability >= 0.0);
        assert!(eval.cost >= 0.0);
        // efficiency clamped to 0.3
        let base = base_mana_cost(&catalog, &spell);
        assert!((eval.cost - base * 0.7).abs() < 1e-9);
    }

    #[test]
    fn stability_growth_mitigates_but_control_growth_does_not() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let player = Player::new(ActorId(1), "Ilse");

        let plain = evaluator.preview(&spell_of(&[F, W]), &player);

        let control_grown = spell_of(&[F, W]).with_growth(SpellGrowth {
            control: 500.0,
            ..SpellGrowth::default()
        });
        assert_eq!(
            evaluator.preview(&control_grown, &player).instability,
            plain.instability
        );

        // stability 500 -> mitigation capped at 0.6 -> factor 0.4
        let stability_grown = spell_of(&[F, W]).with_growth(SpellGrowth {
            stability: 500.0,
            ..SpellGrowth::default()
        });
        let mitigated = evaluator.preview(&stability_grown, &player).instability;
        assert!(mitigated < plain.instability);
        assert!((mitigated - round3(plain.instability * 0.4)).abs() <= 0.001);
    }

    #[test]
    fn infusions_raise_cost() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let player = Player::new(ActorId(1), "Ilse");
        let spell = spell_of(&[F, A, R]).with_infusion(0, 6.0).unwrap();

        assert!((evaluator.preview(&spell, &player).cost - 19.0).abs() < 1e-9);
    }

    #[test]
    fn effect_tags_are_the_union_of_rune_tags() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let player = Player::new(ActorId(1), "Ilse");

        let eval = evaluator.preview(&spell_of(&[F, P]), &player);
        assert!(eval.effect_tags.contains(&RuneTag::Elemental));
        assert!(eval.effect_tags.contains(&RuneTag::Piercing));
    }

    #[test]
    fn combat_splits_burst_and_dot() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let player = Player::new(ActorId(1), "Ilse");
        let mut spell = spell_of(&[F]);

        evaluator.prepare(&mut spell, &player);
        let combat = &spell.combat;

        // amount = 1.2 * 10 = 12; dot share 0.25 -> burst 9, dot pool 3 over 3s
        assert!((combat.burst.get(DamageType::Fire) - 9.0).abs() < 1e-9);
        assert!((combat.dot.get(DamageType::Fire) - 1.0).abs() < 1e-9);
        assert_eq!(combat.dot_duration, 3.0);
        assert!((combat.total_damage() - 12.0).abs() < 1e-9);
        assert_eq!(combat.effects.len(), 1);
        assert_eq!(combat.effects[0].kind, EffectKind::Burn);
    }

    #[test]
    fn combat_collects_cc_penetration_and_overcharge() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let player = Player::new(ActorId(1), "Ilse");

        let mut spell = spell_of(&[P, I, P, I]).with_infusion(1, 5.0).unwrap();
        evaluator.prepare(&mut spell, &player);
        let combat = &spell.combat;

        assert!((combat.penetration - 0.2).abs() < 1e-9);
        assert_eq!(combat.instant_cc, vec![CrowdControl::Freeze]);
        // one overcharge effect, only on the infused occurrence
        let shields = combat
            .effects
            .iter()
            .filter(|e| e.kind == EffectKind::Shield)
            .count();
        assert_eq!(shields, 1);
        assert!(combat
            .effects
            .iter()
            .any(|e| e.kind == EffectKind::Shield && e.target == EffectTarget::Caster));
    }

    #[test]
    fn dot_duration_grows_with_dot_runes() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let player = Player::new(ActorId(1), "Ilse");

        let mut spell = spell_of(&[F, A, F]);
        let combat = evaluator.derive_combat(&mut spell, &player);
        assert_eq!(combat.dot_duration, 3.5);
        assert_eq!(spell.combat, combat);

        // Two pools of 3 spread over 3.5s; the longer duration adds no damage.
        assert!((combat.dot.get(DamageType::Fire) - 6.0 / 3.5).abs() < 1e-9);
        assert!((combat.damage_of(DamageType::Fire) - 24.0).abs() < 1e-9);
        assert!((combat.total_damage() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn derive_combat_uses_the_given_actor_not_the_cached_evaluation() {
        let catalog = fixtures::catalog();
        let config = SpellConfig::default();
        let evaluator = Evaluator::new(&catalog, &config);
        let archmage = Player::new(ActorId(1), "Archmage").with_control_bonus(100.0);
        let imp = Creature::new(ActorId(2), "Imp");
        let mut spell = spell_of(&[F]);

        evaluator.prepare(&mut spell, &archmage);
        assert!((spell.combat.crit_chance - 0.5).abs() < 1e-12);

        // Imp control = 0.4, so crit = 0.05 + 0.02 * 0.4
        let combat = evaluator.derive_combat(&mut spell, &imp);
        assert!((combat.crit_chance - 0.058).abs() < 1e-12);
        assert_eq!(spell.combat, combat);
        // The archmage's evaluation stays cached
        assert!(spell.last_eval.as_ref().is_some_and(|e| e.control > 100.0));
    }
}
