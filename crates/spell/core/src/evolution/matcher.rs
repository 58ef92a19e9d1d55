//! Blueprint matching, scoring and spell evolution.

use std::collections::BTreeSet;

use crate::actor::Caster;
use crate::config::EvolutionConfig;
use crate::damage::DamageType;
use crate::progression::{rune_familiarity, spell_familiarity_score};
use crate::spell::{Spell, SpellId, rune_counts};

use super::{BlueprintCatalog, BlueprintId, EvolutionError, NamedSpellBlueprint};

/// Requirement checked by [`EvolutionMatcher::check`], in evaluation order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Gate {
    RequiredRunes,
    ExtraRunes,
    DamageFocus,
    TotalPower,
    RuneFamiliarity,
    FamiliarityScore,
    Flags,
    NamedSource,
}

/// Optional caller state consulted by the familiarity and flag gates.
#[derive(Clone, Copy, Default)]
pub struct MatchContext<'a> {
    pub actor: Option<&'a dyn Caster>,
    pub flags: Option<&'a BTreeSet<String>>,
}

impl<'a> MatchContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_actor(mut self, actor: &'a dyn Caster) -> Self {
        self.actor = Some(actor);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: &'a BTreeSet<String>) -> Self {
        self.flags = Some(flags);
        self
    }
}

/// A blueprint the spell satisfies, with its ranking score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchedEvolution<'c> {
    pub blueprint: &'c NamedSpellBlueprint,
    pub score: f64,
}

/// Burst plus full-duration DoT over all damage types, from the spell's
/// cached combat stats.
pub fn total_damage(spell: &Spell) -> f64 {
    spell.combat.total_damage()
}

/// Share of total damage dealt as `damage_type`, 0 when the spell deals none.
pub fn damage_focus_ratio(spell: &Spell, damage_type: DamageType) -> f64 {
    let total = total_damage(spell);
    if total.is_nan() || total <= 0.0 {
        return 0.0;
    }
    (spell.combat.damage_of(damage_type) / total).clamp(0.0, 1.0)
}

/// Matches spells against a [`BlueprintCatalog`].
#[derive(Clone, Copy, Debug)]
pub struct EvolutionMatcher<'a> {
    blueprints: &'a BlueprintCatalog,
    config: &'a EvolutionConfig,
}

impl<'a> EvolutionMatcher<'a> {
    pub fn new(blueprints: &'a BlueprintCatalog, config: &'a EvolutionConfig) -> Self {
        Self { blueprints, config }
    }

    pub fn blueprints(&self) -> &'a BlueprintCatalog {
        self.blueprints
    }

    /// Runs every gate in order and returns the first one that fails.
    pub fn check(
        &self,
        spell: &Spell,
        blueprint: &NamedSpellBlueprint,
        ctx: MatchContext<'_>,
    ) -> Result<(), Gate> {
        let counts = spell.rune_counts();
        let required = rune_counts(&blueprint.required_runes);

        for (symbol, needed) in &required {
            let observed = counts.get(symbol).copied().unwrap_or(0);
            if observed < *needed {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::RequiredRunes,
                    rune = %symbol,
                    required = *needed,
                    observed,
                    "blueprint rejected"
                );
                return Err(Gate::RequiredRunes);
            }
        }

        if let Some(extras) = &blueprint.allowed_extra_runes {
            let outsider = counts
                .keys()
                .find(|symbol| !required.contains_key(*symbol) && !extras.contains(*symbol));
            if let Some(symbol) = outsider {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::ExtraRunes,
                    rune = %symbol,
                    "blueprint rejected"
                );
                return Err(Gate::ExtraRunes);
            }
        }

        if let Some(focus) = blueprint.min_damage_focus {
            let observed = damage_focus_ratio(spell, focus.damage_type);
            if observed < focus.ratio {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::DamageFocus,
                    damage_type = %focus.damage_type,
                    required = focus.ratio,
                    observed,
                    "blueprint rejected"
                );
                return Err(Gate::DamageFocus);
            }
        }

        if let Some(threshold) = blueprint.min_total_power {
            let observed = total_damage(spell);
            if observed < threshold {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::TotalPower,
                    required = threshold,
                    observed,
                    "blueprint rejected"
                );
                return Err(Gate::TotalPower);
            }
        }

        if let Some(minimums) = &blueprint.min_rune_familiarity {
            let satisfied = ctx.actor.is_some_and(|actor| {
                minimums
                    .iter()
                    .all(|(symbol, min)| rune_familiarity(actor, *symbol) >= *min)
            });
            if !satisfied {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::RuneFamiliarity,
                    has_actor = ctx.actor.is_some(),
                    "blueprint rejected"
                );
                return Err(Gate::RuneFamiliarity);
            }
        }

        if let Some(threshold) = blueprint.min_total_familiarity_score {
            let observed = ctx.actor.map(|actor| spell_familiarity_score(actor, spell));
            if observed.is_none_or(|score| score < threshold) {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::FamiliarityScore,
                    required = threshold,
                    ?observed,
                    "blueprint rejected"
                );
                return Err(Gate::FamiliarityScore);
            }
        }

        if let Some(required_flags) = &blueprint.required_flags {
            let satisfied = ctx
                .flags
                .is_some_and(|flags| required_flags.is_subset(flags));
            if !satisfied {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::Flags,
                    required = ?required_flags,
                    "blueprint rejected"
                );
                return Err(Gate::Flags);
            }
        }

        if let Some(source) = &blueprint.requires_named_source_id {
            // Chains compare display names, not ids.
            let source_name = self.blueprints.get(source.as_str()).map(|b| b.name.as_str());
            if source_name.is_none() || spell.name.as_deref() != source_name {
                tracing::trace!(
                    blueprint = %blueprint.id,
                    gate = %Gate::NamedSource,
                    source = %source,
                    spell_name = spell.display_name(),
                    "blueprint rejected"
                );
                return Err(Gate::NamedSource);
            }
        }

        Ok(())
    }

    pub fn matches_blueprint(
        &self,
        spell: &Spell,
        blueprint: &NamedSpellBlueprint,
        ctx: MatchContext<'_>,
    ) -> bool {
        self.check(spell, blueprint, ctx).is_ok()
    }

    /// `total damage + focus surplus bonus + exact length bonus`.
    pub fn score_match(&self, spell: &Spell, blueprint: &NamedSpellBlueprint) -> f64 {
        let mut score = total_damage(spell);

        if let Some(focus) = blueprint.min_damage_focus {
            let achieved = damage_focus_ratio(spell, focus.damage_type);
            if achieved > focus.ratio {
                score += (achieved - focus.ratio) * self.config.focus_bonus_scale;
            }
        }

        if spell.runes().len() == blueprint.required_runes.len() {
            score += self.config.exact_length_bonus;
        }

        score
    }

    /// Every blueprint the spell satisfies, highest score first. Equal scores
    /// keep catalog order.
    pub fn list_possible_evolutions(
        &self,
        spell: &Spell,
        ctx: MatchContext<'_>,
    ) -> Vec<MatchedEvolution<'a>> {
        let mut matched: Vec<_> = self
            .blueprints
            .iter()
            .filter(|blueprint| self.matches_blueprint(spell, blueprint, ctx))
            .map(|blueprint| MatchedEvolution {
                blueprint,
                score: self.score_match(spell, blueprint),
            })
            .collect();

        matched.sort_by(|a, b| b.score.total_cmp(&a.score));

        tracing::debug!(
            spell = %spell.id,
            candidates = self.blueprints.len(),
            matched = matched.len(),
            best = matched.first().map(|m| m.blueprint.id.as_str()),
            "listed possible evolutions"
        );
        matched
    }

    /// Produces the evolved spell without touching `spell`.
    ///
    /// The derived id is `{spell.id}::{blueprint_id}`, so evolving the same
    /// pair twice yields the same id.
    pub fn evolve_spell(
        &self,
        spell: &Spell,
        blueprint_id: &str,
        ctx: MatchContext<'_>,
    ) -> Result<Spell, EvolutionError> {
        let blueprint = self
            .blueprints
            .get(blueprint_id)
            .ok_or_else(|| EvolutionError::UnknownBlueprint(BlueprintId::new(blueprint_id)))?;

        self.check(spell, blueprint, ctx)
            .map_err(|gate| EvolutionError::NotEligible {
                blueprint: blueprint.id.clone(),
                gate,
            })?;

        let mut evolved = spell.clone();
        evolved.id = SpellId::new(format!("{}::{}", spell.id, blueprint.id));
        evolved.name = Some(blueprint.name.clone());
        evolved.evolved_from = Some(spell.id.clone());

        tracing::debug!(from = %spell.id, to = %evolved.id, blueprint = %blueprint.id, "spell evolved");
        Ok(evolved)
    }
}
