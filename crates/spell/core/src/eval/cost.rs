//! Mana cost calculator.

use crate::actor::Caster;
use crate::config::CostConfig;
use crate::rune::RuneCatalog;
use crate::spell::Spell;

/// Sum of every rune occurrence's mana cost plus the mana infused into it.
pub fn base_mana_cost(catalog: &RuneCatalog, spell: &Spell) -> f64 {
    spell
        .runes()
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            catalog.get(*symbol).mana_cost.max(0.0) + spell.infused_mana(index).max(0.0)
        })
        .sum()
}

/// Cost efficiency clamped to `[0, max_efficiency]`; missing or non-finite
/// values count as zero.
pub fn effective_efficiency(actor: &(impl Caster + ?Sized), config: &CostConfig) -> f64 {
    actor
        .cost_efficiency()
        .filter(|e| e.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, config.max_efficiency.max(0.0))
}

/// `base_cost * (1 - clamp(cost_efficiency, 0, max_efficiency))`, never negative.
pub fn compute_spell_mana_cost(
    catalog: &RuneCatalog,
    config: &CostConfig,
    actor: &(impl Caster + ?Sized),
    spell: &Spell,
) -> f64 {
    let base = base_mana_cost(catalog, spell);
    (base * (1.0 - effective_efficiency(actor, config))).max(0.0)
}
