//! Deterministic spell-crafting rules.
//!
//! `spell-core` turns an ordered rune sequence into a spell, evaluates its
//! power, control, instability and mana cost against the owning actor's
//! progression, derives combat stats, records progression after casts, and
//! matches spells against named blueprints for evolution. Everything here is
//! synchronous and pure; catalogs and configuration are constructed by the
//! caller and passed in explicitly.
pub mod actor;
pub mod config;
pub mod damage;
pub mod effect;
pub mod error;
pub mod eval;
pub mod evolution;
pub mod progression;
pub mod rune;
pub mod spell;

#[cfg(test)]
pub(crate) mod fixtures;

pub use actor::{ActorCore, ActorId, Caster, Creature, Player, Progression, ResourceMeter};
pub use config::{
    AffinityConfig, CombatConfig, CostConfig, EvolutionConfig, FormationConfig, GrowthConfig,
    ProgressionConfig, SpellConfig,
};
pub use damage::{DamageType, DamageVector};
pub use effect::{CrowdControl, EffectBlueprint, EffectInstance, EffectKind, EffectTarget};
pub use error::{EngineError, ErrorSeverity};
pub use eval::{Evaluation, Evaluator, base_mana_cost, compute_spell_mana_cost, formation_penalty};
pub use evolution::{
    BlueprintCatalog, BlueprintId, DamageFocus, EvolutionError, EvolutionMatcher, Gate,
    MatchContext, MatchedEvolution, NamedSpellBlueprint,
};
pub use progression::{
    record_spell_use, rune_familiarity, spell_familiarity_score, xp_to_affinity,
};
pub use rune::{CatalogError, Overcharge, RuneCatalog, RuneDefinition, RuneSymbol, RuneTag};
pub use spell::{
    CombatStats, Infusion, NAMELESS, Spell, SpellError, SpellFactory, SpellGrowth, SpellId,
    SpellRecord,
};
