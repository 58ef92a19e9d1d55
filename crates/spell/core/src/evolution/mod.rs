//! Named-spell evolution.
//!
//! A [`NamedSpellBlueprint`] describes a spell shape (rune multiset, damage
//! focus, power, familiarity, flags, lineage). The [`EvolutionMatcher`]
//! checks a spell against every blueprint in a [`BlueprintCatalog`], ranks
//! the matches and derives evolved spells. Matching reads the spell's cached
//! [`CombatStats`](crate::spell::CombatStats), so spells should be prepared
//! by the evaluator first.
mod blueprint;
mod catalog;
mod error;
mod matcher;

pub use blueprint::{BlueprintId, DamageFocus, NamedSpellBlueprint};
pub use catalog::BlueprintCatalog;
pub use error::EvolutionError;
pub use matcher::{
    EvolutionMatcher, Gate, MatchContext, MatchedEvolution, damage_focus_ratio, total_damage,
};
