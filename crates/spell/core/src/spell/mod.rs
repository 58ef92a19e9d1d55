//! Spells: ordered rune sequences plus cached evaluation results.
mod combat;
mod error;
mod factory;

pub use combat::CombatStats;
pub use error::SpellError;
pub use factory::SpellFactory;

use std::collections::BTreeMap;

use crate::actor::ActorId;
use crate::eval::Evaluation;
use crate::rune::RuneSymbol;

/// Display name used for spells that have not been named or evolved.
pub const NAMELESS: &str = "nameless";

/// Opaque spell identifier.
///
/// Evolved spells derive their id as `{source}::{blueprint}`, so the same
/// source/blueprint pair always yields the same id.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpellId(pub String);

impl SpellId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for SpellId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Usage-driven growth, accumulated outside the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellGrowth {
    pub power: f64,
    pub control: f64,
    pub stability: f64,
    pub affinity: f64,
    pub versatility: f64,
}

/// Extra mana invested into one rune occurrence during crafting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Infusion {
    /// Index into the spell's rune sequence.
    pub index: usize,
    pub extra_mana: f64,
}

/// A crafted spell.
///
/// Deserialization goes through [`SpellRecord`], so a loaded spell obeys the
/// same rules as a constructed one and its profile is rebuilt from the runes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SpellRecord"))]
pub struct Spell {
    pub id: SpellId,
    pub owner: ActorId,
    pub name: Option<String>,
    runes: Vec<RuneSymbol>,
    #[cfg_attr(feature = "serde", serde(skip_serializing))]
    profile: BTreeMap<RuneSymbol, f64>,
    pub growth: SpellGrowth,
    infusions: Vec<Infusion>,
    pub last_eval: Option<Evaluation>,
    pub combat: CombatStats,
    pub craft_cost: Option<f64>,
    pub evolved_from: Option<SpellId>,
}

impl Spell {
    /// Builds an unevaluated, unnamed spell.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::EmptySequence`] if `runes` is empty.
    pub fn new(id: SpellId, owner: ActorId, runes: Vec<RuneSymbol>) -> Result<Self, SpellError> {
        if runes.is_empty() {
            return Err(SpellError::EmptySequence);
        }
        let profile = frequency_profile(&runes);
        Ok(Self {
            id,
            owner,
            name: None,
            runes,
            profile,
            growth: SpellGrowth::default(),
            infusions: Vec::new(),
            last_eval: None,
            combat: CombatStats::default(),
            craft_cost: None,
            evolved_from: None,
        })
    }

    /// The ordered rune sequence (never empty).
    pub fn runes(&self) -> &[RuneSymbol] {
        &self.runes
    }

    /// Normalized frequency of each rune in the sequence; sums to 1.
    pub fn profile(&self) -> &BTreeMap<RuneSymbol, f64> {
        &self.profile
    }

    pub fn frequency(&self, symbol: RuneSymbol) -> f64 {
        self.profile.get(&symbol).copied().unwrap_or(0.0)
    }

    /// Occurrences of each rune in the sequence.
    pub fn rune_counts(&self) -> BTreeMap<RuneSymbol, usize> {
        rune_counts(&self.runes)
    }

    pub fn infusions(&self) -> &[Infusion] {
        &self.infusions
    }

    /// Total extra mana infused into the rune at `index`.
    pub fn infused_mana(&self, index: usize) -> f64 {
        self.infusions
            .iter()
            .filter(|i| i.index == index)
            .map(|i| i.extra_mana)
            .sum()
    }

    /// Records an infusion, validating the index and the amount.
    pub fn add_infusion(&mut self, index: usize, extra_mana: f64) -> Result<(), SpellError> {
        if index >= self.runes.len() {
            return Err(SpellError::InfusionOutOfRange {
                index,
                len: self.runes.len(),
            });
        }
        if !extra_mana.is_finite() || extra_mana < 0.0 {
            return Err(SpellError::InvalidInfusion { index });
        }
        self.infusions.push(Infusion { index, extra_mana });
        Ok(())
    }

    /// Builder form of [`Spell::add_infusion`].
    pub fn with_infusion(mut self, index: usize, extra_mana: f64) -> Result<Self, SpellError> {
        self.add_infusion(index, extra_mana)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_growth(mut self, growth: SpellGrowth) -> Self {
        self.growth = growth;
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The spell's name, or `"nameless"`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(NAMELESS)
    }
}

/// Persisted form of a [`Spell`], validated on conversion.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct SpellRecord {
    pub id: SpellId,
    pub owner: ActorId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub runes: Vec<RuneSymbol>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub growth: SpellGrowth,
    #[cfg_attr(feature = "serde", serde(default))]
    pub infusions: Vec<Infusion>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_eval: Option<Evaluation>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub combat: CombatStats,
    #[cfg_attr(feature = "serde", serde(default))]
    pub craft_cost: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub evolved_from: Option<SpellId>,
}

impl TryFrom<SpellRecord> for Spell {
    type Error = SpellError;

    fn try_from(record: SpellRecord) -> Result<Self, Self::Error> {
        let mut spell = Spell::new(record.id, record.owner, record.runes)?;
        for infusion in record.infusions {
            spell.add_infusion(infusion.index, infusion.extra_mana)?;
        }
        spell.name = record.name;
        spell.growth = record.growth;
        spell.last_eval = record.last_eval;
        spell.combat = record.combat;
        spell.craft_cost = record.craft_cost;
        spell.evolved_from = record.evolved_from;
        Ok(spell)
    }
}

pub(crate) fn rune_counts(runes: &[RuneSymbol]) -> BTreeMap<RuneSymbol, usize> {
    let mut counts = BTreeMap::new();
    for rune in runes {
        *counts.entry(*rune).or_insert(0) += 1;
    }
    counts
}

/// Count of each symbol divided by the sequence length.
pub fn frequency_profile(runes: &[RuneSymbol]) -> BTreeMap<RuneSymbol, f64> {
    let total = runes.len() as f64;
    rune_counts(runes)
        .into_iter()
        .map(|(symbol, count)| (symbol, count as f64 / total))
        .collect()
}
