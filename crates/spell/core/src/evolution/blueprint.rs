//! Named spell blueprints.

use std::collections::{BTreeMap, BTreeSet};

use crate::damage::DamageType;
use crate::rune::RuneSymbol;

/// Stable blueprint identifier.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BlueprintId(pub String);

impl BlueprintId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for BlueprintId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::borrow::Borrow<str> for BlueprintId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Minimum share of total damage a spell must deal as one type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageFocus {
    pub damage_type: DamageType,
    /// Required ratio in `[0, 1]`.
    pub ratio: f64,
}

/// Template a crafted spell can evolve into once it meets every requirement.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedSpellBlueprint {
    pub id: BlueprintId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Rune multiset the spell must contain.
    pub required_runes: Vec<RuneSymbol>,
    /// When set, runes beyond the required multiset must come from
    /// `required_runes ∪ allowed_extra_runes`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allowed_extra_runes: Option<Vec<RuneSymbol>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_damage_focus: Option<DamageFocus>,
    /// Minimum total damage (burst plus full-duration DoT).
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_total_power: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_rune_familiarity: Option<BTreeMap<RuneSymbol, f64>>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_total_familiarity_score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub required_flags: Option<BTreeSet<String>>,
    /// Chained evolution: the spell must currently carry this blueprint's name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires_named_source_id: Option<BlueprintId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hidden: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hint: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

impl NamedSpellBlueprint {
    /// Creates a blueprint with only a rune requirement.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        required_runes: impl IntoIterator<Item = RuneSymbol>,
    ) -> Self {
        Self {
            id: BlueprintId::new(id),
            name: name.into(),
            description: String::new(),
            required_runes: required_runes.into_iter().collect(),
            allowed_extra_runes: None,
            min_damage_focus: None,
            min_total_power: None,
            min_rune_familiarity: None,
            min_total_familiarity_score: None,
            required_flags: None,
            requires_named_source_id: None,
            hidden: false,
            hint: None,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_allowed_extras(mut self, extras: impl IntoIterator<Item = RuneSymbol>) -> Self {
        self.allowed_extra_runes = Some(extras.into_iter().collect());
        self
    }

    #[must_use]
    pub fn with_damage_focus(mut self, damage_type: DamageType, ratio: f64) -> Self {
        self.min_damage_focus = Some(DamageFocus { damage_type, ratio });
        self
    }

    #[must_use]
    pub fn with_min_total_power(mut self, threshold: f64) -> Self {
        self.min_total_power = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_min_rune_familiarity(mut self, symbol: RuneSymbol, value: f64) -> Self {
        self.min_rune_familiarity
            .get_or_insert_with(BTreeMap::new)
            .insert(symbol, value);
        self
    }

    #[must_use]
    pub fn with_min_familiarity_score(mut self, threshold: f64) -> Self {
        self.min_total_familiarity_score = Some(threshold);
        self
    }

    #[must_use]
    pub fn with_required_flag(mut self, flag: impl Into<String>) -> Self {
        self.required_flags
            .get_or_insert_with(BTreeSet::new)
            .insert(flag.into());
        self
    }

    #[must_use]
    pub fn chained_from(mut self, source: impl Into<String>) -> Self {
        self.requires_named_source_id = Some(BlueprintId::new(source));
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.required_runes.is_empty() {
            return Err("required runes must not be empty");
        }
        if self
            .min_damage_focus
            .is_some_and(|f| !(0.0..=1.0).contains(&f.ratio))
        {
            return Err("damage focus ratio must be within [0, 1]");
        }
        if self.requires_named_source_id.as_ref() == Some(&self.id) {
            return Err("blueprint cannot chain from itself");
        }
        Ok(())
    }
}
