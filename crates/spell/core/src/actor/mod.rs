//! Actors that own and cast spells.
//!
//! Players and creatures share the [`Caster`] capability set. The engine only
//! reads actors, except for the progression service which updates the
//! [`Progression`] maps after a confirmed cast.
mod progression;

pub use progression::Progression;
pub(crate) use progression::clamp_unit;

use crate::effect::EffectInstance;
use crate::rune::RuneSymbol;

/// Unique identifier for an actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u64);

impl core::fmt::Display for ActorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Current/maximum pair for HP and mana.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub const fn new(current: u32, maximum: u32) -> Self {
        let current = if current > maximum { maximum } else { current };
        Self { current, maximum }
    }

    pub const fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }
}

/// State shared by every kind of actor.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorCore {
    pub id: ActorId,
    pub name: String,
    pub hp: ResourceMeter,
    pub mana: ResourceMeter,
    #[cfg_attr(feature = "serde", serde(default))]
    pub progression: Progression,
    #[cfg_attr(feature = "serde", serde(default))]
    pub active_effects: Vec<EffectInstance>,
}

impl ActorCore {
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hp: ResourceMeter::full(100),
            mana: ResourceMeter::full(100),
            progression: Progression::new(),
            active_effects: Vec::new(),
        }
    }
}

/// Capability set the engine needs from a spell owner.
pub trait Caster {
    fn core(&self) -> &ActorCore;

    fn core_mut(&mut self) -> &mut ActorCore;

    fn id(&self) -> ActorId {
        self.core().id
    }

    fn name(&self) -> &str {
        &self.core().name
    }

    fn progression(&self) -> &Progression {
        &self.core().progression
    }

    fn progression_mut(&mut self) -> &mut Progression {
        &mut self.core_mut().progression
    }

    /// Rune affinity in `[0, 1]` read by the evaluator.
    fn rune_affinity(&self, symbol: RuneSymbol) -> f64 {
        self.progression().rune_familiarity(symbol)
    }

    /// Fractional mana cost reduction. Untrusted: the cost calculator clamps it.
    fn cost_efficiency(&self) -> Option<f64> {
        None
    }

    /// Flat bonus added to a spell's evaluated control.
    fn control_bonus(&self) -> Option<f64> {
        None
    }
}

/// A player character.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub core: ActorCore,
    #[cfg_attr(feature = "serde", serde(default))]
    pub control_bonus: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cost_efficiency: Option<f64>,
}

impl Player {
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            core: ActorCore::new(id, name),
            control_bonus: None,
            cost_efficiency: None,
        }
    }

    #[must_use]
    pub fn with_cost_efficiency(mut self, efficiency: f64) -> Self {
        self.cost_efficiency = Some(efficiency);
        self
    }

    #[must_use]
    pub fn with_control_bonus(mut self, bonus: f64) -> Self {
        self.control_bonus = Some(bonus);
        self
    }

    #[must_use]
    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.core.progression = progression;
        self
    }
}

impl Caster for Player {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    fn cost_efficiency(&self) -> Option<f64> {
        self.cost_efficiency
    }

    fn control_bonus(&self) -> Option<f64> {
        self.control_bonus
    }
}

/// A non-player creature. Creatures have no crafting modifiers.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Creature {
    pub core: ActorCore,
}

impl Creature {
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            core: ActorCore::new(id, name),
        }
    }

    #[must_use]
    pub fn with_progression(mut self, progression: Progression) -> Self {
        self.core.progression = progression;
        self
    }
}

impl Caster for Creature {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }
}
