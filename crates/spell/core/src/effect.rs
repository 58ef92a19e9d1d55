//! Effect vocabulary shared by runes and derived combat stats.
//!
//! Runes carry [`EffectBlueprint`]s (static data). Deriving a spell's combat
//! profile resolves them into [`EffectInstance`]s with scaled magnitudes.

/// Lingering effect variants.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EffectKind {
    // ========================================================================
    // Damage over time
    // ========================================================================
    Burn,
    Chill,
    Soak,
    Shock,
    Radiance,
    Corrode,
    Crush,

    // ========================================================================
    // Debuffs
    // ========================================================================
    Confuse,
    Slow,

    // ========================================================================
    // Buffs
    // ========================================================================
    Regenerate,
    Shield,
    Haste,
    Empower,
}

impl EffectKind {
    /// Returns true for effects that help whoever receives them.
    pub const fn is_beneficial(self) -> bool {
        matches!(
            self,
            Self::Regenerate | Self::Shield | Self::Haste | Self::Empower
        )
    }
}

/// Instantaneous crowd-control tags applied on hit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CrowdControl {
    Stun,
    Root,
    Freeze,
    Knockback,
    Silence,
    Blind,
    Pull,
}

/// Who an effect lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    Caster,
    #[default]
    Target,
}

/// Static effect data attached to a rune definition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectBlueprint {
    pub kind: EffectKind,
    pub magnitude: f64,
    /// Duration in seconds.
    pub duration: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub self_target: bool,
}

impl EffectBlueprint {
    pub const fn new(kind: EffectKind, magnitude: f64, duration: f64) -> Self {
        Self {
            kind,
            magnitude,
            duration,
            self_target: false,
        }
    }

    /// Marks the blueprint as landing on the caster (builder pattern).
    #[must_use]
    pub const fn on_caster(mut self) -> Self {
        self.self_target = true;
        self
    }

    pub const fn target(&self) -> EffectTarget {
        if self.self_target {
            EffectTarget::Caster
        } else {
            EffectTarget::Target
        }
    }

    /// Resolves the blueprint with its magnitude multiplied by `scale`.
    pub fn resolve(&self, scale: f64) -> EffectInstance {
        EffectInstance {
            kind: self.kind,
            magnitude: (self.magnitude * scale).max(0.0),
            duration: self.duration.max(0.0),
            target: self.target(),
        }
    }
}

/// A resolved effect.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectInstance {
    pub kind: EffectKind,
    pub magnitude: f64,
    pub duration: f64,
    pub target: EffectTarget,
}
