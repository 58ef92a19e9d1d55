/// Formula constants used by the evaluator, progression service and matcher.
///
/// Every value is treated as fixed configuration: the engine applies it but
/// never tries to justify it. `Default` reproduces the shipped rule set, and
/// each section falls back to its defaults field-by-field when deserialized,
/// so a TOML file only needs to name the values it overrides.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellConfig {
    pub affinity: AffinityConfig,
    pub formation: FormationConfig,
    pub growth: GrowthConfig,
    pub cost: CostConfig,
    pub combat: CombatConfig,
    pub progression: ProgressionConfig,
    pub evolution: EvolutionConfig,
}

impl SpellConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// How rune affinity scales a single rune's contribution.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AffinityConfig {
    /// `power_amp = 1 + power_scale * affinity`
    pub power_scale: f64,
    /// `control_amp = 1 + control_scale * affinity`
    pub control_scale: f64,
    /// `instability_mit = 1 - instability_scale * affinity`
    pub instability_scale: f64,
}

impl Default for AffinityConfig {
    fn default() -> Self {
        Self {
            power_scale: 0.5,
            control_scale: 0.25,
            instability_scale: 0.35,
        }
    }
}

/// Formation penalty constants (vowel balance and clashing neighbours).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormationConfig {
    pub vowel_threshold: f64,
    pub vowel_penalty_scale: f64,
    pub clash_penalty: f64,
    pub max_penalty: f64,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            vowel_threshold: 0.4,
            vowel_penalty_scale: 0.3,
            clash_penalty: 0.04,
            max_penalty: 0.35,
        }
    }
}

/// Growth mitigation: `1 - clamp(growth / divisor, 0, cap)`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthConfig {
    pub divisor: f64,
    pub cap: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            divisor: 200.0,
            cap: 0.6,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostConfig {
    /// Upper clamp for an actor's cost efficiency.
    pub max_efficiency: f64,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            max_efficiency: 0.3,
        }
    }
}

/// Constants for deriving combat stats from an evaluated spell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Damage dealt per point of amplified power before type multipliers.
    pub damage_scale: f64,
    /// DoT duration when a single DoT-capable rune is present.
    pub dot_base_duration: f64,
    /// Extra DoT duration per additional DoT-capable rune occurrence.
    pub dot_duration_step: f64,
    pub penetration_per_rune: f64,
    pub max_penetration: f64,
    pub base_crit_chance: f64,
    pub crit_chance_per_control: f64,
    pub max_crit_chance: f64,
    pub base_crit_multiplier: f64,
    pub crit_multiplier_per_rune: f64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            damage_scale: 10.0,
            dot_base_duration: 3.0,
            dot_duration_step: 0.5,
            penetration_per_rune: 0.1,
            max_penetration: 0.6,
            base_crit_chance: 0.05,
            crit_chance_per_control: 0.02,
            max_crit_chance: 0.5,
            base_crit_multiplier: 1.5,
            crit_multiplier_per_rune: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    /// XP granted to a damage type whose focus is 1.0.
    pub xp_per_cast: f64,
    /// Weight of DoT focus relative to burst focus.
    pub dot_weight: f64,
    /// XP at which affinity reaches 0.5.
    pub xp_half_point: f64,
    /// Fraction of the remaining headroom gained per rune occurrence cast.
    pub rune_familiarity_gain: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            xp_per_cast: 10.0,
            dot_weight: 0.7,
            xp_half_point: 100.0,
            rune_familiarity_gain: 0.02,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvolutionConfig {
    /// Score per unit of damage focus above the blueprint's requirement.
    pub focus_bonus_scale: f64,
    /// Score bonus when the spell has exactly the required rune count.
    pub exact_length_bonus: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            focus_bonus_scale: 10.0,
            exact_length_bonus: 5.0,
        }
    }
}
