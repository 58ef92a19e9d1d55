//! Damage types and per-type damage vectors.

/// Closed set of damage types a rune can deal.
///
/// `Heal` is carried as a damage type so that healing spells flow through the
/// same burst/DoT vectors, focus ratios and progression XP as offensive ones.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    Physical = 0,
    Fire = 1,
    Ice = 2,
    Water = 3,
    Electric = 4,
    Light = 5,
    Void = 6,
    Gravity = 7,
    Mind = 8,
    Heal = 9,
}

impl DamageType {
    /// Total number of damage types.
    pub const COUNT: usize = 10;

    /// Returns all damage types in canonical order.
    pub const fn all() -> [DamageType; Self::COUNT] {
        [
            DamageType::Physical,
            DamageType::Fire,
            DamageType::Ice,
            DamageType::Water,
            DamageType::Electric,
            DamageType::Light,
            DamageType::Void,
            DamageType::Gravity,
            DamageType::Mind,
            DamageType::Heal,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Dense damage amounts indexed by [`DamageType`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageVector {
    values: [f64; DamageType::COUNT],
}

impl DamageVector {
    pub const fn zero() -> Self {
        Self {
            values: [0.0; DamageType::COUNT],
        }
    }

    #[inline]
    pub fn get(&self, damage_type: DamageType) -> f64 {
        self.values[damage_type.as_index()]
    }

    /// Adds `amount` to a damage type. Negative amounts are ignored so the
    /// vector never dips below zero.
    pub fn add(&mut self, damage_type: DamageType, amount: f64) {
        if amount > 0.0 {
            self.values[damage_type.as_index()] += amount;
        }
    }

    /// Sum over all damage types.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Returns a copy with every entry multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = *self;
        for value in out.values.iter_mut() {
            *value *= factor;
        }
        out
    }

    /// Iterates over `(type, amount)` pairs with a non-zero amount.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (DamageType, f64)> + '_ {
        DamageType::all()
            .into_iter()
            .map(|t| (t, self.get(t)))
            .filter(|(_, amount)| *amount > 0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| *v == 0.0)
    }
}
