//! Small rune catalog shared by unit tests.
use crate::damage::DamageType;
use crate::effect::{CrowdControl, EffectBlueprint, EffectKind};
use crate::rune::{RuneCatalog, RuneDefinition, RuneSymbol, RuneTag};

fn rune(symbol: RuneSymbol) -> RuneDefinition {
    use RuneSymbol::*;

    let plain = RuneDefinition::new(symbol, symbol.to_string(), 1.0, 0.5, 0.1, 2.0);
    match symbol {
        F => RuneDefinition::new(F, "Flame", 1.2, 0.4, 0.10, 7.0)
            .with_tags([RuneTag::Elemental, RuneTag::Volatile])
            .with_damage(DamageType::Fire, 1.0)
            .with_dot_affinity(0.25)
            .with_effect(EffectBlueprint::new(EffectKind::Burn, 2.0, 3.0)),
        A => RuneDefinition::new(A, "Aether", 0.9, 0.6, 0.06, 3.0).with_tags([RuneTag::Arcane]),
        R => RuneDefinition::new(R, "Rock", 0.8, 0.5, 0.04, 3.0)
            .with_tags([RuneTag::Kinetic])
            .with_damage(DamageType::Physical, 1.0),
        W => RuneDefinition::new(W, "Wave", 1.0, 0.5, 0.12, 5.0)
            .with_tags([RuneTag::Elemental])
            .with_damage(DamageType::Water, 1.0),
        I => RuneDefinition::new(I, "Ice", 1.0, 0.5, 0.1, 5.0)
            .with_tags([RuneTag::Elemental, RuneTag::Control])
            .with_damage(DamageType::Ice, 1.0)
            .with_crowd_control(CrowdControl::Freeze)
            .with_overcharge(
                5.0,
                EffectBlueprint::new(EffectKind::Shield, 4.0, 5.0).on_caster(),
            ),
        P => RuneDefinition::new(P, "Pierce", 0.7, 0.5, 0.05, 2.0)
            .with_tags([RuneTag::Kinetic, RuneTag::Piercing])
            .with_damage(DamageType::Physical, 1.0),
        L => plain.with_damage(DamageType::Light, 1.0),
        V => plain.with_damage(DamageType::Void, 1.0),
        _ => plain.with_damage(DamageType::Physical, 1.0),
    }
}

pub(crate) fn catalog() -> RuneCatalog {
    RuneCatalog::new(RuneSymbol::all().into_iter().map(rune)).expect("fixture catalog is valid")
}
