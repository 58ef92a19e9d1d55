#![allow(dead_code)]

use spell_core::{
    DamageType, EffectBlueprint, EffectKind, RuneCatalog, RuneDefinition, RuneSymbol, RuneTag,
};

/// Uniform physical runes, with Flame, Aether and Rock set to the
/// reference values.
pub fn catalog() -> RuneCatalog {
    RuneCatalog::new(RuneSymbol::all().into_iter().map(|symbol| match symbol {
        RuneSymbol::F => RuneDefinition::new(symbol, "Flame", 1.2, 0.4, 0.10, 7.0)
            .with_tags([RuneTag::Elemental])
            .with_damage(DamageType::Fire, 1.0)
            .with_dot_affinity(0.25)
            .with_effect(EffectBlueprint::new(EffectKind::Burn, 2.0, 3.0)),
        RuneSymbol::A => RuneDefinition::new(symbol, "Aether", 0.9, 0.6, 0.06, 3.0),
        RuneSymbol::R => RuneDefinition::new(symbol, "Rock", 0.8, 0.5, 0.04, 3.0)
            .with_damage(DamageType::Physical, 1.0),
        _ => RuneDefinition::new(symbol, symbol.to_string(), 1.0, 0.5, 0.1, 2.0)
            .with_damage(DamageType::Physical, 1.0),
    }))
    .unwrap()
}
