//! End-to-end scenarios against the shipped content.

use std::collections::BTreeSet;

use spell_content::{builtin_blueprints, builtin_config, builtin_runes};
use spell_core::{
    ActorId, Caster, DamageType, EvolutionMatcher, Evaluator, Gate, MatchContext, Player,
    Progression, RuneSymbol::*, SpellFactory, SpellId, record_spell_use,
};

#[test]
fn worked_scenario_with_builtin_runes() {
    let runes = builtin_runes().unwrap();
    let config = builtin_config().unwrap();
    let evaluator = Evaluator::new(&runes, &config);
    let player = Player::new(ActorId(1), "Ilse").with_cost_efficiency(0.0);
    let mut spell = SpellFactory::new()
        .create_from_str(player.id(), "FAR")
        .unwrap();

    let eval = evaluator.evaluate(&mut spell, &player);

    assert!((eval.power - 2.90).abs() < 1e-9);
    assert!((eval.formation_penalty - 0.05).abs() < 1e-9);
    assert!((eval.instability - 0.070).abs() < 1e-9);
    assert!((eval.cost - 13.0).abs() < 1e-9);
}

#[test]
fn far_evolves_into_firebolt_but_not_with_water() {
    let runes = builtin_runes().unwrap();
    let blueprints = builtin_blueprints().unwrap();
    let config = builtin_config().unwrap();
    let evaluator = Evaluator::new(&runes, &config);
    let matcher = EvolutionMatcher::new(&blueprints, &config.evolution);
    let player = Player::new(ActorId(1), "Ilse");
    let factory = SpellFactory::new();

    let mut far = factory.create_from_str(player.id(), "FAR").unwrap();
    evaluator.prepare(&mut far, &player);

    // Fire 12 (burst 9 + DoT 1 x 3s), physical 8
    assert!((far.combat.total_damage() - 20.0).abs() < 1e-9);
    assert!((far.combat.damage_of(DamageType::Fire) - 12.0).abs() < 1e-9);

    let matched = matcher.list_possible_evolutions(&far, MatchContext::new());
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].blueprint.id.as_str(), "firebolt");
    // 20 damage + (0.6 - 0.5) * 10 + 5
    assert!((matched[0].score - 26.0).abs() < 1e-6);

    let mut farw = factory.create_from_str(player.id(), "FARW").unwrap();
    evaluator.prepare(&mut farw, &player);
    let firebolt = blueprints.get("firebolt").unwrap();
    assert_eq!(
        matcher.check(&farw, firebolt, MatchContext::new()),
        Err(Gate::ExtraRunes)
    );
}

#[test]
fn firebolt_chains_into_inferno_with_practice() {
    let runes = builtin_runes().unwrap();
    let blueprints = builtin_blueprints().unwrap();
    let config = builtin_config().unwrap();
    let evaluator = Evaluator::new(&runes, &config);
    let matcher = EvolutionMatcher::new(&blueprints, &config.evolution);
    let inferno_bp = blueprints.get("inferno").unwrap();
    let mut player = Player::new(ActorId(7), "Oriel");

    let mut ffar = SpellFactory::new()
        .create_nameless(player.id(), &[F, F, A, R])
        .unwrap();
    evaluator.prepare(&mut ffar, &player);

    let firebolt = matcher
        .evolve_spell(&ffar, "firebolt", MatchContext::new())
        .unwrap();
    assert_eq!(firebolt.id, SpellId::new("spell-0::firebolt"));
    assert_eq!(firebolt.name.as_deref(), Some("Firebolt"));

    // Not yet familiar enough with Flame
    assert_eq!(
        matcher.check(&firebolt, inferno_bp, MatchContext::new().with_actor(&player)),
        Err(Gate::RuneFamiliarity)
    );

    for _ in 0..10 {
        record_spell_use(&mut player, &firebolt, &config.progression);
    }
    assert!(player.progression().rune_familiarity(F) >= 0.2);
    assert!(player.progression().damage_affinity(DamageType::Fire) > 0.0);

    let ctx = MatchContext::new().with_actor(&player);

    // The unnamed source spell cannot take the chained step
    assert_eq!(
        matcher.evolve_spell(&ffar, "inferno", ctx).unwrap_err().to_string(),
        "spell is not eligible for 'inferno': named_source requirement not met"
    );

    let inferno = matcher.evolve_spell(&firebolt, "inferno", ctx).unwrap();
    assert_eq!(inferno.id, SpellId::new("spell-0::firebolt::inferno"));
    assert_eq!(inferno.name.as_deref(), Some("Inferno"));
    assert_eq!(inferno.evolved_from, Some(firebolt.id.clone()));
}

#[test]
fn hidden_blueprint_needs_flags_and_familiarity() {
    let runes = builtin_runes().unwrap();
    let blueprints = builtin_blueprints().unwrap();
    let config = builtin_config().unwrap();
    let evaluator = Evaluator::new(&runes, &config);
    let matcher = EvolutionMatcher::new(&blueprints, &config.evolution);
    let void_rend = blueprints.get("void_rend").unwrap();
    assert!(void_rend.hidden);
    assert!(blueprints.visible().all(|b| b.id.as_str() != "void_rend"));

    let adept = Player::new(ActorId(3), "Sable").with_progression(
        Progression::new()
            .with_rune_familiarity(V, 0.4)
            .with_rune_familiarity(U, 0.4),
    );
    let mut spell = SpellFactory::new()
        .create_from_str(adept.id(), "VUV")
        .unwrap();
    evaluator.prepare(&mut spell, &adept);

    let ctx = MatchContext::new().with_actor(&adept);
    assert_eq!(matcher.check(&spell, void_rend, ctx), Err(Gate::Flags));

    let flags: BTreeSet<String> = ["touched_the_abyss".to_string()].into();
    assert!(matcher.matches_blueprint(&spell, void_rend, ctx.with_flags(&flags)));
}
