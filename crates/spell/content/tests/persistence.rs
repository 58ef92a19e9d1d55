//! Saving and restoring spells as RON.

use spell_content::{builtin_config, builtin_runes};
use spell_core::{ActorId, Evaluator, Player, RuneSymbol::*, Spell, SpellFactory};

#[test]
fn prepared_spell_survives_a_ron_round_trip() {
    let runes = builtin_runes().unwrap();
    let config = builtin_config().unwrap();
    let evaluator = Evaluator::new(&runes, &config);
    let player = Player::new(ActorId(1), "Ilse");
    let mut spell = SpellFactory::new()
        .create_from_str(ActorId(1), "FFAR")
        .unwrap()
        .with_infusion(2, 3.0)
        .unwrap()
        .with_name("Ember");
    evaluator.prepare(&mut spell, &player);

    let text = ron::to_string(&spell).unwrap();
    assert!(!text.contains("profile"));

    let restored: Spell = ron::from_str(&text).unwrap();
    assert_eq!(restored, spell);
    assert_eq!(restored.frequency(F), 0.5);
}

#[test]
fn stored_spells_are_validated_on_load() {
    let empty = r#"(id: "s1", owner: (1), runes: [])"#;
    let err = ron::from_str::<Spell>(empty).unwrap_err();
    assert!(err.to_string().contains("at least one rune"));

    let stray_infusion = r#"(
        id: "s1",
        owner: (1),
        runes: [F, A],
        infusions: [(index: 7, extra_mana: 1.0)],
    )"#;
    let err = ron::from_str::<Spell>(stray_infusion).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn stored_profile_is_ignored_and_rebuilt() {
    let forged = r#"(
        id: "s1",
        owner: (1),
        runes: [F, A],
        profile: {"F": 1.0},
    )"#;
    let spell: Spell = ron::from_str(forged).unwrap();

    assert_eq!(spell.frequency(F), 0.5);
    assert_eq!(spell.frequency(A), 0.5);
    assert!(spell.last_eval.is_none());
}
