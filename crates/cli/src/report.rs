//! Plain-text output.
use spell_core::{
    BlueprintCatalog, Evaluation, MatchedEvolution, RuneCatalog, Spell,
};

pub fn print_evaluation(spell: &Spell, evaluation: &Evaluation) {
    let runes: String = spell.runes().iter().map(|r| r.as_char()).collect();
    println!("{} [{}] ({})", spell.display_name(), runes, spell.id);
    println!("  power        {:.2}", evaluation.power);
    println!("  control      {:.2}", evaluation.control);
    println!("  instability  {:.3}", evaluation.instability);
    println!("  formation    {:.3}", evaluation.formation_penalty);
    println!("  cost         {:.2}", evaluation.cost);
    if !evaluation.effect_tags.is_empty() {
        let tags: Vec<String> = evaluation.effect_tags.iter().map(|t| t.to_string()).collect();
        println!("  tags         {}", tags.join(", "));
    }

    let combat = &spell.combat;
    println!("  damage       {:.1} total", combat.total_damage());
    for (damage_type, amount) in combat.burst.iter_nonzero() {
        println!("    burst {:<9} {:.1}", damage_type, amount);
    }
    for (damage_type, per_tick) in combat.dot.iter_nonzero() {
        println!(
            "    dot   {:<9} {:.1}/s for {:.1}s",
            damage_type, per_tick, combat.dot_duration
        );
    }
    println!(
        "  crit         {:.0}% x{:.2}   penetration {:.0}%",
        combat.crit_chance * 100.0,
        combat.crit_multiplier,
        combat.penetration * 100.0
    );
    if !combat.instant_cc.is_empty() {
        let cc: Vec<String> = combat.instant_cc.iter().map(|c| c.to_string()).collect();
        println!("  crowd ctrl   {}", cc.join(", "));
    }
    for effect in &combat.effects {
        println!(
            "  effect       {} {:.1} for {:.1}s on {:?}",
            effect.kind, effect.magnitude, effect.duration, effect.target
        );
    }
}

pub fn print_evolutions(evolutions: &[MatchedEvolution<'_>]) {
    if evolutions.is_empty() {
        println!("No evolutions available.");
        return;
    }
    println!("Evolutions:");
    for matched in evolutions {
        println!(
            "  {:<16} {:>7.2}  {}",
            matched.blueprint.name, matched.score, matched.blueprint.id
        );
    }
}

pub fn print_runes(runes: &RuneCatalog) {
    for rune in runes {
        let tags: Vec<String> = rune.tags.iter().map(|t| t.to_string()).collect();
        println!(
            "{} {:<8} power {:.2} control {:.2} instability {:.2} mana {:>4.1}  {}",
            rune.symbol,
            rune.name,
            rune.power_factor,
            rune.control_factor,
            rune.instability_base,
            rune.mana_cost,
            tags.join(", ")
        );
    }
}

pub fn print_hints(blueprints: &BlueprintCatalog) {
    for blueprint in blueprints.visible() {
        println!(
            "{:<16} {}",
            blueprint.name,
            blueprint.hint.as_deref().unwrap_or(&blueprint.description)
        );
    }
}
