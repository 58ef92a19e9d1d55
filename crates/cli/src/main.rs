//! `spellforge`: craft a spell from the command line and inspect it.
//!
//! ```bash
//! spellforge eval FAR
//! spellforge eval FFAR --infuse 0:6 --cost-efficiency 0.1
//! spellforge eval VUV --flag touched_the_abyss --familiarity V:0.4 --familiarity U:0.4
//! spellforge runes
//! spellforge hints
//! ```
mod config;
mod report;

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spell_core::{
    ActorId, EvolutionMatcher, Evaluator, MatchContext, Player, Progression, RuneSymbol,
    SpellFactory,
};

use crate::config::CliConfig;

/// Deterministic spell-crafting playground
#[derive(Parser, Debug)]
#[command(name = "spellforge", version)]
#[command(about = "Evaluate rune sequences and discover spell evolutions")]
struct Args {
    /// Content directory (overrides SPELLFORGE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a rune sequence and list the evolutions it qualifies for
    Eval {
        /// Rune sequence, e.g. FAR
        runes: String,

        /// Extra mana on one rune, as INDEX:MANA (repeatable)
        #[arg(long = "infuse", value_parser = parse_infusion)]
        infusions: Vec<(usize, f64)>,

        /// Achievement flag held by the caster (repeatable)
        #[arg(long = "flag")]
        flags: Vec<String>,

        /// Caster rune familiarity, as RUNE:VALUE (repeatable)
        #[arg(long = "familiarity", value_parser = parse_familiarity)]
        familiarity: Vec<(RuneSymbol, f64)>,

        /// Fractional mana cost reduction (clamped by the rules)
        #[arg(long)]
        cost_efficiency: Option<f64>,
    },

    /// List the rune alphabet
    Runes,

    /// Show hints for visible blueprints
    Hints,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    setup_logging();

    let args = Args::parse();
    let config = CliConfig::from_env().with_data_dir(args.data_dir);
    let content = config.load_content()?;

    match args.command {
        Command::Eval {
            runes,
            infusions,
            flags,
            familiarity,
            cost_efficiency,
        } => {
            let progression = familiarity
                .into_iter()
                .fold(Progression::new(), |p, (symbol, value)| {
                    p.with_rune_familiarity(symbol, value)
                });
            let mut player = Player::new(ActorId(1), "caster").with_progression(progression);
            if let Some(efficiency) = cost_efficiency {
                player = player.with_cost_efficiency(efficiency);
            }

            let mut spell = SpellFactory::new()
                .create_from_str(player.core.id, &runes)
                .with_context(|| format!("Invalid rune sequence '{}'", runes))?;
            for (index, mana) in infusions {
                spell
                    .add_infusion(index, mana)
                    .with_context(|| format!("Invalid infusion {}:{}", index, mana))?;
            }

            let evaluator = Evaluator::new(&content.runes, &content.config);
            let evaluation = evaluator.prepare(&mut spell, &player);
            tracing::info!(spell = %spell.id, runes = %runes, "evaluated spell");

            let flags: BTreeSet<String> = flags.into_iter().collect();
            let matcher = EvolutionMatcher::new(&content.blueprints, &content.config.evolution);
            let ctx = MatchContext::new().with_actor(&player).with_flags(&flags);
            let evolutions = matcher.list_possible_evolutions(&spell, ctx);

            report::print_evaluation(&spell, &evaluation);
            report::print_evolutions(&evolutions);
        }
        Command::Runes => report::print_runes(&content.runes),
        Command::Hints => report::print_hints(&content.blueprints),
    }

    Ok(())
}

/// Setup logging to stderr, defaulting to `info`.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_infusion(raw: &str) -> Result<(usize, f64), String> {
    let (index, mana) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected INDEX:MANA, got '{}'", raw))?;
    let index = index
        .trim()
        .parse()
        .map_err(|e| format!("invalid index '{}': {}", index, e))?;
    let mana = mana
        .trim()
        .parse()
        .map_err(|e| format!("invalid mana '{}': {}", mana, e))?;
    Ok((index, mana))
}

fn parse_familiarity(raw: &str) -> Result<(RuneSymbol, f64), String> {
    let (symbol, value) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected RUNE:VALUE, got '{}'", raw))?;
    let symbol = symbol
        .trim()
        .parse::<RuneSymbol>()
        .map_err(|_| format!("unknown rune '{}'", symbol))?;
    let value = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid familiarity '{}': {}", value, e))?;
    Ok((symbol, value))
}
