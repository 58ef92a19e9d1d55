//! Content embedded in the binary.

use spell_core::{BlueprintCatalog, RuneCatalog, SpellConfig};

use crate::loaders::{BlueprintLoader, ConfigLoader, LoadResult, RuneLoader};

const RUNES_RON: &str = include_str!("../data/runes.ron");
const BLUEPRINTS_RON: &str = include_str!("../data/blueprints.ron");
const CONFIG_TOML: &str = include_str!("../data/config.toml");

/// The shipped 26-rune alphabet.
pub fn builtin_runes() -> LoadResult<RuneCatalog> {
    RuneLoader::parse(RUNES_RON).map_err(|e| anyhow::anyhow!("Failed to load runes.ron: {}", e))
}

/// The shipped named blueprints.
pub fn builtin_blueprints() -> LoadResult<BlueprintCatalog> {
    BlueprintLoader::parse(BLUEPRINTS_RON)
        .map_err(|e| anyhow::anyhow!("Failed to load blueprints.ron: {}", e))
}

/// The shipped rule constants.
pub fn builtin_config() -> LoadResult<SpellConfig> {
    ConfigLoader::parse(CONFIG_TOML)
        .map_err(|e| anyhow::anyhow!("Failed to load config.toml: {}", e))
}
