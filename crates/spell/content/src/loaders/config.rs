//! Rule configuration loader.

use std::path::Path;

use spell_core::SpellConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`SpellConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<SpellConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SpellConfig> {
        let config: SpellConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_files_keep_defaults() {
        let config = ConfigLoader::parse("[cost]\nmax_efficiency = 0.5\n").unwrap();
        assert_eq!(config.cost.max_efficiency, 0.5);
        assert_eq!(config.formation, SpellConfig::default().formation);
        assert_eq!(config.progression.xp_half_point, 100.0);
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), SpellConfig::default());
    }
}
