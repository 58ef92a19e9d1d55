//! Process configuration read from the environment.
use std::env;
use std::path::PathBuf;

use anyhow::Result;
use spell_content::{ContentFactory, builtin_blueprints, builtin_config, builtin_runes};
use spell_core::{BlueprintCatalog, RuneCatalog, SpellConfig};

/// Command-line front end configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `runes.ron`, `blueprints.ron` and `config.toml`.
    /// Built-in content is used when unset.
    pub data_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SPELLFORGE_DATA_DIR` - Content directory (default: built-in content)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("SPELLFORGE_DATA_DIR"),
        }
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if data_dir.is_some() {
            self.data_dir = data_dir;
        }
        self
    }

    /// Loads the catalogs and rule constants this configuration points at.
    pub fn load_content(&self) -> Result<Content> {
        match &self.data_dir {
            Some(dir) => {
                tracing::info!("Loading content from {}", dir.display());
                let factory = ContentFactory::new(dir);
                Ok(Content {
                    runes: factory.load_runes()?,
                    blueprints: factory.load_blueprints()?,
                    config: factory.load_config()?,
                })
            }
            None => {
                tracing::debug!("Using built-in content");
                Ok(Content {
                    runes: builtin_runes()?,
                    blueprints: builtin_blueprints()?,
                    config: builtin_config()?,
                })
            }
        }
    }
}

/// Everything the engine needs, loaded once per process.
pub struct Content {
    pub runes: RuneCatalog,
    pub blueprints: BlueprintCatalog,
    pub config: SpellConfig,
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
