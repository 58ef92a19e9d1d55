//! Content factory for building catalogs from a data directory.

use std::path::{Path, PathBuf};

use spell_core::{BlueprintCatalog, RuneCatalog, SpellConfig};

use crate::loaders::{BlueprintLoader, ConfigLoader, LoadResult, RuneLoader};

/// Content factory that loads all spell content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── runes.ron
/// └── blueprints.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rule constants from `config.toml`.
    pub fn load_config(&self) -> LoadResult<SpellConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the rune alphabet from `runes.ron`.
    pub fn load_runes(&self) -> LoadResult<RuneCatalog> {
        RuneLoader::load(&self.data_dir.join("runes.ron"))
    }

    /// Load named blueprints from `blueprints.ron`.
    pub fn load_blueprints(&self) -> LoadResult<BlueprintCatalog> {
        BlueprintLoader::load(&self.data_dir.join("blueprints.ron"))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_files_name_the_path() {
        let factory = ContentFactory::new("/nonexistent/spell-data");
        let err = factory.load_runes().unwrap_err();
        assert!(err.to_string().contains("runes.ron"));
    }
}
