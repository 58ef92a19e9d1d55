//! Rune alphabet loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::{RuneCatalog, RuneDefinition};

use crate::loaders::{LoadResult, read_file};

/// Rune file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuneFile {
    pub runes: Vec<RuneDefinition>,
}

/// Loader for the rune alphabet from RON files.
pub struct RuneLoader;

impl RuneLoader {
    /// Load and validate a rune catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<RuneCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load runes from {}: {}", path.display(), e))
    }

    /// Parse and validate a rune catalog from RON text.
    ///
    /// The catalog must define all 26 symbols exactly once.
    pub fn parse(content: &str) -> LoadResult<RuneCatalog> {
        let file: RuneFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rune RON: {}", e))?;

        let catalog = RuneCatalog::new(file.runes)
            .map_err(|e| anyhow::anyhow!("Invalid rune catalog: {}", e))?;
        tracing::debug!(runes = catalog.len(), "loaded rune catalog");
        Ok(catalog)
    }
}
