//! Named blueprint loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spell_core::{BlueprintCatalog, NamedSpellBlueprint};

use crate::loaders::{LoadResult, read_file};

/// Blueprint file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintFile {
    pub blueprints: Vec<NamedSpellBlueprint>,
}

/// Loader for named spell blueprints from RON files.
pub struct BlueprintLoader;

impl BlueprintLoader {
    /// Load and validate a blueprint catalog from a RON file.
    ///
    /// File order becomes catalog order, which breaks ranking ties.
    pub fn load(path: &Path) -> LoadResult<BlueprintCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| {
            anyhow::anyhow!("Failed to load blueprints from {}: {}", path.display(), e)
        })
    }

    /// Parse and validate a blueprint catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<BlueprintCatalog> {
        let file: BlueprintFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse blueprint RON: {}", e))?;

        let catalog = BlueprintCatalog::new(file.blueprints)
            .map_err(|e| anyhow::anyhow!("Invalid blueprint catalog: {}", e))?;
        tracing::debug!(
            blueprints = catalog.len(),
            visible = catalog.visible().count(),
            "loaded blueprint catalog"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_requirements_default_to_none() {
        let ron = r#"(blueprints: [(id: "spark", name: "Spark", required_runes: [C])])"#;
        let catalog = BlueprintLoader::parse(ron).unwrap();
        let spark = catalog.get("spark").unwrap();

        assert_eq!(spark.description, "");
        assert!(spark.allowed_extra_runes.is_none());
        assert!(spark.min_damage_focus.is_none());
        assert!(spark.required_flags.is_none());
        assert!(!spark.hidden);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let ron = r#"(blueprints: [
            (id: "spark", name: "Spark", required_runes: [C]),
            (id: "spark", name: "Spark II", required_runes: [C, C]),
        ])"#;
        let err = BlueprintLoader::parse(ron).unwrap_err();
        assert!(err.to_string().contains("defined more than once"));
    }
}
