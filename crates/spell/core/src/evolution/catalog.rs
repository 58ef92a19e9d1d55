//! Immutable catalog of named blueprints.

use std::collections::HashMap;

use crate::rune::CatalogError;

use super::{BlueprintId, NamedSpellBlueprint};

/// Blueprints in catalog order, indexed by id.
///
/// Catalog order is the tie-breaker when ranking evolutions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlueprintCatalog {
    blueprints: Vec<NamedSpellBlueprint>,
    index: HashMap<BlueprintId, usize>,
}

impl BlueprintCatalog {
    /// Builds a catalog, rejecting duplicate ids, invalid requirements and
    /// chains that point at unknown blueprints.
    pub fn new(
        blueprints: impl IntoIterator<Item = NamedSpellBlueprint>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for blueprint in blueprints {
            blueprint
                .validate()
                .map_err(|reason| CatalogError::InvalidBlueprint {
                    id: blueprint.id.clone(),
                    reason,
                })?;
            if catalog.index.contains_key(&blueprint.id) {
                return Err(CatalogError::DuplicateBlueprint(blueprint.id));
            }
            catalog
                .index
                .insert(blueprint.id.clone(), catalog.blueprints.len());
            catalog.blueprints.push(blueprint);
        }

        for blueprint in &catalog.blueprints {
            if let Some(source) = &blueprint.requires_named_source_id {
                if !catalog.index.contains_key(source) {
                    return Err(CatalogError::InvalidBlueprint {
                        id: blueprint.id.clone(),
                        reason: "chained source blueprint does not exist",
                    });
                }
            }
        }

        tracing::debug!(blueprints = catalog.len(), "blueprint catalog built");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&NamedSpellBlueprint> {
        self.index.get(id).map(|i| &self.blueprints[*i])
    }

    /// All blueprints in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, NamedSpellBlueprint> {
        self.blueprints.iter()
    }

    /// Blueprints that may be shown as hints.
    pub fn visible(&self) -> impl Iterator<Item = &NamedSpellBlueprint> + '_ {
        self.blueprints.iter().filter(|b| !b.hidden)
    }

    pub fn len(&self) -> usize {
        self.blueprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.is_empty()
    }
}
