//! Immutable rune catalog.

use super::{CatalogError, RuneDefinition, RuneSymbol};

/// Complete lookup table of rune definitions, one per symbol.
///
/// Construction validates that the catalog is total over the alphabet and
/// that every definition is within range, so [`RuneCatalog::get`] never
/// misses. The catalog is constructed explicitly and passed to the evaluator;
/// tests substitute their own fixtures.
#[derive(Clone, Debug, PartialEq)]
pub struct RuneCatalog {
    /// Indexed by [`RuneSymbol::as_index`].
    runes: Vec<RuneDefinition>,
}

impl RuneCatalog {
    /// Builds a catalog from exactly one definition per symbol.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateRune`] if a symbol is defined twice
    /// - [`CatalogError::InvalidRune`] if a definition is out of range
    /// - [`CatalogError::MissingRune`] for the first symbol without a definition
    pub fn new(definitions: impl IntoIterator<Item = RuneDefinition>) -> Result<Self, CatalogError> {
        let mut slots: [Option<RuneDefinition>; RuneSymbol::COUNT] =
            std::array::from_fn(|_| None);

        for definition in definitions {
            let symbol = definition.symbol;
            definition
                .validate()
                .map_err(|reason| CatalogError::InvalidRune { symbol, reason })?;

            let slot = &mut slots[symbol.as_index()];
            if slot.is_some() {
                return Err(CatalogError::DuplicateRune(symbol));
            }
            *slot = Some(definition);
        }

        let mut runes = Vec::with_capacity(RuneSymbol::COUNT);
        for (symbol, slot) in RuneSymbol::all().into_iter().zip(slots) {
            runes.push(slot.ok_or(CatalogError::MissingRune(symbol))?);
        }

        tracing::debug!(runes = runes.len(), "rune catalog built");
        Ok(Self { runes })
    }

    /// Returns the definition for a symbol.
    #[inline]
    pub fn get(&self, symbol: RuneSymbol) -> &RuneDefinition {
        &self.runes[symbol.as_index()]
    }

    /// Resolves a raw symbol such as `"F"` or `"f"`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownRune`] if `raw` is not one of the 26 symbols.
    pub fn lookup(&self, raw: &str) -> Result<&RuneDefinition, CatalogError> {
        let symbol = raw
            .trim()
            .parse::<RuneSymbol>()
            .map_err(|_| CatalogError::UnknownRune(raw.to_string()))?;
        Ok(self.get(symbol))
    }

    /// Iterates over all definitions in canonical `A..=Z` order.
    ///
    /// The iterator is `Clone`, so a listing can be restarted cheaply.
    pub fn list(&self) -> std::slice::Iter<'_, RuneDefinition> {
        self.runes.iter()
    }

    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuneCatalog {
    type Item = &'a RuneDefinition;
    type IntoIter = std::slice::Iter<'a, RuneDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.list()
    }
}
