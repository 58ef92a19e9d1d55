//! Spell factory.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::actor::ActorId;
use crate::rune::RuneSymbol;

use super::{Spell, SpellError, SpellId};

/// Builds new, unevaluated spells with unique ids.
///
/// Ids are `spell-{n}` from a per-factory counter. The factory can be shared
/// across threads; creating a spell has no other side effects.
#[derive(Debug, Default)]
pub struct SpellFactory {
    next_id: AtomicU64,
}

impl SpellFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts numbering at `first` (useful when resuming from persisted spells).
    pub fn starting_at(first: u64) -> Self {
        Self {
            next_id: AtomicU64::new(first),
        }
    }

    fn allocate_id(&self) -> SpellId {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        SpellId(format!("spell-{n}"))
    }

    /// Creates an unnamed spell from a rune sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::EmptySequence`] if `runes` is empty.
    pub fn create_nameless(
        &self,
        owner: ActorId,
        runes: &[RuneSymbol],
    ) -> Result<Spell, SpellError> {
        if runes.is_empty() {
            return Err(SpellError::EmptySequence);
        }
        Spell::new(self.allocate_id(), owner, runes.to_vec())
    }

    /// Parses `raw` (e.g. `"FAR"`) and creates an unnamed spell.
    ///
    /// # Errors
    ///
    /// - [`SpellError::UnknownRune`] if any character is outside the alphabet
    /// - [`SpellError::EmptySequence`] if `raw` has no runes
    pub fn create_from_str(&self, owner: ActorId, raw: &str) -> Result<Spell, SpellError> {
        let runes = RuneSymbol::parse_sequence(raw)?;
        self.create_nameless(owner, &runes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rune::CatalogError;

    #[test]
    fn assigns_unique_ids() {
        let factory = SpellFactory::new();
        let a = factory.create_from_str(ActorId(1), "FAR").unwrap();
        let b = factory.create_from_str(ActorId(1), "FAR").unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.runes(), b.runes());
        assert_eq!(a.owner, ActorId(1));
    }

    #[test]
    fn resumes_numbering() {
        let factory = SpellFactory::starting_at(41);
        let spell = factory.create_from_str(ActorId(2), "L").unwrap();
        assert_eq!(spell.id.as_str(), "spell-41");
    }

    #[test]
    fn rejects_unknown_and_empty_input() {
        let factory = SpellFactory::new();
        assert_eq!(
            factory.create_from_str(ActorId(1), "F#R"),
            Err(SpellError::UnknownRune(CatalogError::UnknownRune(
                "#".to_string()
            )))
        );
        assert_eq!(
            factory.create_from_str(ActorId(1), "   "),
            Err(SpellError::EmptySequence)
        );
        assert_eq!(
            factory.create_nameless(ActorId(1), &[]),
            Err(SpellError::EmptySequence)
        );
    }
}
