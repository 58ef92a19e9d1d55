//! Spell construction errors.

use crate::error::{EngineError, ErrorSeverity};
use crate::rune::CatalogError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("a spell needs at least one rune")]
    EmptySequence,

    #[error(transparent)]
    UnknownRune(#[from] CatalogError),

    #[error("infusion index {index} is out of range for a {len}-rune spell")]
    InfusionOutOfRange { index: usize, len: usize },

    #[error("infusion at index {index} must carry a non-negative, finite amount of mana")]
    InvalidInfusion { index: usize },
}

impl EngineError for SpellError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownRune(inner) => inner.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySequence => "SPELL_EMPTY_SEQUENCE",
            Self::UnknownRune(inner) => inner.error_code(),
            Self::InfusionOutOfRange { .. } => "SPELL_INFUSION_OUT_OF_RANGE",
            Self::InvalidInfusion { .. } => "SPELL_INVALID_INFUSION",
        }
    }
}
