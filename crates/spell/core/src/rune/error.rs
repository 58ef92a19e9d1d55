//! Catalog construction and lookup errors.

use crate::error::{EngineError, ErrorSeverity};
use crate::evolution::BlueprintId;

use super::RuneSymbol;

/// Errors raised while building or querying the rune and blueprint catalogs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// A symbol outside the fixed 26-rune alphabet.
    #[error("unknown rune '{0}'")]
    UnknownRune(String),

    /// The rune catalog has no definition for this symbol.
    #[error("rune catalog is missing a definition for {0}")]
    MissingRune(RuneSymbol),

    #[error("rune {0} is defined more than once")]
    DuplicateRune(RuneSymbol),

    #[error("rune {symbol} is invalid: {reason}")]
    InvalidRune {
        symbol: RuneSymbol,
        reason: &'static str,
    },

    #[error("blueprint '{0}' is defined more than once")]
    DuplicateBlueprint(BlueprintId),

    #[error("blueprint '{id}' is invalid: {reason}")]
    InvalidBlueprint {
        id: BlueprintId,
        reason: &'static str,
    },
}

impl EngineError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            UnknownRune(_) => ErrorSeverity::Validation,
            MissingRune(_)
            | DuplicateRune(_)
            | InvalidRune { .. }
            | DuplicateBlueprint(_)
            | InvalidBlueprint { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            UnknownRune(_) => "CATALOG_UNKNOWN_RUNE",
            MissingRune(_) => "CATALOG_MISSING_RUNE",
            DuplicateRune(_) => "CATALOG_DUPLICATE_RUNE",
            InvalidRune { .. } => "CATALOG_INVALID_RUNE",
            DuplicateBlueprint(_) => "CATALOG_DUPLICATE_BLUEPRINT",
            InvalidBlueprint { .. } => "CATALOG_INVALID_BLUEPRINT",
        }
    }
}
