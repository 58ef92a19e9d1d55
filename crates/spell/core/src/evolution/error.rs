//! Evolution errors.

use crate::error::{EngineError, ErrorSeverity};

use super::{BlueprintId, Gate};

/// Reasons an evolution request does not produce a spell.
///
/// Both variants are expected outcomes of asking "can this spell evolve?",
/// so callers usually surface them to the player rather than abort.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvolutionError {
    #[error("unknown blueprint '{0}'")]
    UnknownBlueprint(BlueprintId),

    #[error("spell is not eligible for '{blueprint}': {gate} requirement not met")]
    NotEligible { blueprint: BlueprintId, gate: Gate },
}

impl EngineError for EvolutionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownBlueprint(_) => "EVOLUTION_UNKNOWN_BLUEPRINT",
            Self::NotEligible { .. } => "EVOLUTION_NOT_ELIGIBLE",
        }
    }
}
