//! Common error infrastructure for spell-core.
//!
//! This module provides the shared severity classification and trait used by
//! every error type in the crate. Domain-specific errors (`CatalogError`,
//! `SpellError`, `EvolutionError`) live next to the code that raises them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error enum with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Stable Codes**: Every variant maps to a static string for metrics and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: An expected negative outcome; the caller may try something else
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
/// - **Fatal**: Content or configuration is unusable, the engine cannot proceed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Expected outcome such as a spell not qualifying for an evolution.
    Recoverable,

    /// Invalid input: unknown rune symbols, out-of-range infusions.
    Validation,

    /// Unexpected state inconsistency.
    Internal,

    /// Catalog content is incomplete or malformed.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates broken content or a bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all spell-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
