//! Data-driven spell content and loaders.
//!
//! This crate ships the built-in content and reads the same formats from disk:
//! - Rune alphabet (RON, one definition per symbol)
//! - Named spell blueprints (RON)
//! - Rule constants (TOML)
//!
//! Everything is deserialized straight into `spell-core` types and handed
//! back as validated, immutable catalogs.

pub mod builtin;
pub mod loaders;

pub use builtin::{builtin_blueprints, builtin_config, builtin_runes};
pub use loaders::{BlueprintLoader, ConfigLoader, ContentFactory, LoadResult, RuneLoader};
