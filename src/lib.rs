//! # PantryMatch
//!
//! A stateless recipe-matching library: detected ingredient names (manual
//! entry, vision-endpoint output, or classifier labels) are normalized,
//! tokenized, and canonicalized, then matched against a recipe catalog and
//! ranked by match strength.

pub mod catalog;
pub mod config;
pub mod detection;
pub mod errors;
pub mod matcher;
pub mod normalize;
pub mod tokenize;

// Re-export types for easier access
pub use catalog::{parse_catalog, Recipe};
pub use config::{MatchMode, MatcherConfig};
pub use errors::{AppError, AppResult};
pub use matcher::{IngredientMatcher, MatchResult};
