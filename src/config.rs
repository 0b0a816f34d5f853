//! # Matcher Configuration
//!
//! Configuration for the ingredient matcher: the matching mode, the minimum
//! phrase length for whole-phrase matching, and an optional cap on ranked
//! results. Configuration is validated up front; the matching path itself
//! never fails.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Strictness variant used when comparing ingredient strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Whole-phrase boundary match plus canonical-token intersection.
    /// Precise: "egg" does not match "eggplant".
    Strict,
    /// Mutual substring containment plus cross-token containment. Higher
    /// recall, lower precision: "egg" matches "eggplant".
    Loose,
}

/// Configuration options for the ingredient matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Matching strictness
    pub mode: MatchMode,
    /// Minimum length of a normalized detected phrase for whole-phrase
    /// matching; shorter phrases fall back to token comparison only
    pub min_phrase_len: usize,
    /// Maximum number of ranked results to return, unlimited if None
    pub max_results: Option<usize>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::Strict,
            min_phrase_len: 3,
            max_results: None,
        }
    }
}

impl MatcherConfig {
    /// Validate matcher configuration parameters
    pub fn validate(&self) -> AppResult<()> {
        if self.min_phrase_len == 0 {
            return Err(AppError::Config(
                "min_phrase_len must be greater than 0".to_string(),
            ));
        }

        if self.max_results == Some(0) {
            return Err(AppError::Config(
                "max_results must be greater than 0 if provided".to_string(),
            ));
        }

        Ok(())
    }
}
