//! # Ingredient Matcher
//!
//! This module matches detected ingredient strings against a recipe catalog
//! and ranks recipes by match strength.
//!
//! ## Matching algorithm
//!
//! For each (recipe ingredient, detected ingredient) pair, both strings are
//! normalized, then compared in two stages:
//!
//! 1. **Phrase match**: the full normalized detected string, regex-escaped
//!    and anchored at word boundaries, is tested against the normalized
//!    recipe string. This lets "egg" match "2 large eggs" without matching
//!    inside "eggplant". Phrases shorter than the configured minimum skip
//!    this stage.
//! 2. **Token-set fallback**: both sides are tokenized and canonicalized;
//!    any shared canonical token is a match. This is where plural forms and
//!    synonyms ("capsicum" vs "bell pepper") meet.
//!
//! Scoring counts recipe-ingredient entries: a single detected ingredient
//! can contribute to several recipe-ingredient matches. Detected strings are
//! normalized, compiled, and tokenized once per query, not once per pair.
//!
//! The whole path is total: any string input yields a boolean or a ranked
//! list, never an error or a panic.

use crate::catalog::Recipe;
use crate::config::{MatchMode, MatcherConfig};
use crate::errors::AppResult;
use crate::normalize::normalize;
use crate::tokenize::tokenize;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// A ranked match for one recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    /// The matched recipe
    pub recipe: &'a Recipe,
    /// Number of the recipe's ingredient lines that matched at least one
    /// detected ingredient
    pub match_count: usize,
    /// The matching ingredient lines, as authored in the recipe
    pub matched_ingredients: Vec<String>,
}

/// Precomputed comparison state for one detected ingredient
struct DetectedQuery {
    /// Normalized detected string, used for loose substring comparison
    normalized: String,
    /// Boundary-anchored phrase pattern, strict mode only
    phrase: Option<Regex>,
    /// Canonical token set
    tokens: HashSet<String>,
}

impl DetectedQuery {
    /// Normalize, compile, and tokenize one detected ingredient
    ///
    /// Returns None when the string normalizes to nothing, in which case it
    /// cannot match anything. A phrase pattern that fails to compile is
    /// logged and dropped; the escaped input makes that unreachable in
    /// practice, and the token fallback still applies.
    fn build(detected: &str, config: &MatcherConfig) -> Option<Self> {
        let normalized = normalize(detected);
        if normalized.is_empty() {
            return None;
        }

        let phrase = if config.mode == MatchMode::Strict
            && normalized.chars().count() >= config.min_phrase_len
        {
            let pattern = format!(r"(^|\s){}(\s|$)", regex::escape(&normalized));
            match Regex::new(&pattern) {
                Ok(re) => Some(re),
                Err(e) => {
                    warn!(
                        phrase = %normalized,
                        error = %e,
                        "Failed to compile phrase pattern, using token comparison only"
                    );
                    None
                }
            }
        } else {
            None
        };

        let tokens = tokenize(&normalized).into_iter().collect();
        Some(Self {
            normalized,
            phrase,
            tokens,
        })
    }
}

/// Stateless matcher for detected ingredients against recipe catalogs
///
/// The matcher is immutable after construction and safe to share across
/// threads; every invocation allocates only local data.
pub struct IngredientMatcher {
    /// Configuration options
    config: MatcherConfig,
}

impl IngredientMatcher {
    /// Create a matcher with the default configuration (strict mode)
    pub fn new() -> Self {
        Self {
            config: MatcherConfig::default(),
        }
    }

    /// Create a matcher with custom configuration
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry_match::{IngredientMatcher, MatcherConfig, MatchMode};
    ///
    /// let config = MatcherConfig {
    ///     mode: MatchMode::Loose,
    ///     ..Default::default()
    /// };
    /// let matcher = IngredientMatcher::with_config(config)?;
    /// # Ok::<(), pantry_match::AppError>(())
    /// ```
    pub fn with_config(config: MatcherConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Check whether a recipe ingredient line matches a detected ingredient
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry_match::IngredientMatcher;
    ///
    /// let matcher = IngredientMatcher::new();
    /// assert!(matcher.ingredients_match("800g chicken breast", "chicken"));
    /// assert!(matcher.ingredients_match("2 large eggs", "egg"));
    /// assert!(matcher.ingredients_match("capsicum", "bell pepper"));
    /// assert!(!matcher.ingredients_match("eggplant curry", "egg"));
    /// ```
    pub fn ingredients_match(&self, recipe_ingredient: &str, detected_ingredient: &str) -> bool {
        let query = match DetectedQuery::build(detected_ingredient, &self.config) {
            Some(query) => query,
            None => return false,
        };

        let recipe_norm = normalize(recipe_ingredient);
        if recipe_norm.is_empty() {
            return false;
        }
        let recipe_tokens: HashSet<String> = tokenize(&recipe_norm).into_iter().collect();

        self.matches_query(&recipe_norm, &recipe_tokens, &query)
    }

    /// Match a recipe catalog against detected ingredients, ranked by
    /// descending match count
    ///
    /// Recipes with no matching ingredient are excluded. Ties keep the
    /// catalog's own relative order (the sort is stable), so a caller
    /// supplying reverse-chronological rows gets newest-first within equal
    /// counts. Empty inputs yield an empty result list, not an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry_match::{IngredientMatcher, Recipe};
    ///
    /// let recipes = vec![
    ///     Recipe {
    ///         id: "r1".to_string(),
    ///         title: "Omelette".to_string(),
    ///         description: String::new(),
    ///         category: String::new(),
    ///         tags: vec![],
    ///         ingredients: vec!["3 eggs".to_string(), "50g butter".to_string()],
    ///     },
    ///     Recipe {
    ///         id: "r2".to_string(),
    ///         title: "Fruit salad".to_string(),
    ///         description: String::new(),
    ///         category: String::new(),
    ///         tags: vec![],
    ///         ingredients: vec!["2 apples".to_string()],
    ///     },
    /// ];
    /// let detected = vec!["egg".to_string(), "butter".to_string()];
    ///
    /// let matcher = IngredientMatcher::new();
    /// let results = matcher.match_recipes(&recipes, &detected);
    ///
    /// assert_eq!(results.len(), 1);
    /// assert_eq!(results[0].recipe.id, "r1");
    /// assert_eq!(results[0].match_count, 2);
    /// ```
    pub fn match_recipes<'a>(
        &self,
        recipes: &'a [Recipe],
        detected: &[String],
    ) -> Vec<MatchResult<'a>> {
        if recipes.is_empty() || detected.is_empty() {
            return Vec::new();
        }

        let queries: Vec<DetectedQuery> = detected
            .iter()
            .filter_map(|d| DetectedQuery::build(d, &self.config))
            .collect();
        if queries.is_empty() {
            debug!("No usable detected ingredients after normalization");
            return Vec::new();
        }

        let mut results = Vec::new();
        for recipe in recipes {
            let mut matched_ingredients = Vec::new();
            for ingredient in &recipe.ingredients {
                let norm = normalize(ingredient);
                if norm.is_empty() {
                    continue;
                }
                let tokens: HashSet<String> = tokenize(&norm).into_iter().collect();
                if queries
                    .iter()
                    .any(|query| self.matches_query(&norm, &tokens, query))
                {
                    matched_ingredients.push(ingredient.clone());
                }
            }

            if !matched_ingredients.is_empty() {
                debug!(
                    recipe_id = %recipe.id,
                    match_count = matched_ingredients.len(),
                    "Recipe matched"
                );
                results.push(MatchResult {
                    recipe,
                    match_count: matched_ingredients.len(),
                    matched_ingredients,
                });
            }
        }

        // Stable sort keeps the catalog order for equal counts
        results.sort_by(|a, b| b.match_count.cmp(&a.match_count));

        if let Some(max_results) = self.config.max_results {
            results.truncate(max_results);
        }

        info!(
            recipes = recipes.len(),
            detected = detected.len(),
            matched = results.len(),
            "Ranked recipe matches"
        );
        results
    }

    /// Compare one normalized recipe ingredient against a detected query
    fn matches_query(
        &self,
        recipe_norm: &str,
        recipe_tokens: &HashSet<String>,
        query: &DetectedQuery,
    ) -> bool {
        match self.config.mode {
            MatchMode::Strict => {
                if let Some(phrase) = &query.phrase {
                    if phrase.is_match(recipe_norm) {
                        return true;
                    }
                }
                !recipe_tokens.is_disjoint(&query.tokens)
            }
            MatchMode::Loose => {
                if recipe_norm.contains(query.normalized.as_str())
                    || query.normalized.contains(recipe_norm)
                {
                    return true;
                }
                recipe_tokens.iter().any(|rt| {
                    query
                        .tokens
                        .iter()
                        .any(|dt| rt.contains(dt.as_str()) || dt.contains(rt.as_str()))
                })
            }
        }
    }
}

impl Default for IngredientMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let matcher = IngredientMatcher::new();
        // Must not panic, and the parenthesised form still matches after
        // normalization strips the punctuation
        assert!(matcher.ingredients_match("1 onion", "o(n)ion"));
        assert!(!matcher.ingredients_match("celery", "o(n)ion"));
        assert!(matcher.ingredients_match("basil [fresh]", "basil"));
    }

    #[test]
    fn test_empty_and_blank_inputs_never_match() {
        let matcher = IngredientMatcher::new();
        assert!(!matcher.ingredients_match("", "tomato"));
        assert!(!matcher.ingredients_match("tomato", ""));
        assert!(!matcher.ingredients_match("   ", "   "));
        // Normalizes to nothing: quantity and modifier only
        assert!(!matcher.ingredients_match("2 cups", "fresh"));
    }

    #[test]
    fn test_short_phrase_falls_back_to_tokens() {
        let matcher = IngredientMatcher::new();
        // "ox" is below min_phrase_len and shorter than the token minimum,
        // so it cannot match at all
        assert!(!matcher.ingredients_match("oxtail stew", "ox"));
    }

    #[test]
    fn test_loose_mode_substring_containment() {
        let matcher = IngredientMatcher::with_config(MatcherConfig {
            mode: MatchMode::Loose,
            ..Default::default()
        })
        .unwrap();
        assert!(matcher.ingredients_match("eggplant curry", "egg"));
        assert!(matcher.ingredients_match("800g chicken breast", "chicken"));
        assert!(!matcher.ingredients_match("celery", "tomato"));
    }

    #[test]
    fn test_phrase_match_on_unstemmed_text() {
        let matcher = IngredientMatcher::new();
        // Phrase layer sees "2 eggs", not "egg"; the token layer bridges
        // the plural
        assert!(matcher.ingredients_match("2 eggs", "egg"));
        assert!(matcher.ingredients_match("2 eggs", "eggs"));
    }
}
