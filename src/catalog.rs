//! # Recipe Catalog Records
//!
//! Typed recipe records and the boundary mapping from the external store's
//! dynamic JSON rows. Rows are validated as they are mapped; malformed rows
//! are skipped with a warning rather than failing the whole catalog, and
//! never reach the matcher.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A recipe as supplied by the external catalog
///
/// The matcher treats recipes as read-only input: only `ingredients` is
/// consulted for matching, the remaining fields are descriptive metadata
/// passed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Catalog identifier
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Free-text description
    #[serde(default)]
    pub description: String,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Descriptive tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text ingredient lines, as authored
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Validate a catalog record before it reaches the matcher
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry_match::catalog::Recipe;
    ///
    /// let recipe = Recipe {
    ///     id: "r1".to_string(),
    ///     title: "Shakshuka".to_string(),
    ///     description: String::new(),
    ///     category: String::new(),
    ///     tags: vec![],
    ///     ingredients: vec!["4 eggs".to_string(), "2 bell peppers".to_string()],
    /// };
    /// assert!(recipe.validate().is_ok());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::Validation("Recipe id cannot be empty".to_string()));
        }

        if self.title.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Recipe '{}' title cannot be empty",
                self.id
            )));
        }

        if self.ingredients.is_empty() {
            return Err(AppError::Validation(format!(
                "Recipe '{}' must list at least one ingredient",
                self.id
            )));
        }

        if self.ingredients.iter().any(|i| i.trim().is_empty()) {
            return Err(AppError::Validation(format!(
                "Recipe '{}' contains a blank ingredient line",
                self.id
            )));
        }

        Ok(())
    }
}

/// Map a dynamic JSON array of catalog rows into validated recipes
///
/// Rows that fail to deserialize or validate are skipped with a warning;
/// a payload that is not a JSON array at the top level is a hard error.
///
/// # Examples
///
/// ```rust
/// use pantry_match::catalog::parse_catalog;
///
/// let json = r#"[
///     {"id": "r1", "title": "Dal", "ingredients": ["1 cup lentils"]},
///     {"id": "", "title": "Broken", "ingredients": ["salt"]}
/// ]"#;
/// let recipes = parse_catalog(json).unwrap();
/// assert_eq!(recipes.len(), 1);
/// assert_eq!(recipes[0].id, "r1");
/// ```
pub fn parse_catalog(json: &str) -> AppResult<Vec<Recipe>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let row_count = rows.len();

    let mut recipes = Vec::with_capacity(row_count);
    for (index, row) in rows.into_iter().enumerate() {
        match serde_json::from_value::<Recipe>(row) {
            Ok(recipe) => match recipe.validate() {
                Ok(()) => recipes.push(recipe),
                Err(e) => {
                    warn!(row = index, error = %e, "Skipping invalid catalog row");
                }
            },
            Err(e) => {
                warn!(row = index, error = %e, "Skipping malformed catalog row");
            }
        }
    }

    debug!(
        total_rows = row_count,
        accepted = recipes.len(),
        "Mapped recipe catalog"
    );
    Ok(recipes)
}
