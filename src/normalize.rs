//! # Ingredient Normalization
//!
//! This module reduces free-text ingredient strings to a comparable form,
//! including quantity/unit stripping and preparation-modifier removal.
//!
//! ## Pipeline
//!
//! Normalization is an ordered sequence of pure string transforms, each
//! independently callable:
//!
//! 1. Lowercase
//! 2. Strip punctuation (hyphens are kept)
//! 3. Strip quantity + unit phrases ("800g", "2 cups", "tbsp")
//! 4. Strip preparation modifiers ("chopped", "fresh", "large", ...)
//! 5. Collapse repeated whitespace
//!
//! Quantity stripping runs before modifier stripping so a phrase like
//! "2 cups chopped flour" degrades cleanly in one pass, which keeps the
//! whole pipeline idempotent: `normalize(normalize(x)) == normalize(x)`.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

/// Measurement units removed during normalization, together with an
/// optional leading integer quantity.
const UNITS: [&str; 17] = [
    "g",
    "kg",
    "mg",
    "ml",
    "l",
    "cup",
    "cups",
    "tablespoon",
    "tablespoons",
    "teaspoon",
    "teaspoons",
    "tbsp",
    "tsp",
    "oz",
    "lb",
    "pound",
    "pounds",
];

/// Preparation-modifier words removed as whole words during normalization.
const MODIFIERS: [&str; 13] = [
    "chopped", "diced", "sliced", "minced", "grated", "fresh", "dried", "ground", "whole",
    "large", "small", "medium", "optional",
];

/// Build the quantity + unit alternation pattern from the unit table
///
/// Units are escaped and sorted longest-first so that "cups" is never
/// partially consumed as "cup". The leading integer is optional, covering
/// both "800g butter" and a bare trailing "tbsp".
fn build_quantity_pattern() -> String {
    let mut units: Vec<&str> = UNITS.to_vec();
    units.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let escaped: Vec<String> = units.iter().map(|u| regex::escape(u)).collect();
    format!(r"(?i)\b(?:\d+\s*)?(?:{})\b", escaped.join("|"))
}

/// Build the whole-word modifier alternation pattern from the modifier table
fn build_modifier_pattern() -> String {
    let mut words: Vec<&str> = MODIFIERS.to_vec();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!(r"(?i)\b(?:{})\b", escaped.join("|"))
}

// Lazy static regexes to avoid recompilation
lazy_static! {
    static ref PUNCTUATION_PATTERN: Regex =
        Regex::new(r"[^\w\s-]").expect("Punctuation pattern should be valid");
    static ref QUANTITY_PATTERN: Regex =
        Regex::new(&build_quantity_pattern()).expect("Quantity pattern should be valid");
    static ref MODIFIER_PATTERN: Regex =
        Regex::new(&build_modifier_pattern()).expect("Modifier pattern should be valid");
}

/// Normalize a free-text ingredient string for comparison
///
/// Always returns a string, possibly empty; there are no error conditions.
///
/// # Examples
///
/// ```rust
/// use pantry_match::normalize::normalize;
///
/// assert_eq!(normalize("2 cups chopped fresh cilantro"), "cilantro");
/// assert_eq!(normalize("800g Chicken Breast, diced"), "chicken breast");
/// assert_eq!(normalize("  Tomato!! "), "tomato");
/// ```
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = strip_punctuation(&lowered);
    let no_quantities = strip_quantities(&stripped);
    let no_modifiers = strip_modifiers(&no_quantities);
    let normalized = collapse_whitespace(&no_modifiers);
    trace!(input = %text, output = %normalized, "Normalized ingredient text");
    normalized
}

/// Remove punctuation, keeping word characters, whitespace, and hyphens
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION_PATTERN.replace_all(text, "").into_owned()
}

/// Remove quantity + unit phrases such as "800g", "2 cups", or a bare "tbsp"
///
/// Matches are replaced with a space rather than deleted outright so that
/// neighbouring words are never joined together.
pub fn strip_quantities(text: &str) -> String {
    QUANTITY_PATTERN.replace_all(text, " ").into_owned()
}

/// Remove preparation-modifier words as whole-word matches
pub fn strip_modifiers(text: &str) -> String {
    MODIFIER_PATTERN.replace_all(text, " ").into_owned()
}

/// Collapse repeated whitespace to single spaces and trim the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_punctuation() {
        assert_eq!(normalize("Tomato!!"), "tomato");
        assert_eq!(normalize("O(n)ion"), "onion");
        assert_eq!(normalize("sun-dried tomato"), "sun- tomato");
    }

    #[test]
    fn test_hyphens_survive_punctuation_strip() {
        assert_eq!(strip_punctuation("all-purpose flour!"), "all-purpose flour");
    }

    #[test]
    fn test_quantity_and_unit_stripping() {
        assert_eq!(normalize("800g chicken breast"), "chicken breast");
        assert_eq!(normalize("2 cups flour"), "flour");
        assert_eq!(normalize("1 tablespoon olive oil"), "olive oil");
        assert_eq!(normalize("3 tbsp sugar"), "sugar");
    }

    #[test]
    fn test_bare_unit_stripping() {
        // The leading integer is optional in the quantity pattern
        assert_eq!(normalize("cups of flour"), "of flour");
    }

    #[test]
    fn test_unit_not_stripped_inside_words() {
        // "l" and "g" only match as standalone words
        assert_eq!(normalize("olive oil"), "olive oil");
        assert_eq!(normalize("eggs"), "eggs");
    }

    #[test]
    fn test_modifier_stripping() {
        assert_eq!(normalize("chopped fresh basil"), "basil");
        assert_eq!(normalize("2 large eggs"), "2 eggs");
        assert_eq!(normalize("1 medium onion, diced"), "1 onion");
    }

    #[test]
    fn test_whitespace_collapse() {
        assert_eq!(collapse_whitespace("  a \t b\n c  "), "a b c");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let samples = [
            "2 cups chopped fresh cilantro",
            "800g chicken breast, diced",
            "1/2 teaspoon ground cumin",
            "Capsicum (bell pepper)",
            "",
            "   ",
            "plain yoghurt",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_fraction_quantities_degrade_cleanly() {
        // Punctuation stripping removes the slash before unit stripping runs
        assert_eq!(normalize("1/2 cup sugar"), "sugar");
        assert_eq!(normalize("1.5 l milk"), "milk");
    }
}
