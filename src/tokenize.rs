//! # Tokenization and Canonicalization
//!
//! This module turns a normalized ingredient string into canonical tokens,
//! the unit of exact-match comparison for the matcher's token fallback.
//!
//! Tokens are whitespace-separated words longer than two characters that are
//! not stopwords, singularized with a small suffix heuristic and then mapped
//! through a fixed synonym table. Order of operations matters: tokens are
//! singularized before the synonym lookup, so the table carries singular
//! keys (plus the post-singularization spellings the suffix heuristic
//! produces, e.g. "chily" for "chilies").

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Words ignored during tokenization
    static ref STOPWORDS: HashSet<&'static str> =
        ["and", "or", "with", "of", "the", "a", "an", "to", "for"]
            .into_iter()
            .collect();

    /// Canonical synonym table, keyed by singularized token
    static ref SYNONYMS: HashMap<&'static str, &'static str> = [
        ("chilli", "chili"),
        ("chile", "chili"),
        ("chil", "chili"),
        ("chily", "chili"),
        ("chilly", "chili"),
        ("chilies", "chili"),
        ("coriander", "cilantro"),
        ("brinjal", "eggplant"),
        ("aubergine", "eggplant"),
        ("aubergin", "eggplant"),
        ("garbanzo", "chickpea"),
        ("garbanzoes", "chickpea"),
        ("yogurt", "yoghurt"),
        ("curd", "yoghurt"),
        ("capsicum", "bell-pepper"),
        ("bell", "bell-pepper"),
        ("scallion", "green-onion"),
        ("spring-onion", "green-onion"),
        ("maida", "all-purpose-flour"),
        ("all-purpose", "all-purpose-flour"),
    ]
    .into_iter()
    .collect();
}

/// Extract canonical tokens from a normalized ingredient string
///
/// # Examples
///
/// ```rust
/// use pantry_match::tokenize::tokenize;
///
/// assert_eq!(tokenize("2 eggs"), vec!["egg"]);
/// assert_eq!(tokenize("capsicum"), vec!["bell-pepper"]);
/// assert_eq!(tokenize("rice and peas"), vec!["rice", "pea"]);
/// ```
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .filter(|t| t.chars().count() > 2)
        .filter(|t| !STOPWORDS.contains(*t))
        .map(|t| canonicalize(&singularize(t)))
        .collect()
}

/// Reduce a token to singular form with a small suffix heuristic
///
/// Applies the first matching rule: `ies` becomes `y`, `es` is dropped, a
/// trailing `s` is dropped, each under a length guard that leaves short
/// tokens ("gas", "ies") untouched.
///
/// # Examples
///
/// ```rust
/// use pantry_match::tokenize::singularize;
///
/// assert_eq!(singularize("berries"), "berry");
/// assert_eq!(singularize("tomatoes"), "tomato");
/// assert_eq!(singularize("eggs"), "egg");
/// assert_eq!(singularize("couscous"), "couscou");
/// assert_eq!(singularize("gas"), "gas");
/// ```
pub fn singularize(token: &str) -> String {
    if token.ends_with("ies") && token.len() > 4 {
        format!("{}y", &token[..token.len() - 3])
    } else if token.ends_with("es") && token.len() > 4 {
        token[..token.len() - 2].to_string()
    } else if token.ends_with('s') && token.len() > 3 {
        token[..token.len() - 1].to_string()
    } else {
        token.to_string()
    }
}

/// Map a singularized token through the synonym table
///
/// Unmapped tokens pass through unchanged.
pub fn canonicalize(token: &str) -> String {
    match SYNONYMS.get(token) {
        Some(canonical) => canonical.to_string(),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_tokens_and_stopwords_dropped() {
        assert_eq!(tokenize("2 oz of ham"), vec!["ham"]);
        assert_eq!(tokenize("salt and pepper"), vec!["salt", "pepper"]);
        assert!(tokenize("a an to").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_singularize_length_guards() {
        // Too short for each rule
        assert_eq!(singularize("ies"), "ies");
        assert_eq!(singularize("pie"), "pie");
        assert_eq!(singularize("gas"), "gas");
        // "dies" misses the ies-rule guard but still loses the trailing s
        assert_eq!(singularize("dies"), "die");
    }

    #[test]
    fn test_synonym_mapping_after_singularization() {
        assert_eq!(tokenize("chillies"), vec!["chili"]);
        assert_eq!(tokenize("chilies"), vec!["chili"]);
        assert_eq!(tokenize("chiles"), vec!["chili"]);
        assert_eq!(tokenize("scallions"), vec!["green-onion"]);
        assert_eq!(tokenize("aubergines"), vec!["eggplant"]);
        assert_eq!(tokenize("garbanzos"), vec!["chickpea"]);
        assert_eq!(tokenize("curd"), vec!["yoghurt"]);
        assert_eq!(tokenize("yogurt"), vec!["yoghurt"]);
    }

    #[test]
    fn test_unmapped_tokens_pass_through() {
        assert_eq!(canonicalize("paprika"), "paprika");
        assert_eq!(tokenize("smoked paprika"), vec!["smoked", "paprika"]);
    }

    #[test]
    fn test_bell_pepper_equivalence_classes() {
        assert_eq!(tokenize("capsicum"), vec!["bell-pepper"]);
        assert_eq!(tokenize("bell pepper"), vec!["bell-pepper", "pepper"]);
    }

    #[test]
    fn test_hyphenated_flour_synonyms() {
        assert_eq!(tokenize("maida"), vec!["all-purpose-flour"]);
        assert_eq!(
            tokenize("all-purpose flour"),
            vec!["all-purpose-flour", "flour"]
        );
    }
}
