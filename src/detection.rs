//! # Detected-Ingredient Boundary Adapters
//!
//! External collaborators supply detected ingredients in inconvenient
//! shapes: a vision/LLM endpoint replies with prose that should contain a
//! JSON array, and a local image classifier emits labels with underscores in
//! place of spaces. This module maps both into the plain string list the
//! matcher consumes. Parsing is best-effort: malformed input degrades to an
//! empty or partial list, never an error.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, warn};

lazy_static! {
    /// First bracketed array in a model reply, spanning newlines
    static ref JSON_ARRAY_PATTERN: Regex =
        Regex::new(r"(?s)\[.*\]").expect("JSON array pattern should be valid");
}

/// Extract an ingredient list from a vision/LLM endpoint reply
///
/// Tries to locate and parse a JSON string array anywhere in the reply. If
/// that fails, falls back to stripping brackets and quotes and splitting on
/// commas and newlines. Labels are cleaned and de-duplicated either way.
///
/// # Examples
///
/// ```rust
/// use pantry_match::detection::parse_detection_response;
///
/// let reply = r#"Sure! ["tomato", "cheese", "basil"]"#;
/// assert_eq!(parse_detection_response(reply), vec!["tomato", "cheese", "basil"]);
///
/// // Fallback path for replies that are not valid JSON
/// let reply = "tomato, cheese\nbasil";
/// assert_eq!(parse_detection_response(reply), vec!["tomato", "cheese", "basil"]);
/// ```
pub fn parse_detection_response(content: &str) -> Vec<String> {
    if let Some(array) = JSON_ARRAY_PATTERN.find(content) {
        match serde_json::from_str::<Vec<String>>(array.as_str()) {
            Ok(ingredients) => {
                debug!(count = ingredients.len(), "Parsed detection response as JSON array");
                return clean_labels(&ingredients);
            }
            Err(e) => {
                warn!(error = %e, "Detection response array is not a string array, falling back to delimiter split");
            }
        }
    }

    let stripped: String = content
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '"'))
        .collect();
    let parts: Vec<String> = stripped
        .split(|c| c == ',' || c == '\n')
        .map(str::to_string)
        .collect();
    let ingredients = clean_labels(&parts);
    debug!(count = ingredients.len(), "Parsed detection response via delimiter split");
    ingredients
}

/// Clean classifier labels into matcher-ready ingredient names
///
/// Replaces underscores with spaces, collapses whitespace, drops empty
/// entries, and de-duplicates case-insensitively while preserving first-seen
/// order and spelling.
///
/// # Examples
///
/// ```rust
/// use pantry_match::detection::clean_labels;
///
/// let labels = vec![
///     "bell_pepper".to_string(),
///     "  Tomato ".to_string(),
///     "tomato".to_string(),
///     "".to_string(),
/// ];
/// assert_eq!(clean_labels(&labels), vec!["bell pepper", "Tomato"]);
/// ```
pub fn clean_labels(labels: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut cleaned = Vec::new();

    for label in labels {
        let name = label
            .replace('_', " ")
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ");
        if name.is_empty() {
            continue;
        }
        if seen.insert(name.to_lowercase()) {
            cleaned.push(name);
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_embedded_in_prose() {
        let reply = "Here is what I found:\n[\"onion\",\n \"garlic\"]\nEnjoy!";
        assert_eq!(parse_detection_response(reply), vec!["onion", "garlic"]);
    }

    #[test]
    fn test_fallback_on_unquoted_array() {
        // Bracketed but not valid JSON strings; the fallback strips the
        // brackets and splits on commas
        let reply = "[tomato, cheese]";
        assert_eq!(parse_detection_response(reply), vec!["tomato", "cheese"]);
    }

    #[test]
    fn test_fallback_on_mixed_type_array() {
        let reply = r#"["tomato", 42]"#;
        assert_eq!(parse_detection_response(reply), vec!["tomato", "42"]);
    }

    #[test]
    fn test_empty_and_junk_responses() {
        assert!(parse_detection_response("").is_empty());
        assert!(parse_detection_response("[]").is_empty());
        assert!(parse_detection_response(",,,\n,").is_empty());
    }

    #[test]
    fn test_classifier_underscore_labels() {
        let labels = vec!["spring_onion".to_string(), "red_bell_pepper".to_string()];
        assert_eq!(clean_labels(&labels), vec!["spring onion", "red bell pepper"]);
    }

    #[test]
    fn test_dedup_preserves_first_spelling() {
        let labels = vec![
            "Basil".to_string(),
            "basil".to_string(),
            "BASIL".to_string(),
            "mint".to_string(),
        ];
        assert_eq!(clean_labels(&labels), vec!["Basil", "mint"]);
    }
}
