//! `^^identifier^^` markers embedded in template and SMS content.
//!
//! The marker syntax is shared with the backend, which performs the same
//! substitution at send time, so it must stay byte-for-byte identical.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::{HashMap, HashSet};

/// Marker delimiter on both sides of an identifier
pub const MARKER_DELIMITER: &str = "^^";

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^\^([^\^\s]+)\^\^").expect("marker pattern is valid"));

/// Replaces every `^^key^^` marker with `values[key]`.
///
/// Markers without a mapping are kept as-is. Replacement values are inserted
/// literally and never scanned for further markers.
pub fn substitute(content: &str, values: &HashMap<String, String>) -> String {
    MARKER_RE
        .replace_all(content, |caps: &Captures| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Distinct marker identifiers in order of first appearance
pub fn extract_markers(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    MARKER_RE
        .captures_iter(content)
        .filter_map(|caps| {
            let key = caps[1].to_string();
            seen.insert(key.clone()).then_some(key)
        })
        .collect()
}

/// Identifiers used in `content` that have no entry in `values`
pub fn missing_markers(content: &str, values: &HashMap<String, String>) -> Vec<String> {
    extract_markers(content)
        .into_iter()
        .filter(|key| !values.contains_key(key))
        .collect()
}

/// Formats `key` as a marker, e.g. `first_name` -> `^^first_name^^`
pub fn marker(key: &str) -> String {
    format!("{MARKER_DELIMITER}{key}{MARKER_DELIMITER}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_adjacent_markers() {
        let out = substitute("^^a^^^^b^^", &vars(&[("a", "X"), ("b", "Y")]));
        assert_eq!(out, "XY");
    }

    #[test]
    fn test_unknown_marker_is_kept() {
        assert_eq!(substitute("^^unknown^^", &HashMap::new()), "^^unknown^^");
        assert_eq!(
            substitute("Hi ^^name^^, ^^code^^", &vars(&[("name", "Ann")])),
            "Hi Ann, ^^code^^"
        );
    }

    #[test]
    fn test_every_occurrence_is_replaced() {
        let out = substitute("^^x^^-^^x^^-^^x^^", &vars(&[("x", "1")]));
        assert_eq!(out, "1-1-1");
    }

    #[test]
    fn test_no_recursive_substitution() {
        let out = substitute("^^a^^", &vars(&[("a", "^^b^^"), ("b", "nope")]));
        assert_eq!(out, "^^b^^");
    }

    #[test]
    fn test_whitespace_is_not_an_identifier() {
        let content = "^^first name^^ and ^^^^";
        assert_eq!(substitute(content, &vars(&[("first name", "X")])), content);
        assert!(extract_markers(content).is_empty());
    }

    #[test]
    fn test_extract_and_missing() {
        let content = "<p>^^name^^</p><a href=\"^^link^^\">^^name^^</a>";
        assert_eq!(extract_markers(content), vec!["name", "link"]);
        assert_eq!(missing_markers(content, &vars(&[("name", "A")])), vec!["link"]);
        assert_eq!(marker("link"), "^^link^^");
    }
}
