//! Token extraction
//!
//! Pulls utility-class attribute values out of a raw line of text. The
//! extractor recognizes the common quoting and templating conventions side by
//! side on one line and returns every match in left-to-right order. It is a
//! total function: arbitrary input yields an empty vec, never an error.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Attribute-value conventions recognized by the extractor. Each pattern
    /// captures the class-value string in group 1.
    static ref CLASS_VALUE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r#"className\s*=\s*"([^"]*)""#).unwrap(),
        Regex::new(r"className\s*=\s*'([^']*)'").unwrap(),
        Regex::new(r#"class\s*=\s*"([^"]*)""#).unwrap(),
        Regex::new(r"class\s*=\s*'([^']*)'").unwrap(),
        Regex::new(r#"className\s*=\s*\{[`'"]([^`'"]*)[`'"]\}"#).unwrap(),
        Regex::new(r"className\s*=\s*\{`([^`]*)`\}").unwrap(),
    ];
}

/// Extract every class-value string from a line, ordered by start offset.
///
/// A template-literal value can be captured by two of the conventions above
/// at the same span; identical spans are reported once.
pub fn extract_class_values(line: &str) -> Vec<&str> {
    let mut matches: Vec<(usize, usize, &str)> = Vec::new();

    for pattern in CLASS_VALUE_PATTERNS.iter() {
        for caps in pattern.captures_iter(line) {
            if let Some(group) = caps.get(1) {
                let span = (group.start(), group.end());
                if !matches.iter().any(|&(s, e, _)| (s, e) == span) {
                    matches.push((group.start(), group.end(), group.as_str()));
                }
            }
        }
    }

    matches.sort_by_key(|&(start, _, _)| start);
    matches.into_iter().map(|(_, _, text)| text).collect()
}

/// Split a class-value string into individual class tokens.
/// Whitespace-insensitive: tabs and runs of spaces collapse.
pub fn split_tokens(class_value: &str) -> Vec<&str> {
    class_value.split_whitespace().collect()
}
