//! Literal extraction from node content.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::types::Content;

/// Width of the prefix scanned for a leading paragraph number ("12. ...").
pub const NUMBER_PREFIX_CHARS: usize = 5;

/// Roman numeral token preceded by whitespace or the start of the text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ROMAN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)([IVXLCDM]+\d*)\b").expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DIGITS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Digits found in the first few characters of a text.
///
/// # Examples
/// ```
/// use lexgraph::literal::numbers_only;
///
/// assert_eq!(numbers_only("12. Everyone has the right..."), "12");
/// assert_eq!(numbers_only("(a) the data subject"), "");
/// ```
#[must_use]
pub fn numbers_only(text: &str) -> String {
    let prefix: String = text.chars().take(NUMBER_PREFIX_CHARS).collect();
    all_numbers(&prefix)
}

/// All digit runs of a text, concatenated.
///
/// # Examples
/// ```
/// use lexgraph::literal::all_numbers;
///
/// assert_eq!(all_numbers("Article 12"), "12");
/// ```
#[must_use]
pub fn all_numbers(text: &str) -> String {
    DIGITS_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Roman numeral tokens of a heading, concatenated.
///
/// Every token spelled only with Roman numeral letters counts, so an
/// upper-case title word such as "CIVIL" is appended to the numeral.
///
/// # Examples
/// ```
/// use lexgraph::literal::roman_numerals;
///
/// assert_eq!(roman_numerals("Chapter IV General provisions"), "IV");
/// assert_eq!(roman_numerals("CHAPTER I"), "I");
/// ```
#[must_use]
pub fn roman_numerals(text: &str) -> String {
    ROMAN_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Flatten arbitrarily nested content into one display string.
///
/// Text is returned as is, a pair is space-joined, and a mapping descends into
/// its first child. Unrecognised shapes flatten to the empty string.
#[must_use]
pub fn flatten(content: &Content) -> String {
    match content {
        Content::Text(text) => text.clone(),
        Content::Pair(designator, text) => format!("{designator} {text}"),
        Content::Children(children) => children
            .first()
            .map(|(_, node)| flatten(&node.content))
            .unwrap_or_default(),
        Content::Other(value) => flatten_value(value),
    }
}

fn flatten_value(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_value)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Object(map) => match map.get("content") {
            Some(inner) => flatten_value(inner),
            None => map
                .values()
                .next()
                .map(flatten_value)
                .unwrap_or_default(),
        },
        _ => String::new(),
    }
}

/// NFC-normalise a literal value and collapse runs of whitespace.
///
/// # Examples
/// ```
/// use lexgraph::literal::normalize;
///
/// assert_eq!(normalize("  General\n  provisions "), "General provisions");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    composed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean an explicit leaf designator such as `(a)` or `1.`.
#[must_use]
pub fn clean_designator(designator: &str) -> String {
    designator
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(['.', ')'])
        .trim()
        .to_string()
}
