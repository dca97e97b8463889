//! Text helpers for titles and resource paths.

use once_cell::sync::Lazy;
use regex::Regex;

/// Category names usable as a single path segment.
static CATEGORY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("Invalid category regex"));

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` can be used as a category path segment.
pub fn is_valid_category(name: &str) -> bool {
    CATEGORY_REGEX.is_match(name) && !name.contains("..")
}
