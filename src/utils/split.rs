//! Text splitting primitives shared by the case conversion helpers.

use regex::Regex;

/// Split on `pattern`, keeping leading empty pieces and dropping trailing ones.
///
/// `"_a__b_"` split on `_` yields `["", "a", "", "b"]`; an input made only of
/// delimiters yields nothing.
pub fn split_trimmed<'a>(text: &'a str, pattern: &Regex) -> Vec<&'a str> {
    let mut parts: Vec<&str> = pattern.split(text).collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}

/// Split before every ASCII uppercase letter except one at the very start.
pub fn split_before_uppercase(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;

    for (index, ch) in text.char_indices() {
        if index > start && ch.is_ascii_uppercase() {
            parts.push(&text[start..index]);
            start = index;
        }
    }

    parts.push(&text[start..]);
    parts
}

/// Split on `pattern`, then split each piece before uppercase letters.
///
/// Trailing empty pieces are dropped from the combined result.
pub fn split_words<'a>(text: &'a str, pattern: &Regex) -> Vec<&'a str> {
    let mut parts: Vec<&str> = pattern
        .split(text)
        .flat_map(split_before_uppercase)
        .collect();
    while parts.last().is_some_and(|part| part.is_empty()) {
        parts.pop();
    }
    parts
}
