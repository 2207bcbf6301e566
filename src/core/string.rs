//! String helpers: case conversion, truncation, truthiness.
//!
//! Case conversion treats `-`, `/`, `:` and `::` as namespace delimiters and
//! `_` and whitespace as word delimiters:
//!
//! ```
//! use primext::StringExt;
//!
//! assert_eq!("this_is_a_test".camelcase(), "ThisIsATest");
//! assert_eq!("this-is-a-test".camelcase(), "This::Is::A::Test");
//! assert_eq!("ThisIsATest".snakecase(), "this_is_a_test");
//! assert_eq!("this_is_a_test".titleize(), "This Is A Test");
//! ```

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::defaults;
use crate::utils::split::{split_trimmed, split_words};

static DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-z][A-Z]|\s*-\s*|\s*/\s*|\s*:+\s*|\s*_\s*|\s+").unwrap()
});

static NAMESPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*|\s*/\s*|\s*:+\s*").unwrap());

static WORDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*_\s*|\s+").unwrap());

static TITLE_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*_\s*|\s*-\s*|\s+").unwrap());

static TITLE_NAMESPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*/\s*|\s*:+\s*").unwrap());

// Two or more whitespace characters, or a single one that isn't a plain space.
static SQUISHABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[[:space:]]{2,}|[[:space:]&&[^ ]]").unwrap());

pub trait StringExt {
    /// Empty or whitespace only.
    fn is_blank(&self) -> bool;

    fn camelcase(&self) -> String;

    fn snakecase(&self) -> String;

    fn titleize(&self) -> String;

    /// Uppercase the first character, leaving the rest untouched.
    fn up(&self) -> String;

    /// Lowercase the first character, leaving the rest untouched.
    fn down(&self) -> String;

    /// The first `count` characters (the whole string when shorter).
    fn first(&self, count: usize) -> &str;

    /// The last `count` characters (the whole string when shorter).
    fn last(&self, count: usize) -> &str;

    /// Prefix with the configured pad repeated `multiplier` times.
    fn indent(&self, multiplier: usize) -> String;

    fn indent_with(&self, multiplier: usize, pad: &str) -> String;

    /// Append `suffix` unless `count` is one (or minus one).
    fn pluralize(&self, suffix: &str, count: i64) -> String;

    /// Replace the first match of `replace` with `suffix` unless `count` is one.
    fn pluralize_with(&self, suffix: &str, count: i64, replace: &Regex) -> String;

    /// Remove the first occurrence of `suffix` when `count` is one (or minus one).
    fn singularize(&self, suffix: &str, count: i64) -> String;

    /// Replace the first match of `pattern` with `replace` when `count` is one.
    fn singularize_with(&self, pattern: &Regex, count: i64, replace: &str) -> String;

    /// Trim both ends and collapse inner whitespace runs to one space.
    fn squish(&self) -> String;

    /// Truncate to `maximum` characters, ending with the configured trailer.
    fn truncate_end(&self, maximum: usize) -> String;

    /// Truncate to `maximum` characters, cutting at the last `delimiter` that fits.
    fn truncate_end_with(&self, maximum: usize, delimiter: Option<&str>, trailer: &str)
        -> String;

    /// Elide the middle so the result is at most `maximum` characters.
    fn truncate_middle(&self, maximum: usize) -> String;

    fn truncate_middle_with(&self, maximum: usize, gap: &str) -> String;

    /// Matches one of the configured truthy words, ignoring case and surrounding space.
    fn is_truthy(&self) -> bool;

    fn is_falsey(&self) -> bool;

    #[deprecated(note = "use `is_truthy` or `is_falsey` instead")]
    fn to_bool(&self) -> bool;
}

impl StringExt for str {
    fn is_blank(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }

    fn camelcase(&self) -> String {
        if !DELIMITERS.is_match(self) {
            return up(self);
        }

        let namespaced = combine(split_trimmed(self, &NAMESPACES), up, "::");
        combine(split_trimmed(&namespaced, &WORDS), up, "")
    }

    fn snakecase(&self) -> String {
        if !DELIMITERS.is_match(self) {
            return self.to_lowercase();
        }

        let namespaced = combine(split_trimmed(self, &NAMESPACES), down, "/");
        combine(split_words(&namespaced, &WORDS), down, "_")
    }

    fn titleize(&self) -> String {
        if !DELIMITERS.is_match(self) {
            return capitalize(self);
        }

        let words = combine(split_words(self, &TITLE_WORDS), up, " ");
        combine(split_trimmed(&words, &TITLE_NAMESPACES), up, "/")
    }

    fn up(&self) -> String {
        up(self)
    }

    fn down(&self) -> String {
        down(self)
    }

    fn first(&self, count: usize) -> &str {
        match self.char_indices().nth(count) {
            Some((index, _)) => &self[..index],
            None => self,
        }
    }

    fn last(&self, count: usize) -> &str {
        let skip = self.chars().count().saturating_sub(count);
        match self.char_indices().nth(skip) {
            Some((index, _)) => &self[index..],
            None => "",
        }
    }

    fn indent(&self, multiplier: usize) -> String {
        self.indent_with(multiplier, &defaults::defaults().strings.indent_pad)
    }

    fn indent_with(&self, multiplier: usize, pad: &str) -> String {
        format!("{}{}", pad.repeat(multiplier), self)
    }

    fn pluralize(&self, suffix: &str, count: i64) -> String {
        if count.unsigned_abs() == 1 {
            return self.to_string();
        }
        format!("{}{}", self, suffix)
    }

    fn pluralize_with(&self, suffix: &str, count: i64, replace: &Regex) -> String {
        if count.unsigned_abs() == 1 {
            return self.to_string();
        }
        replace.replace(self, NoExpand(suffix)).into_owned()
    }

    fn singularize(&self, suffix: &str, count: i64) -> String {
        if count.unsigned_abs() != 1 {
            return self.to_string();
        }
        self.replacen(suffix, "", 1)
    }

    fn singularize_with(&self, pattern: &Regex, count: i64, replace: &str) -> String {
        if count.unsigned_abs() != 1 {
            return self.to_string();
        }
        pattern.replace(self, NoExpand(replace)).into_owned()
    }

    fn squish(&self) -> String {
        SQUISHABLE.replace_all(self, " ").trim().to_string()
    }

    fn truncate_end(&self, maximum: usize) -> String {
        self.truncate_end_with(maximum, None, &defaults::defaults().strings.trim_trailer)
    }

    fn truncate_end_with(
        &self,
        maximum: usize,
        delimiter: Option<&str>,
        trailer: &str,
    ) -> String {
        let chars: Vec<char> = self.chars().collect();
        if chars.len() <= maximum {
            return self.to_string();
        }

        let offset = maximum.saturating_sub(trailer.chars().count());
        let stop = delimiter
            .and_then(|delimiter| rindex(&chars, delimiter, offset))
            .unwrap_or(offset);

        let kept: String = chars[..stop].iter().collect();
        format!("{}{}", kept, trailer)
    }

    fn truncate_middle(&self, maximum: usize) -> String {
        self.truncate_middle_with(maximum, &defaults::defaults().strings.trim_gap)
    }

    fn truncate_middle_with(&self, maximum: usize, gap: &str) -> String {
        let chars: Vec<char> = self.chars().collect();
        let size = chars.len();
        let gap_size = gap.chars().count();
        let minimum = gap_size + 2;

        if maximum < minimum || maximum > size {
            return self.to_string();
        }

        if maximum == minimum {
            return format!("{}{}{}", chars[0], gap, chars[size - 1]);
        }

        let half = (maximum - gap_size) / 2;
        let stop = if half % 2 == 1 { half - 1 } else { half };
        let head: String = chars[..stop].iter().collect();
        let tail: String = chars[size - half..].iter().collect();

        format!("{}{}{}", head, gap, tail)
    }

    fn is_truthy(&self) -> bool {
        let normalized = self.trim().to_lowercase();
        defaults::defaults()
            .strings
            .truthy_values
            .iter()
            .any(|value| *value == normalized)
    }

    fn is_falsey(&self) -> bool {
        !self.is_truthy()
    }

    fn to_bool(&self) -> bool {
        crate::log_deprecated!("StringExt::to_bool", "StringExt::is_truthy");
        self.is_truthy()
    }
}

fn up(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn down(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

/// Join transformed parts; leading empty parts never produce a delimiter.
fn combine(parts: Vec<&str>, transform: fn(&str) -> String, delimiter: &str) -> String {
    parts.into_iter().fold(String::new(), |result, part| {
        if result.is_empty() {
            transform(part)
        } else {
            format!("{}{}{}", result, delimiter, transform(part))
        }
    })
}

/// Character index of the last `needle` starting at or before `offset`.
fn rindex(haystack: &[char], needle: &str, offset: usize) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    let start = offset.min(haystack.len());
    (0..=start)
        .rev()
        .find(|&index| haystack[index..].starts_with(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_blank_detects_whitespace_only() {
        assert!("".is_blank());
        assert!(" \t\n\r".is_blank());
        assert!(!"test \t\n\r".is_blank());
    }

    #[test]
    fn camelcase_joins_words_and_namespaces() {
        assert_eq!("".camelcase(), "");
        assert_eq!("ThisIsATest".camelcase(), "ThisIsATest");
        assert_eq!("TEST".camelcase(), "TEST");
        assert_eq!("test".camelcase(), "Test");
        assert_eq!("this is a test".camelcase(), "ThisIsATest");
        assert_eq!("this_is_a_test".camelcase(), "ThisIsATest");
        assert_eq!("this-is-a-test".camelcase(), "This::Is::A::Test");
        assert_eq!("this/is/a/test".camelcase(), "This::Is::A::Test");
        assert_eq!("this:is:a:test".camelcase(), "This::Is::A::Test");
        assert_eq!("example _ test".camelcase(), "ExampleTest");
        assert_eq!("example :: test".camelcase(), "Example::Test");
        assert_eq!(
            "this is_a-mixed/test:case::example".camelcase(),
            "ThisIsA::Mixed::Test::Case::Example"
        );
    }

    #[test]
    fn camelcase_of_delimiters_only_is_empty() {
        for text in ["   ", "___", "---", "///", ":::", "::::"] {
            assert_eq!(text.camelcase(), "", "input {:?}", text);
        }
    }

    #[test]
    fn snakecase_splits_words_and_namespaces() {
        assert_eq!("".snakecase(), "");
        assert_eq!("TEST".snakecase(), "test");
        assert_eq!("ExampleTest".snakecase(), "example_test");
        assert_eq!("This Is a Test".snakecase(), "this_is_a_test");
        assert_eq!("This_Is_A_Test".snakecase(), "this_is_a_test");
        assert_eq!("This-Is-A-Test".snakecase(), "this/is/a/test");
        assert_eq!("This::Is::A::Test".snakecase(), "this/is/a/test");
        assert_eq!("Example   Test".snakecase(), "example_test");
        assert_eq!("Example : Test".snakecase(), "example/test");
        assert_eq!(
            "This Is_A-Mixed/Test:Case::Example".snakecase(),
            "this_is_a/mixed/test/case/example"
        );
    }

    #[test]
    fn snakecase_of_delimiters_only_is_empty() {
        for text in ["   ", "___", "---", "///", ":::", "::::"] {
            assert_eq!(text.snakecase(), "", "input {:?}", text);
        }
    }

    #[test]
    fn titleize_capitalizes_words() {
        assert_eq!("".titleize(), "");
        assert_eq!("This Is A Test".titleize(), "This Is A Test");
        assert_eq!("ThisIsATest".titleize(), "This Is A Test");
        assert_eq!("TEST".titleize(), "Test");
        assert_eq!("this_is_a_test".titleize(), "This Is A Test");
        assert_eq!("this-is-a-test".titleize(), "This Is A Test");
        assert_eq!("this/is/a/test".titleize(), "This/Is/A/Test");
        assert_eq!("this::is::a::test".titleize(), "This/Is/A/Test");
        assert_eq!("example / test".titleize(), "Example/Test");
        assert_eq!(
            "this is_a-mixed/test:case::example".titleize(),
            "This Is A Mixed/Test/Case/Example"
        );
    }

    #[test]
    fn titleize_of_delimiters_only_is_empty() {
        for text in ["   ", "___", "---", "///", ":::", "::::"] {
            assert_eq!(text.titleize(), "", "input {:?}", text);
        }
    }

    #[test]
    fn up_and_down_touch_first_letter_only() {
        assert_eq!("test".up(), "Test");
        assert_eq!("TEST".down(), "tEST");
        assert_eq!("".up(), "");
        assert_eq!("".down(), "");
    }

    #[test]
    fn first_and_last_count_characters() {
        let text = "seether";

        assert_eq!(text.first(1), "s");
        assert_eq!(text.first(3), "see");
        assert_eq!(text.first(0), "");
        assert_eq!(text.first(99), "seether");
        assert_eq!(text.last(1), "r");
        assert_eq!(text.last(3), "her");
        assert_eq!(text.last(0), "");
        assert_eq!(text.last(99), "seether");
        assert_eq!("héllo".first(2), "hé");
        assert_eq!("".last(2), "");
    }

    #[test]
    fn indent_with_repeats_pad() {
        assert_eq!("test".indent_with(0, "  "), "test");
        assert_eq!("test".indent_with(3, "  "), "      test");
        assert_eq!("test".indent_with(1, " "), " test");
    }

    #[test]
    fn pluralize_respects_count() {
        assert_eq!("apple".pluralize("s", 0), "apples");
        assert_eq!("apple".pluralize("s", 2), "apples");
        assert_eq!("apple".pluralize("s", -2), "apples");
        assert_eq!("apple".pluralize("s", 1), "apple");
        assert_eq!("apple".pluralize("s", -1), "apple");
    }

    #[test]
    fn counts_at_integer_limits_are_plural() {
        let us = Regex::new("us").unwrap();
        let trailing_s = Regex::new("s$").unwrap();

        assert_eq!("apple".pluralize("s", i64::MIN), "apples");
        assert_eq!("apple".pluralize("s", i64::MAX), "apples");
        assert_eq!("cactus".pluralize_with("i", i64::MIN, &us), "cacti");
        assert_eq!("apples".singularize("s", i64::MIN), "apples");
        assert_eq!("sacks".singularize_with(&trailing_s, i64::MIN, ""), "sacks");
    }

    #[test]
    fn pluralize_with_replaces_first_match() {
        let us = Regex::new("us").unwrap();
        let l = Regex::new("l").unwrap();

        assert_eq!("cactus".pluralize_with("i", 0, &us), "cacti");
        assert_eq!("cul-de-sac".pluralize_with("ls", 0, &l), "culs-de-sac");
    }

    #[test]
    fn singularize_respects_count() {
        assert_eq!("apples".singularize("s", 1), "apple");
        assert_eq!("apples".singularize("s", -1), "apple");
        assert_eq!("apples".singularize("s", 0), "apples");
        assert_eq!("apples".singularize("s", 2), "apples");
    }

    #[test]
    fn singularize_with_pattern() {
        let trailing_s = Regex::new("s$").unwrap();
        let i = Regex::new("i").unwrap();
        let ls = Regex::new("ls").unwrap();

        assert_eq!("sacks".singularize_with(&trailing_s, 1, ""), "sack");
        assert_eq!("cacti".singularize_with(&i, 1, "us"), "cactus");
        assert_eq!("culs-de-sac".singularize_with(&ls, 1, "l"), "cul-de-sac");
    }

    #[test]
    fn squish_collapses_whitespace() {
        assert_eq!(" one  two   \n    \t   three ".squish(), "one two three");
        assert_eq!("one two".squish(), "one two");
        assert_eq!("a\tb".squish(), "a b");
    }

    #[test]
    fn truncate_end_with_cuts_and_appends_trailer() {
        let text = "This is a test example.";

        assert_eq!(text.truncate_end_with(10, None, "..."), "This is...");
        assert_eq!(text.truncate_end_with(15, None, "..."), "This is a te...");
        assert_eq!(text.truncate_end_with(23, None, "..."), text);
        assert_eq!(text.truncate_end_with(usize::MAX, None, "..."), text);
        assert_eq!(text.truncate_end_with(15, Some(" "), "..."), "This is a...");
        assert_eq!(text.truncate_end_with(17, None, "... (more)"), "This is... (more)");
        assert_eq!(text.truncate_end_with(7, None, ""), "This is");
        assert_eq!("test".truncate_end_with(3, None, "..."), "...");
    }

    #[test]
    fn truncate_end_with_delimiter_when_trailer_fills_maximum() {
        assert_eq!("hello world".truncate_end_with(2, Some(" "), "..."), "...");
        assert_eq!("hello world".truncate_end_with(3, Some(" "), "..."), "...");
    }

    #[test]
    fn truncate_middle_with_elides_center() {
        let text = "This is a test example.";

        assert_eq!(text.truncate_middle_with(11, "..."), "This...ple.");
        assert_eq!(text.truncate_middle_with(5, "..."), "T....");
        assert_eq!(text.truncate_middle_with(4, "..."), text);
        assert_eq!(text.truncate_middle_with(30, "..."), text);
    }

    #[test]
    fn truthy_words_ignore_case_and_padding() {
        for value in ["true", "yes", "on", "t", "y", "1"] {
            assert!(value.is_truthy(), "{}", value);
        }
        assert!(" yes  ".is_truthy());
        assert!("TrUe".is_truthy());
        assert!("".is_falsey());
        assert!("bogus".is_falsey());
    }

    #[test]
    #[allow(deprecated)]
    fn to_bool_delegates_to_truthy() {
        assert!("yes".to_bool());
        assert!(!"no".to_bool());
    }
}
