//! Payee name validation and title-case formatting.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ValidationResult;

const MIN_LENGTH: usize = 2;
const MAX_LENGTH: usize = 100;
const MAX_SEPARATOR_REPEATS: usize = 2;

static ONLY_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s+$").unwrap());
static CONSECUTIVE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static ANY_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").unwrap());
static DISALLOWED_SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[@#$%^&*()+=\[\]{}|;:"<>?/\\]"#).unwrap());
static LEADING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[.'\u{2019}-]").unwrap());
static TRAILING_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.'\u{2019}-]$").unwrap());

static SIMPLE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:[\s.'-][A-Za-z]+)*$").unwrap());
static INTERNATIONAL_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\p{L}\p{Mn}]+(?:[\s.'\u{2019}-][\p{L}\p{Mn}]+)*$").unwrap()
});

static SUFFIX_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(Jr|Sr|[IVX]+)\.?$").unwrap());

/// Validates a person name. `international` widens the letter class from
/// ASCII to any Unicode letter plus combining marks.
pub fn validate(name: &str, international: bool) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("Name cannot be empty");
    }

    let len = trimmed.chars().count();
    if len < MIN_LENGTH {
        return ValidationResult::invalid("Name must be at least 2 characters long");
    }
    if len > MAX_LENGTH {
        return ValidationResult::invalid("Name cannot exceed 100 characters");
    }

    if ONLY_WHITESPACE.is_match(trimmed) {
        return ValidationResult::invalid("Name cannot contain only spaces");
    }
    if CONSECUTIVE_SPACES.is_match(trimmed) {
        return ValidationResult::invalid("Name cannot contain multiple consecutive spaces");
    }
    if ANY_DIGIT.is_match(trimmed) {
        return ValidationResult::invalid("Name cannot contain numbers");
    }
    if DISALLOWED_SYMBOLS.is_match(trimmed) {
        return ValidationResult::invalid("Name contains invalid special characters");
    }
    if LEADING_PUNCTUATION.is_match(trimmed) {
        return ValidationResult::invalid("Name cannot start with punctuation");
    }
    if TRAILING_PUNCTUATION.is_match(trimmed) {
        return ValidationResult::invalid("Name cannot end with punctuation");
    }

    let grammar = if international {
        &*INTERNATIONAL_NAME
    } else {
        &*SIMPLE_NAME
    };
    if !grammar.is_match(trimmed) {
        return ValidationResult::invalid(
            "Please enter a valid name (letters, spaces, apostrophes, hyphens, and periods only)",
        );
    }

    if trimmed.chars().filter(|&c| c == '.').count() > MAX_SEPARATOR_REPEATS {
        return ValidationResult::invalid("Name cannot contain more than 2 periods");
    }
    if trimmed.chars().filter(|&c| c == '-').count() > MAX_SEPARATOR_REPEATS {
        return ValidationResult::invalid("Name cannot contain more than 2 hyphens");
    }
    if trimmed.chars().filter(|&c| c == '\'').count() > MAX_SEPARATOR_REPEATS {
        return ValidationResult::invalid("Name cannot contain more than 2 apostrophes");
    }

    ValidationResult::valid()
}

/// Title-cases each word. Words carrying an apostrophe or hyphen are split on
/// that separator and each sub-part cased independently; suffix tokens (Jr,
/// Sr, roman numerals) are upper-cased instead.
pub fn format(name: &str) -> String {
    if name.trim().is_empty() {
        return name.to_string();
    }

    name.trim()
        .split_whitespace()
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    if word.contains('\'') {
        join_cased(word, '\'')
    } else if word.contains('-') {
        join_cased(word, '-')
    } else if word.contains('.') {
        if SUFFIX_TOKEN.is_match(word) {
            word.to_uppercase()
        } else {
            title_case(word)
        }
    } else if SUFFIX_TOKEN.is_match(word) {
        word.to_uppercase()
    } else {
        title_case(word)
    }
}

fn join_cased(word: &str, separator: char) -> String {
    word.split(separator)
        .map(title_case)
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
    }
}

/// A single-word name usually means the entry is incomplete; UI hint only.
pub fn is_single_word(name: &str) -> bool {
    name.trim().split_whitespace().count() <= 1
}
