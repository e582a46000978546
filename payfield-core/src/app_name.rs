//! Application display-name validation and formatting.

use std::sync::LazyLock;

use regex::Regex;

use crate::charinfo;
use crate::types::{CharacterInfo, ValidationResult};

const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 50;
const NEAR_LIMIT_THRESHOLD: i64 = 5;
// All-uppercase names are tolerated only up to this length.
const ALL_CAPS_MAX_LENGTH: usize = 5;

static VALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}\p{P}\p{S}\p{Z}]*$").unwrap());
static EXCESSIVE_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{3,}").unwrap());
// Zero or one top-level parenthesized group, no nesting.
static BALANCED_PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^()]*$|^[^()]*\([^()]*\)[^()]*$").unwrap());
static ONLY_SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\p{L}\p{N}]+$").unwrap());
static SPECIAL_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{P}\p{S}]$").unwrap());

static DENYLIST: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\btest\b",
        r"(?i)\bdemo\b",
        r"(?i)\bsample\b",
        r"(?i)\b(hack|crack|pirate|cheat)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Terms a merchant app must not masquerade as. A name is rejected when it
/// contains one of these and is within two characters of the term's own
/// length, i.e. the name is essentially just the reserved word plus
/// decoration.
const RESERVED_NAMES: &[&str] = &[
    "android",
    "google",
    "app",
    "application",
    "system",
    "admin",
    "root",
    "test",
    "demo",
    "sample",
    "example",
    "default",
    "null",
    "undefined",
];

pub fn validate(name: &str) -> ValidationResult {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("App name is required");
    }

    let len = trimmed.chars().count();
    if len < MIN_LENGTH {
        return ValidationResult::invalid(format!(
            "App name must be at least {MIN_LENGTH} characters"
        ));
    }
    if len > MAX_LENGTH {
        return ValidationResult::invalid(format!("App name cannot exceed {MAX_LENGTH} characters"));
    }

    if trimmed.contains(['<', '>']) || !VALID_CHARS.is_match(trimmed) {
        return ValidationResult::invalid("App name contains invalid characters");
    }

    if EXCESSIVE_SPACES.is_match(trimmed) {
        return ValidationResult::invalid("Avoid excessive spaces in app name");
    }

    if !BALANCED_PARENTHESES.is_match(trimmed) {
        return ValidationResult::invalid("Unbalanced parentheses in app name");
    }

    if DENYLIST.iter().any(|pattern| pattern.is_match(trimmed))
        || ONLY_SPECIAL_CHARS.is_match(trimmed)
    {
        return ValidationResult::invalid("App name contains inappropriate content");
    }

    let lower = trimmed.to_lowercase();
    let lower_len = lower.chars().count();
    if RESERVED_NAMES
        .iter()
        .any(|reserved| lower.contains(reserved) && lower_len <= reserved.len() + 2)
    {
        return ValidationResult::invalid("App name contains reserved terms");
    }

    if starts_or_ends_with_special(trimmed) {
        return ValidationResult::invalid("App name cannot start or end with special characters");
    }

    if trimmed == trimmed.to_uppercase() && len > ALL_CAPS_MAX_LENGTH {
        return ValidationResult::invalid("Avoid using all uppercase letters");
    }

    ValidationResult::valid()
}

// Parentheses are exempt so a trailing "(Downtown)" group stays valid.
fn starts_or_ends_with_special(name: &str) -> bool {
    let is_special = |c: char| {
        !matches!(c, '(' | ')') && SPECIAL_CHAR.is_match(c.encode_utf8(&mut [0u8; 4]))
    };
    name.chars().next().is_some_and(is_special) || name.chars().last().is_some_and(is_special)
}

/// Canonical form: whitespace runs collapsed, each word's first letter
/// capitalized with the rest preserved, truncated to the length budget.
pub fn format(name: &str) -> String {
    if name.trim().is_empty() {
        return name.to_string();
    }

    name.trim()
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_LENGTH)
        .collect()
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Remaining-character summary for the app-name buffer.
pub fn character_info(name: &str) -> CharacterInfo {
    charinfo::character_info(name, MAX_LENGTH, false, NEAR_LIMIT_THRESHOLD)
}

/// Example names for the registration form's helper text.
pub fn suggestions() -> &'static [&'static str] {
    &[
        "Mock Merchant Application",
        "Payment Gateway App",
        "Merchant Payment Portal",
        "Digital Payment Hub",
        "Secure Payment App",
        "Merchant Transaction Center",
        "Payment Processing Tool",
        "Business Payment Suite",
        "Mobile Payment Gateway",
        "Merchant Services App",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_names() {
        assert!(validate("My Shop").is_valid);
        assert!(validate("My Shop (Downtown)").is_valid);
        assert!(validate("Cafe 24x7").is_valid);
    }

    #[test]
    fn rejects_blank() {
        assert_eq!(
            validate("  ").error_message.as_deref(),
            Some("App name is required")
        );
    }

    #[test]
    fn rejects_length_bounds() {
        assert!(!validate("My").is_valid);
        assert!(!validate(&"a".repeat(51)).is_valid);
    }

    #[test]
    fn rejects_angle_brackets() {
        assert_eq!(
            validate("Shop <One>").error_message.as_deref(),
            Some("App name contains invalid characters")
        );
    }

    #[test]
    fn rejects_excessive_spaces() {
        assert_eq!(
            validate("My    Shop").error_message.as_deref(),
            Some("Avoid excessive spaces in app name")
        );
    }

    #[test]
    fn rejects_nested_or_unbalanced_parens() {
        for input in ["My Shop (Down(town))", "My Shop (Downtown", "My ) Shop ("] {
            assert_eq!(
                validate(input).error_message.as_deref(),
                Some("Unbalanced parentheses in app name"),
                "{input:?}"
            );
        }
    }

    #[test]
    fn rejects_denylisted_words() {
        assert_eq!(
            validate("TEST").error_message.as_deref(),
            Some("App name contains inappropriate content")
        );
        assert!(!validate("Demo Shop").is_valid);
        assert!(!validate("My Sample Store").is_valid);
    }

    #[test]
    fn rejects_all_punctuation_names() {
        assert_eq!(
            validate("***").error_message.as_deref(),
            Some("App name contains inappropriate content")
        );
    }

    #[test]
    fn reserved_terms_reject_only_near_their_own_length() {
        assert_eq!(
            validate("MyApp").error_message.as_deref(),
            Some("App name contains reserved terms")
        );
        // Long enough that the reserved word is incidental.
        assert!(validate("Happy Payments").is_valid);
        assert!(validate("Payment Gateway App").is_valid);
    }

    #[test]
    fn rejects_boundary_special_characters() {
        assert_eq!(
            validate("-My Shop").error_message.as_deref(),
            Some("App name cannot start or end with special characters")
        );
        assert!(!validate("My Shop!").is_valid);
    }

    #[test]
    fn rejects_long_all_uppercase() {
        assert_eq!(
            validate("MY SHOP NOW").error_message.as_deref(),
            Some("Avoid using all uppercase letters")
        );
        // Five characters or fewer may shout.
        assert!(validate("POS").is_valid);
    }

    #[test]
    fn format_collapses_and_capitalizes() {
        assert_eq!(super::format("  my   corner shop "), "My Corner Shop");
        // Intentional interior casing survives.
        assert_eq!(super::format("payPal clone"), "PayPal Clone");
    }

    #[test]
    fn format_truncates_to_budget() {
        let long = "word ".repeat(20);
        assert!(super::format(&long).chars().count() <= MAX_LENGTH);
    }

    #[test]
    fn character_info_uses_tight_threshold() {
        let info = character_info(&"a".repeat(46));
        assert_eq!(info.remaining_chars, 4);
        assert!(info.is_near_limit);
        assert_eq!(info.line_count, None);
    }

    #[test]
    fn suggestions_all_validate() {
        for name in suggestions() {
            assert!(validate(name).is_valid, "{name:?}");
        }
    }
}
