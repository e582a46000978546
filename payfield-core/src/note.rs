//! Transaction note validation: optional free text with length, line, and
//! content policy.

use std::sync::LazyLock;

use regex::Regex;

use crate::charinfo;
use crate::types::{CharacterInfo, ValidationResult};

pub const MAX_LENGTH: usize = 280;
pub const MAX_LINES: usize = 6;
const REQUIRED_MIN_LENGTH: usize = 3;
const NEAR_LIMIT_THRESHOLD: i64 = 20;

static VALID_CHARACTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}\p{P}\p{S}\p{Z}\n\r]*$").unwrap());
static EXCESSIVE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{3,}").unwrap());
static EXCESSIVE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static ONLY_SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\p{L}\p{N}]+$").unwrap());

/// Spam markers and placeholder noise rejected outright.
static DENYLIST: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(spam|scam|fraud)\b",
        r"(?i)\b(hack|phishing|steal)\b",
        r"(?i)^\s*test\s*$",
        r"^\s*\.+\s*$",
        r"^\s*-+\s*$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Validates a note. Blank input is valid unless `is_required`.
pub fn validate(note: &str, is_required: bool) -> ValidationResult {
    if note.trim().is_empty() {
        return if is_required {
            ValidationResult::invalid("Transaction note is required")
        } else {
            ValidationResult::valid()
        };
    }

    let trimmed = note.trim();
    let len = trimmed.chars().count();

    if len > MAX_LENGTH {
        return ValidationResult::invalid(format!("Note cannot exceed {MAX_LENGTH} characters"));
    }

    if is_required && len < REQUIRED_MIN_LENGTH {
        return ValidationResult::invalid("Note must be at least 3 characters when provided");
    }

    if trimmed.split('\n').count() > MAX_LINES {
        return ValidationResult::invalid(format!("Note cannot exceed {MAX_LINES} lines"));
    }

    if !VALID_CHARACTERS.is_match(trimmed) {
        return ValidationResult::invalid("Note contains invalid characters");
    }

    if EXCESSIVE_WHITESPACE.is_match(trimmed) {
        return ValidationResult::invalid("Avoid excessive spaces in note");
    }

    if EXCESSIVE_NEWLINES.is_match(trimmed) {
        return ValidationResult::invalid("Avoid excessive line breaks in note");
    }

    if DENYLIST.iter().any(|pattern| pattern.is_match(trimmed)) {
        return ValidationResult::invalid("Note contains inappropriate content");
    }

    if len > 10 && ONLY_SPECIAL_CHARS.is_match(trimmed) {
        return ValidationResult::invalid("Note should contain meaningful text");
    }

    ValidationResult::valid()
}

/// Normalizes a note: whitespace runs collapse before newline runs, lines are
/// trimmed individually, and the result is truncated to the length budget.
pub fn format(note: &str) -> String {
    if note.trim().is_empty() {
        return note.to_string();
    }

    let collapsed = EXCESSIVE_WHITESPACE.replace_all(note.trim(), " ");
    let collapsed = EXCESSIVE_NEWLINES.replace_all(&collapsed, "\n\n");
    collapsed
        .split('\n')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .chars()
        .take(MAX_LENGTH)
        .collect()
}

/// Remaining-character summary for the note buffer.
pub fn character_info(note: &str) -> CharacterInfo {
    charinfo::character_info(note, MAX_LENGTH, true, NEAR_LIMIT_THRESHOLD)
}

/// Suggested note templates for quick entry.
pub fn common_templates() -> &'static [&'static str] {
    &[
        "Payment for services rendered",
        "Monthly subscription fee",
        "Product purchase - Order #",
        "Refund for cancelled order",
        "Advance payment",
        "Balance adjustment",
        "Service charge",
        "Membership fee",
        "Consultation payment",
        "Equipment rental",
    ]
}
