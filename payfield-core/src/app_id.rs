//! Application identifier validation (reverse-domain dotted segments).
//!
//! Validity is binary; there is no canonical form for this field.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ValidationResult;

const MIN_LENGTH: usize = 3;
const MAX_LENGTH: usize = 255;

// Segments start with a lowercase letter; lowercase letters, digits, and
// underscores after that.
static APP_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*(\.[a-z][a-z0-9_]*)*$").unwrap());

pub fn validate(app_id: &str) -> ValidationResult {
    let trimmed = app_id.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("App-ID is required");
    }

    let len = trimmed.chars().count();
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&len) {
        return ValidationResult::invalid(format!(
            "Length must be {MIN_LENGTH}-{MAX_LENGTH} characters"
        ));
    }

    if !APP_ID_PATTERN.is_match(trimmed) {
        return ValidationResult::invalid(
            "Invalid format. Use lowercase letters, digits or _ separated by '.'",
        );
    }

    ValidationResult::valid()
}
