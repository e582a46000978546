//! Secure transaction ID validation (fixed 35-character alphanumeric).

use crate::generator;
use crate::types::{Origin, ValidationResult};

pub const ID_LENGTH: usize = 35;

/// Validates a user-entered transaction ID against the fixed-length grammar.
pub fn validate(id: &str) -> ValidationResult {
    let trimmed = id.trim().to_uppercase();
    if trimmed.is_empty() {
        return ValidationResult::invalid("Transaction ID cannot be empty");
    }

    if trimmed.chars().count() != ID_LENGTH {
        return ValidationResult::invalid("Transaction ID must be 35 characters");
    }

    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ValidationResult::invalid("Transaction ID can only contain letters and numbers");
    }

    ValidationResult::valid()
}

/// Dispatches on provenance: generated values keep their mixed case and run
/// the generator-output check instead of the uppercased user grammar.
pub fn validate_with_origin(id: &str, origin: Origin) -> ValidationResult {
    match origin {
        Origin::UserEntered => validate(id),
        Origin::Generated => generator::validate_generated_id(id),
    }
}

/// Canonical form: trimmed, uppercased, internal whitespace stripped.
pub fn format(id: &str) -> String {
    id.trim()
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
