//! Transaction reference classification and validation.
//!
//! References arrive in several network-specific shapes (UPI, NEFT, IMPS,
//! bank, general). Classification runs in precedence order over the
//! trimmed+uppercased input; the per-type re-checks afterwards are kept as a
//! defensive second pass even where the classifying pattern already implies
//! them.

use std::sync::LazyLock;

use regex::Regex;

use crate::generator;
use crate::types::{Origin, ReferenceType, ValidationResult};

const MIN_LENGTH: usize = 4;
const MAX_LENGTH: usize = 50;

static UPI_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
static NEFT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{4}[0-9]{6,10}$").unwrap());
static IMPS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{12,16}$").unwrap());
static BANK_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9]{6,25}$").unwrap());
static GENERAL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9._-]{4,50}$").unwrap());
static CHARSET_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9._-]+$").unwrap());

/// Validates a reference accepting any classification.
pub fn validate(reference: &str) -> ValidationResult {
    validate_with_types(reference, None)
}

/// Validates a reference, optionally restricted to an allow-list of types.
pub fn validate_with_types(
    reference: &str,
    allowed_types: Option<&[ReferenceType]>,
) -> ValidationResult {
    let trimmed = reference.trim().to_uppercase();
    if trimmed.is_empty() {
        return ValidationResult::invalid("Transaction reference cannot be empty");
    }

    let len = trimmed.chars().count();
    if len < MIN_LENGTH {
        return ValidationResult::invalid("Transaction reference must be at least 4 characters");
    }
    if len > MAX_LENGTH {
        return ValidationResult::invalid("Transaction reference cannot exceed 50 characters");
    }

    if !CHARSET_PATTERN.is_match(&trimmed) {
        return ValidationResult::invalid(
            "Reference can only contain letters, numbers, dots, hyphens, and underscores",
        );
    }

    let reference_type = classify(&trimmed);

    if let Some(allowed) = allowed_types {
        if !allowed.contains(&reference_type) {
            return ValidationResult::invalid("This reference format is not accepted");
        }
    }

    let by_type = validate_by_type(&trimmed, reference_type);
    if !by_type.is_valid {
        return by_type;
    }

    ValidationResult::valid_with_type(reference_type)
}

/// Dispatches on where the value came from: user input runs the classifier,
/// generator output runs the closed-loop generated-reference check.
pub fn validate_with_origin(reference: &str, origin: Origin) -> ValidationResult {
    match origin {
        Origin::UserEntered => validate(reference),
        Origin::Generated => generator::validate_generated_reference(reference),
    }
}

/// Assigns the reference type by ordered pattern precedence. Expects the
/// trimmed+uppercased view.
pub fn classify(reference: &str) -> ReferenceType {
    if UPI_PATTERN.is_match(reference) {
        ReferenceType::Upi
    } else if NEFT_PATTERN.is_match(reference) {
        ReferenceType::Neft
    } else if IMPS_PATTERN.is_match(reference) {
        ReferenceType::Imps
    } else if BANK_PATTERN.is_match(reference) {
        ReferenceType::Bank
    } else if GENERAL_PATTERN.is_match(reference) {
        ReferenceType::General
    } else {
        ReferenceType::Unknown
    }
}

fn validate_by_type(reference: &str, reference_type: ReferenceType) -> ValidationResult {
    match reference_type {
        ReferenceType::Upi => {
            if reference.chars().count() == 12 && reference.chars().all(|c| c.is_ascii_digit()) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid("UPI reference must be exactly 12 digits")
            }
        }
        ReferenceType::Neft => {
            if NEFT_PATTERN.is_match(reference) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid(
                    "NEFT reference should start with 4 letters followed by 6-10 digits",
                )
            }
        }
        ReferenceType::Imps => {
            let len = reference.chars().count();
            if (12..=16).contains(&len) && reference.chars().all(|c| c.is_ascii_alphanumeric()) {
                ValidationResult::valid()
            } else {
                ValidationResult::invalid("IMPS reference should be 12-16 alphanumeric characters")
            }
        }
        ReferenceType::Bank | ReferenceType::General => ValidationResult::valid(),
        ReferenceType::Unknown => ValidationResult::invalid("Unknown reference format"),
    }
}

/// Canonical form: trimmed, uppercased, internal whitespace stripped.
pub fn format(reference: &str) -> String {
    reference
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// One example reference per classifiable type.
pub fn example_references() -> [(ReferenceType, &'static str); 5] {
    [
        (ReferenceType::Upi, "123456789012"),
        (ReferenceType::Neft, "NEFT12345678"),
        (ReferenceType::Imps, "IMPS123456789012"),
        (ReferenceType::Bank, "TXN123456789"),
        (ReferenceType::General, "REF-2024-001234"),
    ]
}
