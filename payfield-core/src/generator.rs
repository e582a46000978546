//! Cryptographically-secure identifier and reference generation.
//!
//! Both generators draw from [`OsRng`], the operating-system CSPRNG, which is
//! safe for concurrent use from any number of callers. Output follows a
//! closed-loop contract: generate, run the matching `validate_generated_*`
//! check, and only then display or accept the value.

use chrono::Utc;
use rand::rngs::OsRng;
use rand::Rng;
use uuid::Uuid;

use crate::types::{ReferenceFormat, ValidationResult};

pub const DEFAULT_ID_LENGTH: usize = 35;
pub const DEFAULT_ID_PREFIX: &str = "MBTID";
pub const DEFAULT_REFERENCE_PREFIX: &str = "TXN";
pub const DEFAULT_UUID_PREFIX: &str = "REF";

const MIN_GENERATED_REFERENCE: usize = 8;
const MAX_GENERATED_REFERENCE: usize = 25;

const ALPHANUMERIC_MIXED: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const ALPHANUMERIC_UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const DIGITS: &[u8] = b"0123456789";

/// Generates a transaction ID: `prefix` followed by uniform draws from the
/// 62-character alphanumeric alphabet up to `length` total characters.
///
/// # Panics
///
/// Panics when `length` does not exceed the prefix length; that is a caller
/// contract violation, not an input-validation failure.
pub fn generate_id(length: usize, prefix: Option<&str>) -> String {
    let base = prefix.unwrap_or(DEFAULT_ID_PREFIX);
    assert!(
        length > base.chars().count(),
        "generated ID length must exceed prefix length"
    );

    let fill = length - base.chars().count();
    base.to_string() + &random_fill(ALPHANUMERIC_MIXED, fill)
}

/// Length-and-charset check for generator-produced IDs. No semantic
/// re-classification; the value must be exactly 35 alphanumeric characters.
pub fn validate_generated_id(id: &str) -> ValidationResult {
    if id.chars().count() != DEFAULT_ID_LENGTH {
        return ValidationResult::invalid("Generated ID must be 35 characters long");
    }

    if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return ValidationResult::invalid("Generated ID contains invalid characters");
    }

    ValidationResult::valid()
}

/// Generates a transaction reference in the requested format.
///
/// # Panics
///
/// For the fixed-fill formats, panics when the target length does not exceed
/// the prefix length (caller contract violation).
pub fn generate_reference(format: ReferenceFormat, prefix: Option<&str>) -> String {
    match format {
        ReferenceFormat::Alphanumeric12 => alphanumeric_reference(12, prefix),
        ReferenceFormat::Alphanumeric16 => alphanumeric_reference(16, prefix),
        ReferenceFormat::Numeric12 => numeric_reference(12, prefix),
        ReferenceFormat::Timestamped => timestamped_reference(prefix),
        ReferenceFormat::UuidShort => uuid_short_reference(prefix),
    }
}

/// Length-and-charset check for generator-produced references: 8-25 uppercase
/// alphanumeric characters.
pub fn validate_generated_reference(reference: &str) -> ValidationResult {
    let len = reference.chars().count();
    if len < MIN_GENERATED_REFERENCE {
        return ValidationResult::invalid("Generated reference too short");
    }
    if len > MAX_GENERATED_REFERENCE {
        return ValidationResult::invalid("Generated reference too long");
    }

    if !reference
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    {
        return ValidationResult::invalid("Generated reference contains invalid characters");
    }

    ValidationResult::valid()
}

fn alphanumeric_reference(length: usize, prefix: Option<&str>) -> String {
    let base = prefix.unwrap_or(DEFAULT_REFERENCE_PREFIX);
    assert!(
        length > base.chars().count(),
        "reference length must exceed prefix length"
    );

    let fill = length - base.chars().count();
    base.to_string() + &random_fill(ALPHANUMERIC_UPPER, fill)
}

fn numeric_reference(length: usize, prefix: Option<&str>) -> String {
    let base = prefix.unwrap_or("");
    assert!(
        length > base.chars().count(),
        "reference length must exceed prefix length"
    );

    let fill = length - base.chars().count();
    base.to_string() + &random_fill(DIGITS, fill)
}

// Prefix + yyMMddHHmmss + 4 random characters for same-second uniqueness.
fn timestamped_reference(prefix: Option<&str>) -> String {
    let base = prefix.unwrap_or(DEFAULT_REFERENCE_PREFIX);
    let timestamp = Utc::now().format("%y%m%d%H%M%S");
    format!("{base}{timestamp}{}", random_fill(ALPHANUMERIC_UPPER, 4))
}

fn uuid_short_reference(prefix: Option<&str>) -> String {
    let base = prefix.unwrap_or(DEFAULT_UUID_PREFIX);
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{base}{}", &hex[..12])
}

fn random_fill(alphabet: &[u8], count: usize) -> String {
    let mut rng = OsRng;
    (0..count)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}

/// One example value per reference format.
pub fn format_examples() -> [(ReferenceFormat, &'static str); 5] {
    [
        (ReferenceFormat::Alphanumeric12, "TXN123ABC456"),
        (ReferenceFormat::Alphanumeric16, "TXNX1234ABCD5678"),
        (ReferenceFormat::Numeric12, "123456789012"),
        (ReferenceFormat::Timestamped, "TXN240929123456ABCD"),
        (ReferenceFormat::UuidShort, "REFABC123DEF456"),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn generated_id_round_trips_through_validator() {
        for _ in 0..100 {
            let id = generate_id(DEFAULT_ID_LENGTH, None);
            assert_eq!(id.len(), DEFAULT_ID_LENGTH);
            assert!(id.starts_with(DEFAULT_ID_PREFIX));
            assert!(validate_generated_id(&id).is_valid);
        }
    }

    #[test]
    fn generated_id_honors_custom_prefix() {
        let id = generate_id(35, Some("SHOP"));
        assert!(id.starts_with("SHOP"));
        assert_eq!(id.len(), 35);
    }

    #[test]
    #[should_panic(expected = "exceed prefix length")]
    fn id_length_not_above_prefix_panics() {
        generate_id(5, Some("MBTID"));
    }

    #[test]
    fn every_reference_format_round_trips() {
        for format in ReferenceFormat::ALL {
            for _ in 0..50 {
                let reference = generate_reference(format, None);
                let result = validate_generated_reference(&reference);
                assert!(
                    result.is_valid,
                    "{format:?} produced {reference:?}: {:?}",
                    result.error_message
                );
            }
        }
    }

    #[test]
    fn reference_lengths_match_their_format() {
        assert_eq!(generate_reference(ReferenceFormat::Alphanumeric12, None).len(), 12);
        assert_eq!(generate_reference(ReferenceFormat::Alphanumeric16, None).len(), 16);
        assert_eq!(generate_reference(ReferenceFormat::Numeric12, None).len(), 12);
        // TXN + 12-digit timestamp + 4 random
        assert_eq!(generate_reference(ReferenceFormat::Timestamped, None).len(), 19);
        // REF + 12 hex chars
        assert_eq!(generate_reference(ReferenceFormat::UuidShort, None).len(), 15);
    }

    #[test]
    fn numeric_format_is_all_digits() {
        let reference = generate_reference(ReferenceFormat::Numeric12, None);
        assert!(reference.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    #[should_panic(expected = "exceed prefix length")]
    fn reference_prefix_consuming_whole_length_panics() {
        generate_reference(ReferenceFormat::Alphanumeric12, Some("TWELVECHARSX"));
    }

    #[test]
    fn generated_reference_validator_rejects_out_of_contract_values() {
        assert_eq!(
            validate_generated_reference("SHORT").error_message.as_deref(),
            Some("Generated reference too short")
        );
        assert_eq!(
            validate_generated_reference(&"A".repeat(26))
                .error_message
                .as_deref(),
            Some("Generated reference too long")
        );
        assert_eq!(
            validate_generated_reference("TXN123abc456")
                .error_message
                .as_deref(),
            Some("Generated reference contains invalid characters")
        );
    }

    #[test]
    fn format_examples_pass_the_generated_check() {
        for (format, example) in format_examples() {
            assert!(
                validate_generated_reference(example).is_valid,
                "{format:?} example {example:?}"
            );
        }
    }

    #[test]
    fn generated_ids_do_not_collide() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_id(DEFAULT_ID_LENGTH, None)));
        }
    }

    #[test]
    fn generated_references_do_not_collide() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(generate_reference(ReferenceFormat::Alphanumeric16, None)));
        }
    }
}
