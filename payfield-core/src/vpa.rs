//! Payee identifier (VPA) validation, `localpart@handle` per NPCI shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ValidationResult;

const LOCALPART_MIN: usize = 2;
const LOCALPART_MAX: usize = 256;
const HANDLE_MIN: usize = 2;
const HANDLE_MAX: usize = 64;

static VPA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9.-]{2,256}@[a-zA-Z]{2,64}$").unwrap());

/// UPI handles common enough to surface a provider hint in the UI. Purely
/// informational; membership does not gate validity.
const POPULAR_HANDLES: &[&str] = &[
    "paytm", "phonepe", "gpay", "ybl", "okaxis", "okicici", "okhdfcbank", "oksbi", "okbizaxis",
    "ibl", "axl", "apl", "fbl", "idfcbank", "pnb", "boi", "cnrb", "upi", "allbank", "unionbank",
    "indianbank",
];

/// Validates a payee identifier. The whole-string grammar runs first; the
/// per-part checks after it are deliberately re-applied so a failure names the
/// exact violated clause.
pub fn validate(vpa: &str) -> ValidationResult {
    let trimmed = vpa.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("VPA cannot be empty");
    }

    if !VPA_PATTERN.is_match(trimmed) {
        return ValidationResult::invalid("Invalid VPA format. Use format: username@bankname");
    }

    if !trimmed.contains('@') {
        return ValidationResult::invalid("VPA must contain @ symbol");
    }

    let parts: Vec<&str> = trimmed.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::invalid("VPA must have exactly one @ symbol");
    }

    let username = parts[0];
    let handle = parts[1];

    if username.chars().count() < LOCALPART_MIN {
        return ValidationResult::invalid("Username must be at least 2 characters long");
    }
    if username.chars().count() > LOCALPART_MAX {
        return ValidationResult::invalid("Username cannot exceed 256 characters");
    }

    if handle.chars().count() < HANDLE_MIN {
        return ValidationResult::invalid("Bank handle must be at least 2 characters long");
    }
    if handle.chars().count() > HANDLE_MAX {
        return ValidationResult::invalid("Bank handle cannot exceed 64 characters");
    }

    if !handle.chars().all(|c| c.is_ascii_alphabetic()) {
        return ValidationResult::invalid("Bank handle must contain only alphabets");
    }

    ValidationResult::valid()
}

/// Canonical form: trimmed and lowercased. Idempotent.
pub fn format(vpa: &str) -> String {
    vpa.trim().to_lowercase()
}

/// Whether the handle belongs to a well-known UPI provider.
pub fn is_popular_handle(vpa: &str) -> bool {
    let Some(handle) = vpa.split('@').nth(1) else {
        return false;
    };
    let handle = handle.to_lowercase();
    POPULAR_HANDLES.contains(&handle.as_str())
}
