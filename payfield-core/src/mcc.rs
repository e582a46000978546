//! Merchant category code validation and ISO 18245 category lookup.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ValidationResult;

const MIN_CODE: u16 = 1;
const MAX_CODE: u16 = 9999;

static MCC_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").unwrap());

/// Reserved/unassigned ranges. Only the all-zero code today; kept as a hook
/// for future assignments.
const RESERVED_RANGES: &[(u16, u16)] = &[(0, 0)];

/// Broad category bands, contiguous and non-overlapping, scanned in order.
const CATEGORY_RANGES: &[(u16, u16, &str)] = &[
    (1, 1499, "Agricultural Services"),
    (1500, 2999, "Contracted Services"),
    (3000, 3299, "Airlines"),
    (3300, 3499, "Car Rental"),
    (3500, 3999, "Lodging"),
    (4000, 4799, "Transportation Services"),
    (4800, 4999, "Utility Services"),
    (5000, 5599, "Retail Outlet Services"),
    (5600, 5699, "Clothing Stores"),
    (5700, 7299, "Miscellaneous Stores"),
    (7300, 7999, "Business Services"),
    (8000, 8999, "Professional Services and Membership Organizations"),
    (9000, 9999, "Government Services"),
];

/// Frequently-used codes resolved ahead of the range bands.
const POPULAR_CODES: &[(&str, &str)] = &[
    ("5411", "Grocery Stores/Supermarkets"),
    ("5812", "Restaurants"),
    ("5542", "Automated Fuel Dispensers"),
    ("5541", "Service Stations"),
    ("5999", "Miscellaneous Retail Stores"),
    ("5311", "Department Stores"),
    ("5732", "Electronics Stores"),
    ("5814", "Fast Food Restaurants"),
    ("4900", "Utilities"),
    ("5912", "Drug Stores/Pharmacies"),
    ("5943", "Stationery/Office Supply Stores"),
    ("5651", "Family Clothing Stores"),
    ("5691", "Men's/Women's Clothing Stores"),
    ("5734", "Computer Software Stores"),
    ("5941", "Sporting Goods Stores"),
    ("5945", "Hobby/Toy/Game Shops"),
    ("7011", "Hotels/Motels/Resorts"),
    ("3000", "Airlines"),
    ("5661", "Shoe Stores"),
    ("5947", "Gift/Card/Novelty Shops"),
];

/// Validates a merchant category code: exactly four digits in 0001-9999 and
/// outside the reserved ranges.
pub fn validate(mcc: &str) -> ValidationResult {
    let trimmed = mcc.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("MCC cannot be empty");
    }

    if !MCC_PATTERN.is_match(trimmed) {
        return ValidationResult::invalid("MCC must be exactly 4 digits");
    }

    let value = match trimmed.parse::<u16>() {
        Ok(value) if (MIN_CODE..=MAX_CODE).contains(&value) => value,
        _ => return ValidationResult::invalid("MCC must be between 0001 and 9999"),
    };

    if is_reserved(value) {
        return ValidationResult::invalid("This MCC code is in a reserved range");
    }

    ValidationResult::valid()
}

fn is_reserved(mcc: u16) -> bool {
    RESERVED_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&mcc))
}

/// Resolves the category label for a valid code: popular map first, then the
/// first matching range band. `None` for invalid codes.
pub fn category(mcc: &str) -> Option<&'static str> {
    let trimmed = mcc.trim();
    if !validate(trimmed).is_valid {
        return None;
    }

    if let Some(&(_, label)) = POPULAR_CODES.iter().find(|&&(code, _)| code == trimmed) {
        return Some(label);
    }

    let value: u16 = trimmed.parse().ok()?;
    CATEGORY_RANGES
        .iter()
        .find(|&&(start, end, _)| (start..=end).contains(&value))
        .map(|&(_, _, label)| label)
}

/// Left-pads a digit-only code to four digits. Inputs whose digit content is
/// empty or longer than four characters come back unchanged.
pub fn format(mcc: &str) -> String {
    let digits: String = mcc.chars().filter(|c| c.is_ascii_digit()).collect();
    if !digits.is_empty() && digits.len() <= 4 {
        format!("{digits:0>4}")
    } else {
        mcc.to_string()
    }
}

/// Popular-code completions for a partial entry of at least two digits.
pub fn suggestions(partial: &str, limit: usize) -> Vec<(&'static str, &'static str)> {
    if partial.chars().count() < 2 {
        return Vec::new();
    }

    POPULAR_CODES
        .iter()
        .filter(|&&(code, _)| code.starts_with(partial))
        .take(limit)
        .copied()
        .collect()
}

pub fn is_popular(mcc: &str) -> bool {
    POPULAR_CODES.iter().any(|&(code, _)| code == mcc)
}
