use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Outcome of a single field validation.
///
/// `error_message` is `Some` exactly when `is_valid` is false; the
/// constructors are the only way callers should build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<ReferenceType>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
            reference_type: None,
        }
    }

    pub fn valid_with_type(reference_type: ReferenceType) -> Self {
        Self {
            is_valid: true,
            error_message: None,
            reference_type: Some(reference_type),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
            reference_type: None,
        }
    }
}

/// Transaction reference families, assigned by ordered pattern precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceType {
    Upi,
    Bank,
    Imps,
    Neft,
    General,
    Unknown,
}

impl ReferenceType {
    pub const fn description(self) -> &'static str {
        match self {
            ReferenceType::Upi => "UPI Transaction Reference (12 digits)",
            ReferenceType::Bank => "Bank Transaction Reference",
            ReferenceType::Imps => "IMPS Transaction Reference",
            ReferenceType::Neft => "NEFT Transaction Reference",
            ReferenceType::General => "General Transaction Reference",
            ReferenceType::Unknown => "Unknown Reference Format",
        }
    }
}

impl Display for ReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Generation algorithm for secure transaction references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceFormat {
    Alphanumeric12,
    Alphanumeric16,
    Numeric12,
    Timestamped,
    UuidShort,
}

impl ReferenceFormat {
    pub const ALL: [ReferenceFormat; 5] = [
        ReferenceFormat::Alphanumeric12,
        ReferenceFormat::Alphanumeric16,
        ReferenceFormat::Numeric12,
        ReferenceFormat::Timestamped,
        ReferenceFormat::UuidShort,
    ];
}

/// Whether a field value was typed by the user or produced by a generator.
///
/// The generator-backed fields (transaction ID and reference) validate
/// differently depending on where the value came from; callers pass the tag
/// instead of tracking a side-channel flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    UserEntered,
    Generated,
}

/// Snapshot of a text buffer for remaining-character hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterInfo {
    pub character_count: usize,
    pub word_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_count: Option<usize>,
    pub remaining_chars: i64,
    pub is_near_limit: bool,
}

/// Read-only projection of one currency registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyInfo {
    /// ISO 4217 alphabetic code, e.g. "USD".
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub numeric_code: u16,
    pub default_fraction_digits: u8,
    /// Dropdown label, "CODE - Name".
    pub display_name: String,
}

impl CurrencyInfo {
    pub fn new(
        code: &str,
        name: &str,
        symbol: &str,
        numeric_code: u16,
        default_fraction_digits: u8,
    ) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            numeric_code,
            default_fraction_digits,
            display_name: format!("{code} - {name}"),
        }
    }
}
