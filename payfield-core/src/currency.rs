//! ISO 4217 currency code validation and registry-backed metadata lookup.
//!
//! The platform currency registry is a trait seam; when a registry call fails
//! or returns nothing, lookups recover onto the bundled ten-currency fallback
//! list and formatting degrades to a plain `"CODE 0.00"` rendering. Registry
//! failures never surface to callers.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RegistryError;
use crate::types::{CurrencyInfo, ValidationResult};

/// Currencies pinned to the top of every listing.
pub const POPULAR_CURRENCIES: &[&str] = &[
    "USD", "EUR", "INR", "GBP", "JPY", "CNY", "AUD", "CAD", "CHF", "SEK",
];

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());

/// Source of currency metadata, normally supplied by the host platform.
pub trait CurrencyRegistry {
    fn all_currencies(&self) -> Result<Vec<CurrencyInfo>, RegistryError>;

    fn resolve(&self, code: &str) -> Result<CurrencyInfo, RegistryError>;

    /// Locale-aware currency rendering of `amount`.
    fn format_amount(&self, amount: f64, code: &str) -> Result<String, RegistryError>;
}

/// The hardcoded fallback list used whenever the platform registry is
/// unavailable.
pub fn fallback_currencies() -> Vec<CurrencyInfo> {
    vec![
        CurrencyInfo::new("USD", "US Dollar", "$", 840, 2),
        CurrencyInfo::new("EUR", "Euro", "\u{20ac}", 978, 2),
        CurrencyInfo::new("INR", "Indian Rupee", "\u{20b9}", 356, 2),
        CurrencyInfo::new("GBP", "British Pound", "\u{a3}", 826, 2),
        CurrencyInfo::new("JPY", "Japanese Yen", "\u{a5}", 392, 0),
        CurrencyInfo::new("CNY", "Chinese Yuan", "\u{a5}", 156, 2),
        CurrencyInfo::new("AUD", "Australian Dollar", "A$", 36, 2),
        CurrencyInfo::new("CAD", "Canadian Dollar", "C$", 124, 2),
        CurrencyInfo::new("CHF", "Swiss Franc", "CHF", 756, 2),
        CurrencyInfo::new("SEK", "Swedish Krona", "kr", 752, 2),
    ]
}

/// Registry over the fallback list; also the CLI default.
#[derive(Debug, Default, Clone, Copy)]
pub struct FallbackRegistry;

impl CurrencyRegistry for FallbackRegistry {
    fn all_currencies(&self) -> Result<Vec<CurrencyInfo>, RegistryError> {
        Ok(fallback_currencies())
    }

    fn resolve(&self, code: &str) -> Result<CurrencyInfo, RegistryError> {
        fallback_currencies()
            .into_iter()
            .find(|info| info.code == code)
            .ok_or_else(|| RegistryError::UnknownCode(code.to_string()))
    }

    fn format_amount(&self, amount: f64, code: &str) -> Result<String, RegistryError> {
        let info = self.resolve(code)?;
        let digits = usize::from(info.default_fraction_digits);
        Ok(format!("{}{amount:.digits$}", info.symbol))
    }
}

/// Every known currency, popular subset first, then code ascending within
/// each partition. Degrades to the fallback list when the registry fails or
/// reports nothing.
pub fn all_currencies(registry: &dyn CurrencyRegistry) -> Vec<CurrencyInfo> {
    let mut currencies = match registry.all_currencies() {
        Ok(list) if !list.is_empty() => list,
        _ => fallback_currencies(),
    };
    currencies.retain(|info| info.code.chars().count() == 3);
    currencies.sort_by_key(|info| (!POPULAR_CURRENCIES.contains(&info.code.as_str()), info.code.clone()));
    currencies
}

/// The popular subset of [`all_currencies`], in the same order.
pub fn popular_currencies(registry: &dyn CurrencyRegistry) -> Vec<CurrencyInfo> {
    all_currencies(registry)
        .into_iter()
        .filter(|info| POPULAR_CURRENCIES.contains(&info.code.as_str()))
        .collect()
}

/// Resolves one currency. An unavailable registry falls back to the bundled
/// list; a code the registry knows to be absent resolves to `None`.
pub fn currency_by_code(registry: &dyn CurrencyRegistry, code: &str) -> Option<CurrencyInfo> {
    match registry.resolve(code) {
        Ok(info) => Some(info),
        Err(RegistryError::Unavailable) => fallback_currencies()
            .into_iter()
            .find(|info| info.code == code),
        Err(_) => None,
    }
}

/// Validates a currency code: exactly three uppercase letters known to the
/// registry (or the fallback list).
pub fn validate_code(code: &str, registry: &dyn CurrencyRegistry) -> ValidationResult {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return ValidationResult::invalid("Currency is required");
    }

    if trimmed.chars().count() != 3 {
        return ValidationResult::invalid("Currency code must be 3 characters");
    }

    if !CODE_PATTERN.is_match(trimmed) {
        return ValidationResult::invalid("Currency code must be 3 uppercase letters");
    }

    if currency_by_code(registry, trimmed).is_none() {
        return ValidationResult::invalid(format!("Invalid currency code: {trimmed}"));
    }

    ValidationResult::valid()
}

/// Currency-aware amount rendering with the deterministic fallback string
/// when the registry cannot format.
pub fn format_amount(amount: f64, code: &str, registry: &dyn CurrencyRegistry) -> String {
    registry
        .format_amount(amount, code)
        .unwrap_or_else(|_| format!("{code} {amount:.2}"))
}
