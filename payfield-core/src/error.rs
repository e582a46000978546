use thiserror::Error;

/// Failures raised by a [`crate::currency::CurrencyRegistry`] implementation.
///
/// These never escape the library surface: currency lookups recover onto the
/// bundled fallback list and amount formatting degrades to the plain
/// `"CODE 0.00"` rendering.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("currency registry unavailable")]
    Unavailable,

    #[error("unknown currency code '{0}'")]
    UnknownCode(String),

    #[error("registry cannot format amounts for '{0}'")]
    Unformattable(String),
}
