//! Pure validation, formatting, and secure generation for payment-request
//! form fields.
//!
//! Each field concern lives in its own module and exposes stateless
//! functions: `validate` returning a [`ValidationResult`], a `format`
//! producing the canonical form where one is defined, and auxiliary lookups
//! (reference classification, MCC categories, character counts). The
//! `generator` module produces cryptographically-random identifiers that must
//! round-trip through their own `validate_generated_*` check before use.
//!
//! Everything is synchronous, reentrant, and free of shared mutable state;
//! callers own scheduling and debouncing.

pub mod amount;
pub mod app_id;
pub mod app_name;
pub mod charinfo;
pub mod currency;
pub mod error;
pub mod generator;
pub mod mcc;
pub mod name;
pub mod note;
pub mod reference;
pub mod txid;
pub mod types;
pub mod vpa;

pub use error::RegistryError;
pub use types::{
    CharacterInfo, CurrencyInfo, Origin, ReferenceFormat, ReferenceType, ValidationResult,
};
