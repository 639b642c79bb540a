//! CPF/CNPJ classification, check-digit validation, and masking.
//!
//! Inputs may carry the usual display separators (space, `.`, `-`, `/`);
//! they are stripped before anything else happens. The stripped length
//! alone decides the kind: 11 digits is a CPF ([`DocumentKind::Individual`]),
//! 14 digits a CNPJ ([`DocumentKind::Entity`]).
//!
//! # Example
//!
//! ```rust
//! use brdoc::document::*;
//!
//! assert_eq!(classify("000.000.001-91"), DocumentKind::Individual);
//! assert!(is_valid("44.679.387/0001-20"));
//! assert_eq!(format("12345678000100"), "12.345.678/0001-00");
//!
//! // Formatting is best-effort: garbage comes back untouched.
//! assert_eq!(format("aaaaaaaaaaa"), "aaaaaaaaaaa");
//! ```

pub mod check_digits;
mod error;
mod format;
mod kind;
mod mask;
mod types;
mod validate;

pub use check_digits::complete;
pub use error::DocumentError;
pub use format::{format, format_any, format_entity, format_individual};
pub use kind::{CNPJ_LENGTH, CPF_LENGTH, DocumentKind};
pub use mask::Mask;
pub use types::Document;
pub use validate::{
    classify, has_entity_length, has_individual_length, is_valid, is_valid_entity,
    is_valid_individual, validate, validate_entity, validate_individual,
};

use crate::text;

/// Separators accepted (and ignored) inside a document number.
pub const FORMATTING_CHARACTERS: [char; 4] = [' ', '.', '-', '/'];

/// Remove every [`FORMATTING_CHARACTERS`] occurrence from `value`.
pub fn strip_formatting(value: &str) -> String {
    text::remove_characters(value, &FORMATTING_CHARACTERS)
}
