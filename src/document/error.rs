use thiserror::Error;

use super::kind::DocumentKind;

/// Why a value is not a valid CPF/CNPJ.
///
/// Invalid documents are an expected outcome (typos are common), so the
/// boolean API in [`super::is_valid`] is usually what callers want; this type
/// exists for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// No value was given.
    #[error("no document number given")]
    Missing,

    /// Stripped length matches neither CPF nor CNPJ.
    #[error("expected 11 (CPF) or 14 (CNPJ) digits, got {len} characters")]
    UnknownLength { len: usize },

    /// Stripped length does not match the requested kind.
    #[error("{kind} must have {expected} digits, got {len} characters")]
    WrongLength {
        kind: DocumentKind,
        expected: usize,
        len: usize,
    },

    /// Something other than an ASCII digit survived stripping.
    #[error("{kind} contains non-digit characters")]
    NonNumeric { kind: DocumentKind },

    /// A check digit does not match the computed one.
    #[error("{kind} check digit at position {position} should be {expected}, found {found}")]
    CheckDigitMismatch {
        kind: DocumentKind,
        position: usize,
        expected: u8,
        found: u8,
    },

    /// Degenerate value that passes the arithmetic but is never issued.
    #[error("{kind} with all digits identical is not a real document")]
    RepeatedDigits { kind: DocumentKind },
}
