use super::check_digits::{self, ENTITY_PAYLOAD_LEN, INDIVIDUAL_PAYLOAD_LEN};
use super::error::DocumentError;
use super::kind::{CNPJ_LENGTH, CPF_LENGTH, DocumentKind};
use super::strip_formatting;
use crate::text;

/// Classify by stripped length. Content is never inspected.
///
/// `None` classifies as [`DocumentKind::Unknown`].
pub fn classify<'a>(value: impl Into<Option<&'a str>>) -> DocumentKind {
    match value.into() {
        Some(value) => DocumentKind::from_len(stripped_len(&strip_formatting(value))),
        None => DocumentKind::Unknown,
    }
}

/// `true` if the stripped value has 11 characters.
pub fn has_individual_length<'a>(value: impl Into<Option<&'a str>>) -> bool {
    classify(value) == DocumentKind::Individual
}

/// `true` if the stripped value has 14 characters.
pub fn has_entity_length<'a>(value: impl Into<Option<&'a str>>) -> bool {
    classify(value) == DocumentKind::Entity
}

/// Validate a CPF or CNPJ, choosing the algorithm by stripped length.
///
/// Returns the detected kind on success, or the first reason the value
/// was rejected.
pub fn validate<'a>(value: impl Into<Option<&'a str>>) -> Result<DocumentKind, DocumentError> {
    let value = value.into().ok_or(DocumentError::Missing)?;
    let digits = strip_formatting(value);
    match DocumentKind::from_len(stripped_len(&digits)) {
        DocumentKind::Individual => check_individual(&digits).map(|()| DocumentKind::Individual),
        DocumentKind::Entity => check_entity(&digits).map(|()| DocumentKind::Entity),
        DocumentKind::Unknown => Err(DocumentError::UnknownLength {
            len: stripped_len(&digits),
        }),
    }
}

/// Validate as a CPF only.
pub fn validate_individual<'a>(value: impl Into<Option<&'a str>>) -> Result<(), DocumentError> {
    let digits = stripped_for(value.into(), DocumentKind::Individual, CPF_LENGTH)?;
    check_individual(&digits)
}

/// Validate as a CNPJ only.
pub fn validate_entity<'a>(value: impl Into<Option<&'a str>>) -> Result<(), DocumentError> {
    let digits = stripped_for(value.into(), DocumentKind::Entity, CNPJ_LENGTH)?;
    check_entity(&digits)
}

/// `true` if `value` is a valid CPF or CNPJ (formatting ignored).
///
/// ```rust
/// assert!(brdoc::is_valid("000.000.001-91"));
/// assert!(!brdoc::is_valid("00000000000"));
/// assert!(!brdoc::is_valid(None));
/// ```
pub fn is_valid<'a>(value: impl Into<Option<&'a str>>) -> bool {
    validate(value).is_ok()
}

/// `true` if `value` is a valid CPF.
pub fn is_valid_individual<'a>(value: impl Into<Option<&'a str>>) -> bool {
    validate_individual(value).is_ok()
}

/// `true` if `value` is a valid CNPJ.
pub fn is_valid_entity<'a>(value: impl Into<Option<&'a str>>) -> bool {
    validate_entity(value).is_ok()
}

fn stripped_len(digits: &str) -> usize {
    digits.chars().count()
}

fn stripped_for(
    value: Option<&str>,
    kind: DocumentKind,
    expected: usize,
) -> Result<String, DocumentError> {
    let digits = strip_formatting(value.ok_or(DocumentError::Missing)?);
    let len = stripped_len(&digits);
    if len != expected {
        return Err(DocumentError::WrongLength {
            kind,
            expected,
            len,
        });
    }
    Ok(digits)
}

/// `digits` is already stripped and 11 characters long.
fn check_individual(digits: &str) -> Result<(), DocumentError> {
    const KIND: DocumentKind = DocumentKind::Individual;
    if !text::is_numeric(digits) {
        return Err(DocumentError::NonNumeric { kind: KIND });
    }
    let all = check_digits::to_digits::<CPF_LENGTH>(digits)
        .ok_or(DocumentError::NonNumeric { kind: KIND })?;
    let mut payload = [0u8; INDIVIDUAL_PAYLOAD_LEN];
    payload.copy_from_slice(&all[..INDIVIDUAL_PAYLOAD_LEN]);

    let first = check_digits::individual_first(&payload);
    expect_digit(KIND, &all, INDIVIDUAL_PAYLOAD_LEN, first)?;
    let second = check_digits::individual_second(&payload, first);
    expect_digit(KIND, &all, INDIVIDUAL_PAYLOAD_LEN + 1, second)?;

    if all.iter().all(|&d| d == all[0]) {
        return Err(DocumentError::RepeatedDigits { kind: KIND });
    }
    Ok(())
}

/// `digits` is already stripped and 14 characters long.
fn check_entity(digits: &str) -> Result<(), DocumentError> {
    const KIND: DocumentKind = DocumentKind::Entity;
    if !text::is_numeric(digits) {
        return Err(DocumentError::NonNumeric { kind: KIND });
    }
    // Only the all-zero value is special-cased for CNPJ.
    if digits == "00000000000000" {
        return Err(DocumentError::RepeatedDigits { kind: KIND });
    }
    let all = check_digits::to_digits::<CNPJ_LENGTH>(digits)
        .ok_or(DocumentError::NonNumeric { kind: KIND })?;
    let mut payload = [0u8; ENTITY_PAYLOAD_LEN];
    payload.copy_from_slice(&all[..ENTITY_PAYLOAD_LEN]);

    let first = check_digits::entity_first(&payload);
    expect_digit(KIND, &all, ENTITY_PAYLOAD_LEN, first)?;
    let second = check_digits::entity_second(&payload, first);
    expect_digit(KIND, &all, ENTITY_PAYLOAD_LEN + 1, second)
}

fn expect_digit(
    kind: DocumentKind,
    all: &[u8],
    position: usize,
    expected: u8,
) -> Result<(), DocumentError> {
    let found = all[position];
    if found == expected {
        Ok(())
    } else {
        Err(DocumentError::CheckDigitMismatch {
            kind,
            position,
            expected,
            found,
        })
    }
}
