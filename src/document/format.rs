//! Best-effort display formatting.
//!
//! Formatting never fails: when the value cannot be masked the original
//! input is returned verbatim. Absent values map over `Option`
//! (`value.map(format)`).

use super::kind::DocumentKind;
use super::strip_formatting;
use super::validate::classify;
use crate::text::left_pad;

/// Format as CPF or CNPJ by stripped length (14 is a CNPJ, anything
/// else a CPF).
///
/// ```rust
/// assert_eq!(brdoc::format("00000000191"), "000.000.001-91");
/// assert_eq!(brdoc::format("12345678000100"), "12.345.678/0001-00");
/// ```
pub fn format(value: &str) -> String {
    format_any(value)
}

/// Same dispatch as [`format`]: CNPJ mask for 14 stripped characters,
/// CPF mask otherwise.
pub fn format_any(value: &str) -> String {
    match classify(value) {
        DocumentKind::Entity => format_entity(value),
        DocumentKind::Individual | DocumentKind::Unknown => format_individual(value),
    }
}

/// Left-pad to 11 digits and apply `DDD.DDD.DDD-DD`.
pub fn format_individual(value: &str) -> String {
    format_as(value, DocumentKind::Individual)
}

/// Left-pad to 14 digits and apply `DD.DDD.DDD/DDDD-DD`.
pub fn format_entity(value: &str) -> String {
    format_as(value, DocumentKind::Entity)
}

fn format_as(value: &str, kind: DocumentKind) -> String {
    let (Some(len), Some(mask)) = (kind.digit_count(), kind.mask()) else {
        return value.to_owned();
    };
    let padded = left_pad(strip_formatting(value).as_str(), len, '0');
    mask.apply(&padded).unwrap_or_else(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_valid_values() {
        assert_eq!(format("00000000191"), "000.000.001-91");
        assert_eq!(format("12345678000100"), "12.345.678/0001-00");
        assert_eq!(format("0"), "000.000.000-00");
        assert_eq!(format("123456789123456789"), "123.456.789-12");
    }

    #[test]
    fn falls_back_on_garbage() {
        assert_eq!(format("aaaaaaaaaaa"), "aaaaaaaaaaa");
        assert_eq!(format("12345678OOO1OO"), "12345678OOO1OO");
    }

    #[test]
    fn already_formatted_is_stable() {
        assert_eq!(format("000.000.001-91"), "000.000.001-91");
        assert_eq!(format("44.679.387/0001-20"), "44.679.387/0001-20");
    }

    #[test]
    fn short_input_padded_as_cpf() {
        assert_eq!(format("191"), "000.000.001-91");
        assert_eq!(format(""), "000.000.000-00");
    }

    #[test]
    fn kind_specific_formatters() {
        assert_eq!(format_entity("44679387000120"), "44.679.387/0001-20");
        assert_eq!(format_entity("1"), "00.000.000/0000-01");
        assert_eq!(format_individual("15684611192"), "156.846.111-92");
    }

    #[test]
    fn invalid_but_well_sized_still_formatted() {
        assert_eq!(format("15684611193"), "156.846.111-93");
    }
}
