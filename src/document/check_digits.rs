//! Modulo-11 check digits for CPF and CNPJ.
//!
//! Digits are plain `u8` values `0..=9`, indexed from 0. Weights are
//! paired positionally with the digits they multiply.

use super::strip_formatting;

/// Digits preceding the two CPF check digits.
pub const INDIVIDUAL_PAYLOAD_LEN: usize = 9;
/// Digits preceding the two CNPJ check digits.
pub const ENTITY_PAYLOAD_LEN: usize = 12;

const ENTITY_FIRST_WEIGHTS: [u32; ENTITY_PAYLOAD_LEN] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const ENTITY_SECOND_WEIGHTS: [u32; ENTITY_PAYLOAD_LEN + 1] =
    [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// First CPF check digit (position 9).
pub fn individual_first(payload: &[u8; INDIVIDUAL_PAYLOAD_LEN]) -> u8 {
    let sum: u32 = payload
        .iter()
        .zip((2..=10u32).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    individual_digit(sum)
}

/// Second CPF check digit (position 10), given the first.
pub fn individual_second(payload: &[u8; INDIVIDUAL_PAYLOAD_LEN], first: u8) -> u8 {
    let sum: u32 = payload
        .iter()
        .zip((3..=11u32).rev())
        .map(|(&d, w)| u32::from(d) * w)
        .sum();
    individual_digit(u32::from(first) * 2 + sum)
}

/// Both CPF check digits.
pub fn individual(payload: &[u8; INDIVIDUAL_PAYLOAD_LEN]) -> [u8; 2] {
    let first = individual_first(payload);
    [first, individual_second(payload, first)]
}

/// First CNPJ check digit (position 12).
pub fn entity_first(payload: &[u8; ENTITY_PAYLOAD_LEN]) -> u8 {
    entity_digit(weighted_sum(payload, &ENTITY_FIRST_WEIGHTS))
}

/// Second CNPJ check digit (position 13), given the first.
pub fn entity_second(payload: &[u8; ENTITY_PAYLOAD_LEN], first: u8) -> u8 {
    let sum = weighted_sum(payload, &ENTITY_SECOND_WEIGHTS[..ENTITY_PAYLOAD_LEN])
        + u32::from(first) * ENTITY_SECOND_WEIGHTS[ENTITY_PAYLOAD_LEN];
    entity_digit(sum)
}

/// Both CNPJ check digits.
pub fn entity(payload: &[u8; ENTITY_PAYLOAD_LEN]) -> [u8; 2] {
    let first = entity_first(payload);
    [first, entity_second(payload, first)]
}

/// Append the check digits to a CPF or CNPJ payload.
///
/// Formatting characters are stripped first. A 9-digit payload yields a
/// CPF, a 12-digit one a CNPJ; anything else gives `None`.
///
/// ```rust
/// assert_eq!(brdoc::complete("000.000.001").as_deref(), Some("00000000191"));
/// assert_eq!(brdoc::complete("12345"), None);
/// ```
pub fn complete(payload: &str) -> Option<String> {
    let digits = strip_formatting(payload);
    let check = match digits.len() {
        INDIVIDUAL_PAYLOAD_LEN => individual(&to_digits(&digits)?),
        ENTITY_PAYLOAD_LEN => entity(&to_digits(&digits)?),
        _ => return None,
    };
    let mut out = digits;
    out.extend(check.iter().map(|&d| char::from(b'0' + d)));
    Some(out)
}

/// Convert exactly `N` ASCII digits to their values.
pub fn to_digits<const N: usize>(s: &str) -> Option<[u8; N]> {
    if s.len() != N {
        return None;
    }
    let mut out = [0u8; N];
    for (slot, b) in out.iter_mut().zip(s.bytes()) {
        if !b.is_ascii_digit() {
            return None;
        }
        *slot = b - b'0';
    }
    Some(out)
}

fn weighted_sum(digits: &[u8], weights: &[u32]) -> u32 {
    digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum()
}

fn individual_digit(sum: u32) -> u8 {
    match 11 - sum % 11 {
        d @ 0..=9 => d as u8,
        _ => 0,
    }
}

fn entity_digit(sum: u32) -> u8 {
    match sum % 11 {
        0 | 1 => 0,
        r => (11 - r) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_known_values() {
        assert_eq!(individual(&[0, 0, 0, 0, 0, 0, 0, 0, 1]), [9, 1]);
        assert_eq!(individual(&[1, 5, 6, 8, 4, 6, 1, 1, 1]), [9, 2]);
        assert_eq!(individual(&[0, 1, 3, 1, 6, 3, 5, 9, 1]), [3, 1]);
    }

    #[test]
    fn individual_all_zero_payload() {
        // 11 - 0 = 11 > 9, so both digits collapse to 0.
        assert_eq!(individual(&[0; 9]), [0, 0]);
    }

    #[test]
    fn entity_known_values() {
        assert_eq!(entity(&[4, 4, 6, 7, 9, 3, 8, 7, 0, 0, 0, 1]), [2, 0]);
        assert_eq!(entity(&[7, 2, 0, 3, 9, 2, 0, 8, 0, 0, 0, 1]), [2, 5]);
        assert_eq!(entity(&[4, 4, 5, 2, 9, 0, 2, 3, 0, 0, 0, 1]), [6, 3]);
    }

    #[test]
    fn entity_second_uses_first() {
        let payload = [4, 4, 6, 7, 9, 3, 8, 7, 0, 0, 0, 1];
        assert_ne!(entity_second(&payload, 2), entity_second(&payload, 3));
    }

    #[test]
    fn complete_cpf() {
        assert_eq!(complete("156846111").as_deref(), Some("15684611192"));
    }

    #[test]
    fn complete_cnpj_with_formatting() {
        assert_eq!(complete("44.679.387/0001").as_deref(), Some("44679387000120"));
    }

    #[test]
    fn complete_rejects_bad_payloads() {
        assert_eq!(complete(""), None);
        assert_eq!(complete("1234567890"), None);
        assert_eq!(complete("12345678a"), None);
    }

    #[test]
    fn to_digits_checks_length_and_content() {
        assert_eq!(to_digits::<3>("123"), Some([1, 2, 3]));
        assert_eq!(to_digits::<3>("12"), None);
        assert_eq!(to_digits::<3>("1a3"), None);
    }
}
