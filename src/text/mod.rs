//! String primitives used to clean up document numbers and free text.
//!
//! All functions are total: malformed input produces a defined result,
//! never a panic. Absent values are modelled with `Option` at the call
//! site; the padding functions accept `Option<&str>` directly and treat
//! `None` as the empty string, the normalizers map over `Option` with
//! [`Option::map`].

mod normalize;
mod pad;

pub use normalize::{normalize_diacritics, strip_punctuation_except_dot_dash_space};
pub use pad::{fill, left_pad, right_pad};

/// Parse the trimmed value as a base-10 `i64`.
///
/// Returns `None` when the trimmed value is empty, does not parse, or
/// overflows. `None` means "not purely numeric", not a failure.
pub fn to_long(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// `true` when `value` is non-empty and made only of ASCII digits.
///
/// Unlike [`to_long`] this never looks at magnitude or sign, so leading
/// zeros and values longer than 19 digits are fine.
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Delete every occurrence of each character in `chars` from `s`.
///
/// Relative order of the remaining characters is kept and the order of
/// `chars` does not matter.
pub fn remove_characters(s: &str, chars: &[char]) -> String {
    s.chars().filter(|c| !chars.contains(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_long_parses_digits() {
        assert_eq!(to_long("12345"), Some(12345));
        assert_eq!(to_long("  42 "), Some(42));
        assert_eq!(to_long("00000000191"), Some(191));
    }

    #[test]
    fn to_long_rejects_text() {
        assert_eq!(to_long("text string"), None);
        assert_eq!(to_long(""), None);
        assert_eq!(to_long("   "), None);
        assert_eq!(to_long("99999999999999999999"), None);
    }

    #[test]
    fn is_numeric_ignores_magnitude() {
        assert!(is_numeric("00000000000000"));
        assert!(is_numeric("123456789012345678901234"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("+1234567890"));
        assert!(!is_numeric("12 34"));
    }

    #[test]
    fn remove_single_character() {
        assert_eq!(remove_characters("abcdef", &['a']), "bcdef");
    }

    #[test]
    fn remove_consonants() {
        let consonants: Vec<char> = "bcdfghjklmnpqrstvwxyz".chars().collect();
        assert_eq!(
            remove_characters("abcdefghijklmnopqrstuvwxyz", &consonants),
            "aeiou"
        );
    }

    #[test]
    fn remove_absent_character() {
        assert_eq!(remove_characters("text string", &['z']), "text string");
        assert_eq!(remove_characters("text string", &[]), "text string");
    }

    #[test]
    fn remove_formatting() {
        assert_eq!(
            remove_characters("44.679.387/0001-20", &[' ', '.', '-', '/']),
            "44679387000120"
        );
    }
}
