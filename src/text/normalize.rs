//! Diacritic and punctuation stripping.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Decompose (NFD) and drop every combining mark, keeping base letters.
///
/// `"ação"` becomes `"acao"`. Idempotent.
pub fn normalize_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Keep only ASCII letters, ASCII digits, `.`, `-` and whitespace.
///
/// Whitespace here is the ASCII set (space, tab, LF, VT, FF, CR).
/// Accented letters are removed, so run [`normalize_diacritics`] first to
/// keep their base letters.
pub fn strip_punctuation_except_dot_dash_space(s: &str) -> String {
    s.chars().filter(|&c| is_kept(c)).collect()
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '.' | '-' | ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
