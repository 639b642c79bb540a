//! Fixed-length padding.
//!
//! Lengths are counted in `char`s, not bytes.

use std::iter;

/// A string of `length` copies of `ch`.
///
/// The length is unsigned, so a negative request cannot be expressed.
pub fn fill(ch: char, length: usize) -> String {
    iter::repeat_n(ch, length).collect()
}

/// Prepend `fill_char` until the result is `length` chars long.
///
/// `None` is treated as the empty string. Inputs that are already at least
/// `length` chars long are returned unchanged; nothing is ever truncated.
pub fn left_pad<'a>(s: impl Into<Option<&'a str>>, length: usize, fill_char: char) -> String {
    let s = s.into().unwrap_or_default();
    let missing = length.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * fill_char.len_utf8());
    out.extend(iter::repeat_n(fill_char, missing));
    out.push_str(s);
    out
}

/// Append `fill_char` until the result is `length` chars long.
///
/// Mirror image of [`left_pad`].
pub fn right_pad<'a>(s: impl Into<Option<&'a str>>, length: usize, fill_char: char) -> String {
    let s = s.into().unwrap_or_default();
    let missing = length.saturating_sub(s.chars().count());
    let mut out = String::with_capacity(s.len() + missing * fill_char.len_utf8());
    out.push_str(s);
    out.extend(iter::repeat_n(fill_char, missing));
    out
}
