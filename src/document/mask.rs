//! Literal display masks.

/// A display template where `#` marks a digit slot and every other
/// character is a literal separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    pattern: &'static str,
}

impl Mask {
    /// Digit slot marker.
    pub const SLOT: char = '#';

    /// `DDD.DDD.DDD-DD`
    pub const CPF: Self = Self::new("###.###.###-##");

    /// `DD.DDD.DDD/DDDD-DD`
    pub const CNPJ: Self = Self::new("##.###.###/####-##");

    /// Wrap a pattern.
    pub const fn new(pattern: &'static str) -> Self {
        Self { pattern }
    }

    /// The raw pattern.
    pub const fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Number of digit slots.
    pub fn slots(&self) -> usize {
        self.pattern.chars().filter(|&c| c == Self::SLOT).count()
    }

    /// Fill the slots with the leading characters of `value`.
    ///
    /// Returns `None` if `value` runs out before the slots do or a
    /// consumed character is not an ASCII digit. Characters past the last
    /// slot are ignored.
    pub fn apply(&self, value: &str) -> Option<String> {
        let mut chars = value.chars();
        let mut out = String::with_capacity(self.pattern.len());
        for p in self.pattern.chars() {
            if p == Self::SLOT {
                let c = chars.next().filter(char::is_ascii_digit)?;
                out.push(c);
            } else {
                out.push(p);
            }
        }
        Some(out)
    }
}
