use std::fmt;

use serde::{Deserialize, Serialize};

use super::mask::Mask;

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;
/// Number of digits in a CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Document type, decided by stripped length only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// CPF: natural person, 11 digits.
    Individual,
    /// CNPJ: legal entity, 14 digits.
    Entity,
    /// Any other length.
    Unknown,
}

impl DocumentKind {
    /// Kind for a stripped value of `len` characters.
    pub const fn from_len(len: usize) -> Self {
        match len {
            CPF_LENGTH => Self::Individual,
            CNPJ_LENGTH => Self::Entity,
            _ => Self::Unknown,
        }
    }

    /// Canonical digit count, `None` for [`DocumentKind::Unknown`].
    pub const fn digit_count(self) -> Option<usize> {
        match self {
            Self::Individual => Some(CPF_LENGTH),
            Self::Entity => Some(CNPJ_LENGTH),
            Self::Unknown => None,
        }
    }

    /// Display mask, `None` for [`DocumentKind::Unknown`].
    pub const fn mask(self) -> Option<Mask> {
        match self {
            Self::Individual => Some(Mask::CPF),
            Self::Entity => Some(Mask::CNPJ),
            Self::Unknown => None,
        }
    }

    /// Short Brazilian name of the document.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Individual => "CPF",
            Self::Entity => "CNPJ",
            Self::Unknown => "unknown document",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_len_maps_known_lengths() {
        assert_eq!(DocumentKind::from_len(11), DocumentKind::Individual);
        assert_eq!(DocumentKind::from_len(14), DocumentKind::Entity);
        assert_eq!(DocumentKind::from_len(0), DocumentKind::Unknown);
        assert_eq!(DocumentKind::from_len(12), DocumentKind::Unknown);
    }

    #[test]
    fn digit_count_matches_from_len() {
        for kind in [DocumentKind::Individual, DocumentKind::Entity] {
            let len = kind.digit_count().unwrap();
            assert_eq!(DocumentKind::from_len(len), kind);
        }
        assert_eq!(DocumentKind::Unknown.digit_count(), None);
    }

    #[test]
    fn unknown_has_no_mask() {
        assert!(DocumentKind::Unknown.mask().is_none());
        assert_eq!(DocumentKind::Individual.mask(), Some(Mask::CPF));
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(DocumentKind::Individual.to_string(), "CPF");
        assert_eq!(DocumentKind::Entity.to_string(), "CNPJ");
    }
}
