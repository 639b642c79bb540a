use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::kind::DocumentKind;
use super::strip_formatting;
use super::validate::validate;

/// A CPF or CNPJ that passed validation.
///
/// Holds the stripped digits; [`fmt::Display`] renders the masked form.
/// Serializes as the bare digit string and deserializes through
/// [`Document::parse`], so invalid numbers are rejected on input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Document {
    kind: DocumentKind,
    digits: String,
}

impl Document {
    /// Validate `value` and keep its stripped digits.
    pub fn parse(value: &str) -> Result<Self, DocumentError> {
        let kind = validate(value)?;
        Ok(Self {
            kind,
            digits: strip_formatting(value),
        })
    }

    /// [`DocumentKind::Individual`] or [`DocumentKind::Entity`].
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Digits without separators.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The two trailing check digits.
    pub fn check_digits(&self) -> [u8; 2] {
        let tail = &self.digits.as_bytes()[self.digits.len() - 2..];
        [tail[0] - b'0', tail[1] - b'0']
    }

    /// Masked form, e.g. `156.846.111-92`.
    pub fn formatted(&self) -> String {
        self.kind
            .mask()
            .and_then(|mask| mask.apply(&self.digits))
            .unwrap_or_else(|| self.digits.clone())
    }

    /// `true` for a CPF.
    pub fn is_individual(&self) -> bool {
        self.kind == DocumentKind::Individual
    }

    /// `true` for a CNPJ.
    pub fn is_entity(&self) -> bool {
        self.kind == DocumentKind::Entity
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Document {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Document {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Document> for String {
    fn from(doc: Document) -> Self {
        doc.digits
    }
}

impl AsRef<str> for Document {
    fn as_ref(&self) -> &str {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cpf() {
        let doc = Document::parse("156.846.111-92").unwrap();
        assert_eq!(doc.kind(), DocumentKind::Individual);
        assert_eq!(doc.digits(), "15684611192");
        assert_eq!(doc.check_digits(), [9, 2]);
        assert!(doc.is_individual());
        assert_eq!(doc.to_string(), "156.846.111-92");
    }

    #[test]
    fn parse_cnpj() {
        let doc: Document = "44679387000120".parse().unwrap();
        assert!(doc.is_entity());
        assert_eq!(doc.check_digits(), [2, 0]);
        assert_eq!(doc.formatted(), "44.679.387/0001-20");
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!(Document::parse("156.846.111-93").is_err());
        assert_eq!(
            Document::try_from("123"),
            Err(DocumentError::UnknownLength { len: 3 })
        );
    }

    #[test]
    fn into_string_is_digits() {
        let doc = Document::try_from(String::from("000.000.001-91")).unwrap();
        assert_eq!(String::from(doc), "00000000191");
    }
}
