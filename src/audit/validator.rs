use super::invocation::{Arg, Invocation};
use crate::document::{self, DocumentError, DocumentKind};

const COMPONENT: &str = "document";

/// Public document operations that [`AuditedValidator`] wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// [`AuditedValidator::classify`]
    Classify,
    /// [`AuditedValidator::is_valid`]
    IsValid,
    /// [`AuditedValidator::validate`]
    Validate,
    /// [`AuditedValidator::format`]
    Format,
    /// [`AuditedValidator::format_any`]
    FormatAny,
}

/// Decorator that logs every call to the document operations.
///
/// Results are exactly those of the plain functions in [`crate::document`].
#[derive(Debug, Clone)]
pub struct AuditedValidator {
    classify: Invocation,
    is_valid: Invocation,
    validate: Invocation,
    format: Invocation,
    format_any: Invocation,
}

impl Default for AuditedValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditedValidator {
    /// One descriptor per operation, each logging every argument and the
    /// result.
    pub fn new() -> Self {
        Self {
            classify: Invocation::new(COMPONENT, "classify")
                .description("Classificação do documento pelo tamanho"),
            is_valid: Invocation::new(COMPONENT, "is_valid")
                .description("Validação de CPF/CNPJ"),
            validate: Invocation::new(COMPONENT, "validate")
                .description("Validação de CPF/CNPJ com motivo"),
            format: Invocation::new(COMPONENT, "format").description("Formatação de CPF/CNPJ"),
            format_any: Invocation::new(COMPONENT, "format_any")
                .description("Formatação de CPF/CNPJ"),
        }
    }

    /// Replace the descriptor used for one operation.
    pub fn with_invocation(mut self, operation: Operation, invocation: Invocation) -> Self {
        *self.slot(operation) = invocation;
        self
    }

    /// Descriptor currently used for `operation`.
    pub fn invocation(&self, operation: Operation) -> &Invocation {
        match operation {
            Operation::Classify => &self.classify,
            Operation::IsValid => &self.is_valid,
            Operation::Validate => &self.validate,
            Operation::Format => &self.format,
            Operation::FormatAny => &self.format_any,
        }
    }

    /// Logged [`document::classify`].
    pub fn classify<'a>(&self, value: impl Into<Option<&'a str>>) -> DocumentKind {
        let value = value.into();
        self.classify
            .run(&[Arg::new("value", &value)], || document::classify(value))
    }

    /// Logged [`document::is_valid`].
    pub fn is_valid<'a>(&self, value: impl Into<Option<&'a str>>) -> bool {
        let value = value.into();
        self.is_valid
            .run(&[Arg::new("value", &value)], || document::is_valid(value))
    }

    /// Logged [`document::validate`].
    pub fn validate<'a>(
        &self,
        value: impl Into<Option<&'a str>>,
    ) -> Result<DocumentKind, DocumentError> {
        let value = value.into();
        self.validate
            .run(&[Arg::new("value", &value)], || document::validate(value))
    }

    /// Logged [`document::format`].
    pub fn format(&self, value: &str) -> String {
        self.format
            .run(&[Arg::new("value", &value)], || document::format(value))
    }

    /// Logged [`document::format_any`].
    pub fn format_any(&self, value: &str) -> String {
        self.format_any
            .run(&[Arg::new("value", &value)], || document::format_any(value))
    }

    fn slot(&mut self, operation: Operation) -> &mut Invocation {
        match operation {
            Operation::Classify => &mut self.classify,
            Operation::IsValid => &mut self.is_valid,
            Operation::Validate => &mut self.validate,
            Operation::Format => &mut self.format,
            Operation::FormatAny => &mut self.format_any,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegates_results() {
        let v = AuditedValidator::new();
        assert_eq!(v.classify("000.000.001-91"), DocumentKind::Individual);
        assert!(v.is_valid("156.846.111-92"));
        assert!(!v.is_valid(None));
        assert_eq!(v.validate("44.679.387/0001-20"), Ok(DocumentKind::Entity));
        assert_eq!(v.format("00000000191"), "000.000.001-91");
        assert_eq!(v.format_any("aaaaaaaaaaa"), "aaaaaaaaaaa");
    }

    #[test]
    fn accepts_borrowed_and_absent_values() {
        let v = AuditedValidator::new();
        let owned = String::from("72.039.208/0001-25");
        let absent: Option<&str> = None;
        assert_eq!(v.classify(owned.as_str()), DocumentKind::Entity);
        assert_eq!(v.classify(absent), DocumentKind::Unknown);
        assert!(v.is_valid(Some(owned.as_str())));
        assert_eq!(v.validate(absent), Err(DocumentError::Missing));
    }

    #[test]
    fn descriptions_are_ascii() {
        let v = AuditedValidator::new();
        assert_eq!(
            v.invocation(Operation::IsValid).description_text(),
            Some("Validacao de CPF/CNPJ")
        );
    }

    #[test]
    fn override_invocation() {
        let v = AuditedValidator::new().with_invocation(
            Operation::Format,
            Invocation::new("display", "format").record_result(false),
        );
        assert_eq!(v.invocation(Operation::Format).component(), "display");
        assert_eq!(v.format("0"), "000.000.000-00");
    }
}
