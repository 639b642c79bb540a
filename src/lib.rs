//! # brdoc
//!
//! Validation and formatting of Brazilian tax documents: CPF (individuals,
//! 11 digits) and CNPJ (legal entities, 14 digits), plus the small text
//! normalization toolkit they are built on.
//!
//! Every operation is a pure function of its input. Nothing here allocates
//! global state, performs I/O, or logs (see the optional `audit` feature for
//! explicit call logging).
//!
//! ## Quick Start
//!
//! ```rust
//! use brdoc::*;
//!
//! assert!(is_valid("156.846.111-92"));
//! assert!(!is_valid("156.846.111-93"));
//! assert_eq!(classify("44.679.387/0001-20"), DocumentKind::Entity);
//! assert_eq!(format("00000000191"), "000.000.001-91");
//!
//! let doc: Document = "44679387000120".parse().unwrap();
//! assert_eq!(doc.to_string(), "44.679.387/0001-20");
//!
//! // Absent values: validation takes `Option` directly, formatting maps over it.
//! let missing: Option<&str> = None;
//! assert!(!is_valid(missing));
//! assert_eq!(missing.map(format), None);
//! assert_eq!(Some("00000000191").map(format).as_deref(), Some("000.000.001-91"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `text` | Padding, character stripping, diacritic removal |
//! | `document` (default) | CPF/CNPJ classification, check digits, masking |
//! | `audit` | Invocation logging decorators built on `tracing` |
//! | `all` | Everything |

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "document")]
pub mod document;

#[cfg(feature = "audit")]
pub mod audit;

// Re-export document types at crate root for convenience
#[cfg(feature = "document")]
pub use crate::document::*;
