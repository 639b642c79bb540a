//! Explicit call logging for the document operations.
//!
//! Nothing in [`crate::text`] or [`crate::document`] logs. Callers who want
//! an audit trail describe each call with an [`Invocation`] and run the
//! operation through it, or use [`AuditedValidator`], which does that for
//! every public document operation.
//!
//! Events are emitted with `tracing` at `INFO` under the `brdoc::audit`
//! target; install whatever subscriber the application uses.
//!
//! # Example
//!
//! ```rust
//! use brdoc::audit::{Arg, AuditedValidator, Invocation};
//!
//! let validator = AuditedValidator::new();
//! assert!(validator.is_valid("156.846.111-92"));
//!
//! let lookup = Invocation::new("billing", "load_customer")
//!     .description("Busca do contribuinte")
//!     .record_args(&["cpf"]);
//! let cpf = "00000000191";
//! let found = lookup.run(&[Arg::new("cpf", &cpf), Arg::new("token", &"secret")], || cpf.len());
//! assert_eq!(found, 11);
//! ```

mod invocation;
mod validator;

pub use invocation::{Arg, Invocation, Stage, TARGET};
pub use validator::{AuditedValidator, Operation};
