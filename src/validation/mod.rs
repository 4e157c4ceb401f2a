//! Validation functionality
//!
//! Provides identifier checks for generated schemas (reserved words,
//! characters that need quoting, duplicate column names).

pub mod identifiers;

pub use identifiers::{IdentifierIssue, IdentifierKind, IdentifierProblem, check_identifiers};
