//! Required-field validation driven by compact descriptor strings.
//!
//! A descriptor names one field of a JSON record and optionally constrains it:
//!
//! ```text
//! ['*'] ['(' TYPE ['@' LENGTH] ')'] PATH
//!
//! name                 key must exist (and not be null)
//! *isActive            value must be truthy; numeric 0 / "0" still count
//! (str@50)contact/email  nested string of at most 50 characters
//! (int@4)year          integer (or integer-valued numeric string), <= 4 digits
//! (bool)flags/beta     true, false, "true" or "false"
//! ```
//!
//! Requirements are either single descriptors or either-or groups; every
//! failing requirement is collected before anything is reported.

pub mod checker;
pub mod descriptor;
pub mod diagnostics;
pub mod path;
pub mod report;
pub mod rules;
pub mod types;

pub type Result<T> = anyhow::Result<T>;

pub use checker::Checker;
pub use descriptor::{FieldType, ParsedSpec, parse};
pub use report::{DefaultMessages, ErrorReport, MessageCatalog, MessageProvider};
pub use rules::{Requirement, ValidationOutcome, check_required_fields, evaluate_one};
