//! Descriptor layer: the field descriptor grammar and its parsed form.
//!
//! This module is intentionally separate from path lookup and type checks.
//! It owns:
//! - ParsedSpec / FieldType (the structured form of one descriptor)
//! - the tokenizer + parser turning descriptor text into a ParsedSpec

pub mod parse;
pub mod spec;

pub use parse::parse;
pub use spec::{FieldType, ParsedSpec};
