//! Structured form of a single field descriptor.
//!
//! Example descriptor: `*(str@50)contact/email`  =>
//! ParsedSpec { require_truthy: true, field_type: String, max_length: Some(50),
//!              path: ["contact", "email"] }

use serde::Serialize;

/// Type constraint named inside the descriptor's parenthetical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "token", rename_all = "snake_case")]
pub enum FieldType {
    /// No parenthetical at all.
    Any,
    String,
    Integer,
    Boolean,
    /// Token we do not know. Passes validation vacuously so newer descriptor
    /// strings keep working against older engines.
    Unrecognized(String),
}

impl FieldType {
    /// Map a type token (`str`, `int`, `bool`) to its constraint. Case-sensitive.
    pub fn from_token(token: &str) -> Self {
        match token {
            "str" => FieldType::String,
            "int" => FieldType::Integer,
            "bool" => FieldType::Boolean,
            other => FieldType::Unrecognized(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSpec {
    pub require_truthy: bool,
    pub field_type: FieldType,
    pub max_length: Option<usize>,

    /// Never empty; the empty descriptor yields a single "" segment.
    pub path: Vec<String>,

    /// A leading '(' was present but did not form a valid parenthetical, so
    /// the whole text was taken as the path.
    pub degraded: bool,
}

impl ParsedSpec {
    /// Path rendered back with '/' separators.
    pub fn path_text(&self) -> String {
        self.path.join("/")
    }
}
