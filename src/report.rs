//! Failure report and the message lookup it is built from.
//!
//! Report JSON shape:
//! {
//!   "status": "error",
//!   "text": "The following fields are required or invalid: email or phone"
//! }
//!
//! Message catalog JSON shape (messages.json):
//! {
//!   "FieldsAreRequiredOrInvalid": "Champs requis ou invalides : "
//! }

use crate::Result;
use crate::diagnostics;
use crate::rules::ValidationOutcome;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;

/// Key of the prefix placed before the failing field labels.
pub const FIELDS_REQUIRED_OR_INVALID: &str = "FieldsAreRequiredOrInvalid";

const STATUS_ERROR: &str = "error";

/// Source of localized message text, keyed by stable identifiers.
pub trait MessageProvider {
    fn message(&self, key: &str) -> Option<String>;
}

/// Built-in English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageProvider for DefaultMessages {
    fn message(&self, key: &str) -> Option<String> {
        match key {
            FIELDS_REQUIRED_OR_INVALID => {
                Some("The following fields are required or invalid: ".to_string())
            }
            _ => None,
        }
    }
}

/// Messages loaded from JSON, falling back to [`DefaultMessages`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    entries: BTreeMap<String, String>,
}

impl MessageCatalog {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).with_context(|| {
            diagnostics::error_message("message catalog must be a JSON object of strings")
        })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| {
            diagnostics::error_message(format!("read message catalog {}", path))
        })?;
        Self::from_json(&text)
            .with_context(|| diagnostics::error_message(format!("parse message catalog {}", path)))
    }
}

impl MessageProvider for MessageCatalog {
    fn message(&self, key: &str) -> Option<String> {
        self.entries
            .get(key)
            .cloned()
            .or_else(|| DefaultMessages.message(key))
    }
}

/// Structured failure handed to whoever serializes and delivers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub status: &'static str,
    pub text: String,
}

impl ErrorReport {
    /// Prefix looked up under [`FIELDS_REQUIRED_OR_INVALID`], then the labels.
    ///
    /// A provider without the key falls back to the key itself.
    pub fn from_outcome<P: MessageProvider + ?Sized>(
        outcome: &ValidationOutcome,
        messages: &P,
    ) -> Self {
        let prefix = messages
            .message(FIELDS_REQUIRED_OR_INVALID)
            .unwrap_or_else(|| {
                tracing::warn!(
                    key = FIELDS_REQUIRED_OR_INVALID,
                    "no message for key, using the key as text"
                );
                format!("{}: ", FIELDS_REQUIRED_OR_INVALID)
            });

        Self {
            status: STATUS_ERROR,
            text: format!("{}{}", prefix, outcome.joined()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Empty;

    impl MessageProvider for Empty {
        fn message(&self, _key: &str) -> Option<String> {
            None
        }
    }

    fn outcome() -> ValidationOutcome {
        ValidationOutcome::new(vec!["name".to_string(), "email or phone".to_string()])
    }

    #[test]
    fn default_prefix() {
        let report = ErrorReport::from_outcome(&outcome(), &DefaultMessages);
        assert_eq!(report.status, "error");
        assert_eq!(
            report.text,
            "The following fields are required or invalid: name, email or phone"
        );
    }

    #[test]
    fn catalog_overrides_and_falls_back() {
        let catalog =
            MessageCatalog::from_json(r#"{"FieldsAreRequiredOrInvalid": "Champs invalides : "}"#)
                .unwrap();
        assert_eq!(
            ErrorReport::from_outcome(&outcome(), &catalog).text,
            "Champs invalides : name, email or phone"
        );

        let empty = MessageCatalog::default();
        assert_eq!(
            empty.message(FIELDS_REQUIRED_OR_INVALID),
            DefaultMessages.message(FIELDS_REQUIRED_OR_INVALID)
        );
    }

    #[test]
    fn missing_key_uses_key() {
        let report = ErrorReport::from_outcome(&outcome(), &Empty);
        assert_eq!(
            report.text,
            "FieldsAreRequiredOrInvalid: name, email or phone"
        );
    }

    #[test]
    fn catalog_rejects_non_string_values() {
        assert!(MessageCatalog::from_json(r#"{"FieldsAreRequiredOrInvalid": 3}"#).is_err());
    }

    #[test]
    fn report_json() {
        let report = ErrorReport::from_outcome(&outcome(), &DefaultMessages);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "error",
                "text": "The following fields are required or invalid: name, email or phone"
            })
        );
    }
}
