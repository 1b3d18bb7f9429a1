//! Validation gate: rule engine + message lookup.

use crate::report::{DefaultMessages, ErrorReport, MessageProvider};
use crate::rules::{self, Requirement, ValidationOutcome};

use serde_json::Value;

/// Runs requirement lists and turns failures into an [`ErrorReport`].
///
/// Holds no mutable state; one checker can serve any number of calls.
/// Malformed descriptors and unknown type tokens are reported as
/// `tracing` debug events.
#[derive(Debug, Clone, Default)]
pub struct Checker<P = DefaultMessages> {
    messages: P,
}

impl<P: MessageProvider> Checker<P> {
    pub fn new(messages: P) -> Self {
        Self { messages }
    }

    /// Raw outcome, for callers that build their own message.
    pub fn outcome(
        &self,
        requirements: &[Requirement],
        record: &Value,
    ) -> Result<(), ValidationOutcome> {
        rules::check_required_fields(requirements, record)
    }

    /// Ok(()) when every requirement passes, otherwise the report to deliver.
    pub fn check(&self, requirements: &[Requirement], record: &Value) -> Result<(), ErrorReport> {
        self.outcome(requirements, record)
            .map_err(|outcome| ErrorReport::from_outcome(&outcome, &self.messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MessageCatalog;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn passing_record_yields_nothing() {
        let checker = Checker::new(DefaultMessages);
        let reqs = vec![Requirement::field("*(str@10)name")];
        assert_eq!(checker.check(&reqs, &json!({"name": "Jo"})), Ok(()));
    }

    #[test]
    fn failing_record_uses_provider() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "FieldsAreRequiredOrInvalid".to_string(),
            "Missing: ".to_string(),
        );
        let checker = Checker::new(MessageCatalog::new(entries));
        let reqs = vec![
            Requirement::field("(date)when"),
            Requirement::field("(int@2)age"),
        ];

        let report = checker
            .check(&reqs, &json!({"when": "today", "age": 123}))
            .unwrap_err();
        assert_eq!(report.status, "error");
        assert_eq!(report.text, "Missing: (int@2)age");
    }

    #[test]
    fn outcome_keeps_raw_labels() {
        let checker = Checker::<DefaultMessages>::default();
        let reqs = vec![Requirement::either_or(["email", "phone"])];
        let outcome = checker.outcome(&reqs, &json!({})).unwrap_err();
        assert_eq!(outcome.labels(), ["email or phone".to_string()]);
    }

    #[test]
    fn checker_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Checker<DefaultMessages>>();
        assert_send_sync::<Checker<MessageCatalog>>();
    }
}
