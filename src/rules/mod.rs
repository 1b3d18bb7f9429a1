//! Rule engine: evaluate requirement lists against a record.
//!
//! JSON shape of a requirement list:
//! [
//!   "name",                      // single descriptor
//!   "*isActive",
//!   ["email", "*phone"]          // either-or group: one member must pass
//! ]
//!
//! Every requirement is evaluated; failures are collected, never fail-fast.

pub mod outcome;

pub use outcome::ValidationOutcome;

use crate::descriptor::{self, FieldType, ParsedSpec};
use crate::path;
use crate::types;

use serde::Deserialize;
use serde_json::Value;

const GROUP_SEPARATOR: &str = " or ";

/// One entry of a requirement list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Requirement {
    // "descriptor"
    Field(String),
    // ["descriptor", "descriptor", ...]
    EitherOr(Vec<String>),
}

impl Requirement {
    pub fn field(descriptor: impl Into<String>) -> Self {
        Requirement::Field(descriptor.into())
    }

    pub fn either_or<I, S>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Requirement::EitherOr(descriptors.into_iter().map(Into::into).collect())
    }

    /// Label recorded when this requirement fails.
    pub fn label(&self) -> String {
        match self {
            Requirement::Field(descriptor) => descriptor.clone(),
            Requirement::EitherOr(members) => members.join(GROUP_SEPARATOR),
        }
    }
}

/// Check every requirement against `record`.
///
/// Ok(()) when all pass; otherwise the labels of every failing requirement,
/// in input order.
pub fn check_required_fields(
    requirements: &[Requirement],
    record: &Value,
) -> Result<(), ValidationOutcome> {
    let mut failures: Vec<String> = Vec::new();

    for requirement in requirements {
        let passed = match requirement {
            Requirement::Field(descriptor) => evaluate_one(descriptor, record),
            Requirement::EitherOr(members) => {
                if members.is_empty() {
                    tracing::debug!("empty either-or group can never pass");
                }
                // Short-circuits on the first passing member.
                members.iter().any(|m| evaluate_one(m, record))
            }
        };

        if !passed {
            failures.push(requirement.label());
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(ValidationOutcome::new(failures))
    }
}

/// Evaluate a single descriptor against `record`.
pub fn evaluate_one(descriptor: &str, record: &Value) -> bool {
    let spec = descriptor::parse(descriptor);
    trace_parse_notes(descriptor, &spec);
    evaluate_spec(&spec, record)
}

/// Evaluate an already parsed descriptor against `record`.
///
/// Steps, first failure wins:
/// 1) the path must resolve to a non-null value
/// 2) with '*', the value must be truthy or numeric
/// 3) the value must satisfy the type constraint
pub fn evaluate_spec(spec: &ParsedSpec, record: &Value) -> bool {
    let value = match path::resolve(spec.path.as_slice(), record) {
        Some(Value::Null) | None => return false,
        Some(v) => v,
    };

    if spec.require_truthy && !types::passes_truthiness(value) {
        return false;
    }

    types::validate(value, &spec.field_type, spec.max_length)
}

fn trace_parse_notes(descriptor: &str, spec: &ParsedSpec) {
    if spec.degraded {
        tracing::debug!(
            descriptor,
            path = %spec.path_text(),
            "malformed type constraint, whole text used as the path"
        );
    }
    if let FieldType::Unrecognized(token) = &spec.field_type {
        tracing::debug!(
            descriptor,
            token = token.as_str(),
            "unrecognized type, type check skipped"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn labels(result: Result<(), ValidationOutcome>) -> Vec<String> {
        match result {
            Ok(()) => Vec::new(),
            Err(outcome) => outcome.labels().to_vec(),
        }
    }

    #[test]
    fn requirement_list_from_json() {
        let reqs: Vec<Requirement> =
            serde_json::from_str(r#"["name", ["email", "*phone"]]"#).unwrap();
        assert_eq!(
            reqs,
            vec![
                Requirement::field("name"),
                Requirement::either_or(["email", "*phone"]),
            ]
        );
    }

    #[test]
    fn group_label_joins_members() {
        assert_eq!(
            Requirement::either_or(["a", "b", "c"]).label(),
            "a or b or c"
        );
        assert_eq!(Requirement::field("*(int)x").label(), "*(int)x");
    }

    #[test]
    fn missing_and_null_fail() {
        let record = json!({"email": null});
        assert!(!evaluate_one("email", &record));
        assert!(!evaluate_one("phone", &record));
    }

    #[test]
    fn falsy_values_exist_without_star() {
        let record = json!({"flag": false, "empty": "", "zero": 0});
        assert!(evaluate_one("flag", &record));
        assert!(evaluate_one("empty", &record));
        assert!(evaluate_one("zero", &record));
    }

    #[test]
    fn truthy_and_type_both_apply() {
        let record = json!({"a": "", "b": "0", "c": 0});
        // "" is a string but falsy.
        assert!(!evaluate_one("*(str)a", &record));
        assert!(evaluate_one("(str)a", &record));
        // "0" is numeric, so '*' accepts it, and it is an integer string.
        assert!(evaluate_one("*(int@1)b", &record));
        // 0 passes '*' but is not a string.
        assert!(!evaluate_one("*(str)c", &record));
    }

    #[test]
    fn failures_keep_input_order() {
        let record = json!({"b": 1});
        let reqs = vec![
            Requirement::field("c"),
            Requirement::field("b"),
            Requirement::field("a"),
        ];
        assert_eq!(labels(check_required_fields(&reqs, &record)), vec!["c", "a"]);
    }

    #[test]
    fn group_passes_when_any_member_passes() {
        let record = json!({"phone": "555"});
        let reqs = vec![Requirement::either_or(["email", "*phone"])];
        assert!(check_required_fields(&reqs, &record).is_ok());
    }

    #[test]
    fn empty_group_fails_with_empty_label() {
        let reqs = vec![Requirement::EitherOr(Vec::new())];
        assert_eq!(labels(check_required_fields(&reqs, &json!({}))), vec![""]);
    }

    #[test]
    fn empty_list_passes() {
        assert!(check_required_fields(&[], &json!({})).is_ok());
    }
}
