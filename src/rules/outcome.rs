use std::fmt;

/// Every requirement that failed, in input order.
///
/// Either-or groups contribute one label: their members joined by " or ".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    missing_or_invalid: Vec<String>,
}

impl ValidationOutcome {
    pub fn new(missing_or_invalid: Vec<String>) -> Self {
        Self { missing_or_invalid }
    }

    pub fn labels(&self) -> &[String] {
        &self.missing_or_invalid
    }

    /// Labels joined with ", ", as they appear in the report text.
    pub fn joined(&self) -> String {
        self.missing_or_invalid.join(", ")
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fields are required or invalid: {}", self.joined())
    }
}

impl std::error::Error for ValidationOutcome {}
