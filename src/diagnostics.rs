//! Uniform error text.
//!
//! Levelled diagnostics go through `tracing`; this module only shapes the
//! messages attached to `anyhow` errors.

use std::fmt::Display;

const PREFIX: &str = "fieldcheck";

/// Prefix an error message so it reads the same wherever it surfaces.
pub fn error_message(msg: impl Display) -> String {
    format!("{}: {}", PREFIX, msg)
}
