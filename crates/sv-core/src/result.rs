//! Outcome of a single rule check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Rule-specific, free-form payload attached to a result.
pub type Details = BTreeMap<String, serde_json::Value>;

/// How much a failed check matters.
///
/// `Error` invalidates a model, `Warning` is reported only, and `Info` is
/// what passing results carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable outcome produced by one rule for one model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub rule_id: String,
    pub passed: bool,
    pub message: String,
    pub severity: Severity,
    #[serde(default)]
    pub details: Details,
    pub timestamp: DateTime<Utc>,
}

impl ValidationResult {
    pub fn new(
        rule_id: impl Into<String>,
        passed: bool,
        message: impl Into<String>,
        severity: Severity,
        details: Details,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            passed,
            message: message.into(),
            severity,
            details,
            timestamp: Utc::now(),
        }
    }

    /// Passing outcome. Always tagged `Info`.
    pub fn pass(rule_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule_id, true, message, Severity::Info, Details::new())
    }

    pub fn fail(
        rule_id: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Details,
    ) -> Self {
        Self::new(rule_id, false, message, severity, details)
    }

    pub fn is_error(&self) -> bool {
        !self.passed && self.severity == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        !self.passed && self.severity == Severity::Warning
    }
}
