//! Report data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sv_core::{Severity, ValidationResult};

/// Running counts over the results added so far.
///
/// `passed + failed == total_rules`; `errors` and `warnings` count failed
/// results of that severity only. A failed `Info` result lands in neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_rules: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub warnings: usize,
    pub duration_seconds: f64,
}

/// Outcomes of one validation run, in rule execution order.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    model_name: String,
    results: Vec<ValidationResult>,
    summary: ReportSummary,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
}

impl ValidationReport {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            results: Vec::new(),
            summary: ReportSummary::default(),
            start_time: Utc::now(),
            end_time: None,
        }
    }

    pub fn add_result(&mut self, result: ValidationResult) {
        self.summary.total_rules += 1;
        if result.passed {
            self.summary.passed += 1;
        } else {
            self.summary.failed += 1;
            match result.severity {
                Severity::Error => self.summary.errors += 1,
                Severity::Warning => self.summary.warnings += 1,
                Severity::Info => {}
            }
        }
        self.results.push(result);
    }

    /// Stamp the end time and compute the duration.
    pub fn finalize(&mut self) {
        let end = Utc::now();
        let micros = (end - self.start_time).num_microseconds().unwrap_or(0);
        self.summary.duration_seconds = (micros as f64 / 1e6).max(0.0);
        self.end_time = Some(end);
    }

    /// True when no failed result carries `Error` severity.
    pub fn is_valid(&self) -> bool {
        self.summary.errors == 0
    }

    pub fn critical_errors(&self) -> Vec<&ValidationResult> {
        self.results.iter().filter(|r| r.is_error()).collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationResult> {
        self.results.iter().filter(|r| r.is_warning()).collect()
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn summary(&self) -> &ReportSummary {
        &self.summary
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn is_finalized(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn to_document(&self) -> ReportDocument {
        ReportDocument {
            model_name: self.model_name.clone(),
            summary: self.summary.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            is_valid: self.is_valid(),
            results: self.results.clone(),
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.to_document())
    }
}

/// Serializable form of a report, as written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    pub model_name: String,
    pub summary: ReportSummary,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_valid: bool,
    pub results: Vec<ValidationResult>,
}

impl ReportDocument {
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}
