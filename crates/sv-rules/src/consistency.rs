//! Heuristics that compare values across the whole model.

use crate::traits::Rule;
use serde_json::json;
use sv_core::{Details, ModelData, Severity, ValidationResult, format_float};

/// Largest tolerated spread between temperature-like parameters.
/// Absolute units; no unit normalization is attempted.
pub const TEMPERATURE_SPREAD_LIMIT: f64 = 50.0;

/// Fewer discovered files than this is flagged.
pub const MIN_FILE_COUNT: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct CrossFileConsistencyRule;

impl CrossFileConsistencyRule {
    pub const ID: &'static str = "CROSS_FILE_CONSISTENCY";

    pub fn new() -> Self {
        Self
    }

    fn temperature_issue(model: &ModelData) -> Option<String> {
        let temps: Vec<(&str, f64)> = model
            .parameters
            .iter()
            .filter(|(name, _)| name.contains("temp"))
            .map(|(name, &value)| (name.as_str(), value))
            .collect();
        if temps.len() < 2 {
            return None;
        }

        let min = temps.iter().map(|&(_, v)| v).fold(f64::INFINITY, f64::min);
        let max = temps.iter().map(|&(_, v)| v).fold(f64::NEG_INFINITY, f64::max);
        if max - min <= TEMPERATURE_SPREAD_LIMIT {
            return None;
        }

        let pairs: Vec<String> = temps
            .iter()
            .map(|&(name, value)| format!("{name}={}", format_float(value)))
            .collect();
        Some(format!(
            "Temperature values vary significantly: {}",
            pairs.join(", ")
        ))
    }

    fn file_count_issue(model: &ModelData) -> Option<String> {
        let count = model.file_count();
        (count < MIN_FILE_COUNT).then(|| {
            format!("Only {count} input files found - typical models have {MIN_FILE_COUNT}+ files")
        })
    }
}

impl Rule for CrossFileConsistencyRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Verify consistency between related files"
    }

    fn severity(&self) -> Severity {
        Severity::Warning
    }

    fn validate(&self, model: &ModelData) -> ValidationResult {
        let issues: Vec<String> = [Self::temperature_issue(model), Self::file_count_issue(model)]
            .into_iter()
            .flatten()
            .collect();

        if issues.is_empty() {
            return ValidationResult::pass(
                Self::ID,
                "Cross-file consistency checks passed",
            );
        }

        let mut details = Details::new();
        details.insert("issues".into(), json!(issues));
        ValidationResult::fail(
            Self::ID,
            format!("Consistency issues found: {}", issues.join("; ")),
            self.severity(),
            details,
        )
    }
}
