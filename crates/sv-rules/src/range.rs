//! Configured numeric limits for extracted parameters.

use crate::traits::Rule;
use serde_json::json;
use std::collections::BTreeMap;
use sv_config::ParameterRange;
use sv_core::{Details, ModelData, Severity, ValidationResult, format_float};

#[derive(Debug, Clone)]
pub struct ParameterRangeRule {
    ranges: BTreeMap<String, ParameterRange>,
}

impl ParameterRangeRule {
    pub const ID: &'static str = "PARAMETER_RANGES";

    pub fn new(ranges: BTreeMap<String, ParameterRange>) -> Self {
        Self { ranges }
    }
}

impl Rule for ParameterRangeRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Verify parameters are within acceptable ranges"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn validate(&self, model: &ModelData) -> ValidationResult {
        let mut checked = 0usize;
        let mut segments = Vec::new();
        let mut violations = Vec::new();

        for (name, &value) in &model.parameters {
            let Some(range) = self.ranges.get(name) else {
                continue;
            };
            checked += 1;
            if range.contains(value) {
                continue;
            }

            let violation_type = if value < range.min {
                "below_minimum"
            } else {
                "above_maximum"
            };
            // Bounds print as configured, so `[0, 500000]` stays integral.
            let bounds = format!("{} to {}", range.min, range.max);
            segments.push(format!(
                "{name}={} (valid range: {bounds})",
                format_float(value)
            ));
            violations.push(json!({
                "parameter": name,
                "value": value,
                "range": bounds,
                "violation_type": violation_type,
            }));
        }

        if violations.is_empty() {
            return ValidationResult::pass(
                Self::ID,
                format!("All {checked} checked parameters within valid ranges"),
            );
        }

        let mut details = Details::new();
        details.insert("violations".into(), json!(violations));
        ValidationResult::fail(
            Self::ID,
            format!("Parameter range violations: {}", segments.join("; ")),
            self.severity(),
            details,
        )
    }
}
