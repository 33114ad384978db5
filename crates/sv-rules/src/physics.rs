//! Coarse physical plausibility heuristics.
//!
//! These are guards against obviously wrong decks, not a gas-law solver.
//! The ratio check compares `pressure / temperature` against
//! `density / 100` with a 50% band.

use crate::traits::Rule;
use serde_json::json;
use sv_core::{Details, ModelData, Severity, ValidationResult, format_float};

const DENSITY_NORMALIZATION: f64 = 100.0;
const RATIO_TOLERANCE: f64 = 0.5;
/// Positive temperatures below this are likely Celsius entered as Kelvin.
const LOW_TEMPERATURE_K: f64 = 10.0;

#[derive(Debug, Clone, Default)]
pub struct PhysicsValidationRule;

impl PhysicsValidationRule {
    pub const ID: &'static str = "PHYSICS_VALIDATION";

    pub fn new() -> Self {
        Self
    }
}

impl Rule for PhysicsValidationRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Verify physically realistic parameter combinations"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn validate(&self, model: &ModelData) -> ValidationResult {
        // Overflowed tokens such as `1e999` arrive as infinity and flow
        // through the comparisons unchanged.
        let temp = model.parameter("temperature").unwrap_or(0.0);
        let pressure = model.parameter("pressure").unwrap_or(0.0);
        let density = model.parameter("density").unwrap_or(0.0);

        let mut violations = Vec::new();

        if temp > 0.0 && pressure > 0.0 && density > 0.0 {
            let expected_ratio = pressure / temp;
            let actual_ratio = density / DENSITY_NORMALIZATION;
            if (expected_ratio - actual_ratio).abs() > expected_ratio * RATIO_TOLERANCE {
                violations.push(format!(
                    "Density ({}) inconsistent with temperature ({}) and pressure ({})",
                    format_float(density),
                    format_float(temp),
                    format_float(pressure),
                ));
            }
        }

        if temp > 0.0 && temp < LOW_TEMPERATURE_K {
            violations.push(format!(
                "Temperature ({}) unusually low - check units (Kelvin vs Celsius)",
                format_float(temp)
            ));
        }

        if violations.is_empty() {
            return ValidationResult::pass(Self::ID, "Physics validation checks passed");
        }

        let mut details = Details::new();
        details.insert("violations".into(), json!(violations));
        ValidationResult::fail(
            Self::ID,
            format!("Physics violations detected: {}", violations.join("; ")),
            self.severity(),
            details,
        )
    }
}
