//! Configuration document types.

use crate::defaults;
use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inclusive numeric range, written as a two-element `[min, max]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl From<(f64, f64)> for ParameterRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

impl From<ParameterRange> for (f64, f64) {
    fn from(range: ParameterRange) -> Self {
        (range.min, range.max)
    }
}

/// Effective validation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Allowed extensions, leading dot included.
    pub file_types: Vec<String>,
    pub parameter_ranges: BTreeMap<String, ParameterRange>,
    pub required_files: Vec<String>,
    /// Rule identifiers in execution order. Unknown identifiers are ignored
    /// when rules are built.
    pub validation_rules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_types: defaults::FILE_TYPES.iter().map(|s| s.to_string()).collect(),
            parameter_ranges: defaults::PARAMETER_RANGES
                .iter()
                .map(|&(name, min, max)| (name.to_string(), ParameterRange::new(min, max)))
                .collect(),
            required_files: defaults::REQUIRED_FILES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            validation_rules: defaults::VALIDATION_RULES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Config {
    /// Shallow merge: every field present in `overrides` replaces the
    /// corresponding field wholesale.
    pub fn merged(mut self, overrides: ConfigOverride) -> Self {
        if let Some(file_types) = overrides.file_types {
            self.file_types = file_types;
        }
        if let Some(parameter_ranges) = overrides.parameter_ranges {
            self.parameter_ranges = parameter_ranges;
        }
        if let Some(required_files) = overrides.required_files {
            self.required_files = required_files;
        }
        if let Some(validation_rules) = overrides.validation_rules {
            self.validation_rules = validation_rules;
        }
        self
    }

    /// Check every range has finite bounds with `min <= max`.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, range) in &self.parameter_ranges {
            if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
                return Err(ConfigError::InvalidRange {
                    name: name.clone(),
                    min: range.min,
                    max: range.max,
                });
            }
        }
        Ok(())
    }

    /// Exact, case-sensitive match against the allow-list.
    pub fn allows_extension(&self, extension: &str) -> bool {
        self.file_types.iter().any(|t| t == extension)
    }

    pub fn range_for(&self, name: &str) -> Option<ParameterRange> {
        self.parameter_ranges.get(name).copied()
    }

    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Partial configuration as read from an override document.
///
/// Top-level fields this crate does not know are accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigOverride {
    pub file_types: Option<Vec<String>>,
    pub parameter_ranges: Option<BTreeMap<String, ParameterRange>>,
    pub required_files: Option<Vec<String>>,
    pub validation_rules: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_tables() {
        let config = Config::default();
        assert_eq!(config.file_types.len(), 5);
        assert!(config.allows_extension(".csv"));
        assert!(!config.allows_extension(".CSV"));
        assert_eq!(config.range_for("density"), Some(ParameterRange::new(0.1, 10_000.0)));
        assert_eq!(config.required_files[1], "boundary_conditions.txt");
        assert_eq!(config.validation_rules.first().map(String::as_str), Some("file_existence"));
    }

    #[test]
    fn range_bounds_inclusive() {
        let range = ParameterRange::new(200.0, 800.0);
        assert!(range.contains(200.0));
        assert!(range.contains(800.0));
        assert!(!range.contains(199.999));
        assert!(!range.contains(800.001));
    }

    #[test]
    fn range_reads_from_array() {
        let range: ParameterRange = serde_json::from_str("[0, 500000]").unwrap();
        assert_eq!(range, ParameterRange::new(0.0, 500_000.0));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[0.0,500000.0]");
    }

    #[test]
    fn shallow_merge_replaces_whole_fields() {
        let overrides: ConfigOverride = serde_json::from_str(
            r#"{"parameter_ranges": {"poisson_ratio": [0.1, 0.5]}, "physics_constraints": {"density_positive": true}}"#,
        )
        .unwrap();
        let config = Config::default().merged(overrides);
        assert_eq!(config.parameter_ranges.len(), 1);
        assert!(config.range_for("temperature").is_none());
        assert_eq!(config.file_types, Config::default().file_types);
        assert_eq!(config.validation_rules, Config::default().validation_rules);
    }

    #[test]
    fn inverted_range_rejected() {
        let mut config = Config::default();
        config
            .parameter_ranges
            .insert("velocity".into(), ParameterRange::new(100.0, 0.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { ref name, .. }) if name == "velocity"
        ));
    }
}
