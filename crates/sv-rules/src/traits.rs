//! Core trait for validation rules.

use sv_core::{ModelData, Severity, ValidationResult};

/// A named, severity-tagged check mapping model data to one outcome.
///
/// Rules capture whatever configuration they need at construction and are
/// read-only afterwards, so a rule set can be shared across threads.
pub trait Rule: Send + Sync {
    /// Identifier written into results, e.g. `FILE_FORMAT`.
    fn id(&self) -> &str;

    fn description(&self) -> &str;

    /// Severity attached to a failing outcome.
    fn severity(&self) -> Severity;

    /// Inspect `model` and produce exactly one outcome.
    ///
    /// A rule that panics is treated by the engine as a failed evaluation.
    fn validate(&self, model: &ModelData) -> ValidationResult;
}
