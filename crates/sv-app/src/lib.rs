//! Validation service layer for simvalidate.
//!
//! Ties configuration, model loading, rule execution and reporting together
//! behind one engine that both the CLI and library callers use.

pub mod engine;
pub mod error;
pub mod loader;
pub mod progress;

// Re-export key types for convenience
pub use engine::{ValidationEngine, validate};
pub use error::{AppError, AppResult};
pub use loader::load_model;
pub use progress::{SilentListener, TracingListener, ValidationEvent, ValidationListener};

pub use sv_config::{Config, ConfigError, load_config};
pub use sv_core::{ModelData, Severity, ValidationResult};
pub use sv_report::{ReportDocument, ReportSummary, ValidationReport};
pub use sv_rules::{Rule, RuleKind};
