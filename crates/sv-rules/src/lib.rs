//! sv-rules: the checks run against a loaded model.
//!
//! Provides five independent rules:
//! - file existence (required files present)
//! - file format (per-extension structure sanity)
//! - parameter ranges (configured inclusive limits)
//! - cross-file consistency (temperature spread, file count)
//! - physics plausibility (coarse gas-law and unit heuristics)
//!
//! All rules implement the `Rule` trait, are stateless between calls and
//! never mutate the model they inspect.

pub mod consistency;
pub mod existence;
pub mod format;
pub mod physics;
pub mod range;
pub mod registry;
pub mod traits;

pub use consistency::CrossFileConsistencyRule;
pub use existence::FileExistenceRule;
pub use format::FileFormatRule;
pub use physics::PhysicsValidationRule;
pub use range::ParameterRangeRule;
pub use registry::{RuleKind, build_rules};
pub use traits::Rule;
