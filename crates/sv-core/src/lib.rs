//! sv-core: stable foundation for simvalidate.
//!
//! Contains:
//! - model (file records and the per-directory model data)
//! - result (severity + single rule outcome)
//! - extract (numeric parameter extraction from raw text)
//! - numeric (rendering of extracted values in messages)

pub mod extract;
pub mod model;
pub mod numeric;
pub mod result;

pub use extract::{ParameterMap, extract_parameters};
pub use model::{BINARY_SENTINEL, FileContent, FileRecord, ModelData, ModelMetadata};
pub use numeric::format_float;
pub use result::{Details, Severity, ValidationResult};
