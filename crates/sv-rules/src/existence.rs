//! Required-file presence check.

use crate::traits::Rule;
use serde_json::json;
use sv_core::{Details, ModelData, Severity, ValidationResult};

/// Passes when every required name appears somewhere in a discovered path.
///
/// Matching is a case-insensitive substring test so nested directories and
/// prefixed file names still count.
#[derive(Debug, Clone)]
pub struct FileExistenceRule {
    required_files: Vec<String>,
}

impl FileExistenceRule {
    pub const ID: &'static str = "FILE_EXISTENCE";

    pub fn new(required_files: Vec<String>) -> Self {
        Self { required_files }
    }
}

impl Rule for FileExistenceRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Verify all required files are present"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn validate(&self, model: &ModelData) -> ValidationResult {
        let present = model.relative_paths();
        let present_lower: Vec<String> = present.iter().map(|p| p.to_lowercase()).collect();

        let missing: Vec<&str> = self
            .required_files
            .iter()
            .filter(|required| {
                let needle = required.to_lowercase();
                !present_lower.iter().any(|p| p.contains(&needle))
            })
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            return ValidationResult::pass(
                Self::ID,
                format!("All {} required files present", self.required_files.len()),
            );
        }

        let mut details = Details::new();
        details.insert("missing_files".into(), json!(missing));
        details.insert("present_files".into(), json!(present));
        ValidationResult::fail(
            Self::ID,
            format!("Missing required files: {}", missing.join(", ")),
            self.severity(),
            details,
        )
    }
}
