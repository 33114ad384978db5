//! Per-file structural sanity checks.

use crate::traits::Rule;
use serde_json::json;
use sv_core::{Details, FileRecord, ModelData, Severity, ValidationResult};

/// Minimum number of `\n`-separated lines for `.dat`/`.inp` decks.
const MIN_DECK_LINES: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct FileFormatRule;

impl FileFormatRule {
    pub const ID: &'static str = "FILE_FORMAT";

    pub fn new() -> Self {
        Self
    }

    /// Problem with one file, if any.
    fn check_file(name: &str, record: &FileRecord) -> Option<String> {
        let text = match record.content.as_text() {
            Some(text) if !text.is_empty() => text,
            _ => return Some(format!("{name}: Empty or unreadable file")),
        };

        match record.extension().as_deref() {
            Some(".csv") if !text.contains(',') => {
                Some(format!("{name}: CSV file missing comma separators"))
            }
            Some(".json") => serde_json::from_str::<serde_json::Value>(text)
                .err()
                .map(|e| format!("{name}: Invalid JSON format - {e}")),
            Some(".dat") | Some(".inp") => {
                let lines = text.split('\n').count();
                (lines < MIN_DECK_LINES)
                    .then(|| format!("{name}: File appears incomplete (only {lines} lines)"))
            }
            _ => None,
        }
    }
}

impl Rule for FileFormatRule {
    fn id(&self) -> &str {
        Self::ID
    }

    fn description(&self) -> &str {
        "Verify file formats and basic structure"
    }

    fn severity(&self) -> Severity {
        Severity::Error
    }

    fn validate(&self, model: &ModelData) -> ValidationResult {
        let errors: Vec<String> = model
            .files
            .iter()
            .filter_map(|(name, record)| Self::check_file(name, record))
            .collect();

        if errors.is_empty() {
            return ValidationResult::pass(
                Self::ID,
                format!("All {} files have valid formats", model.files.len()),
            );
        }

        let message = format!(
            "Format issues found in {} files: {}",
            errors.len(),
            errors.join("; ")
        );
        let mut details = Details::new();
        details.insert("format_errors".into(), json!(errors));
        ValidationResult::fail(Self::ID, message, self.severity(), details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::model;
    use std::path::PathBuf;
    use sv_core::FileContent;

    fn errors(result: &ValidationResult) -> Vec<String> {
        serde_json::from_value(result.details["format_errors"].clone()).unwrap()
    }

    #[test]
    fn clean_files_pass() {
        let data = model(&[
            ("input.dat", "temperature = 300\npressure = 101325\n"),
            ("material_properties.csv", "property,value\ndensity,1.2\n"),
            ("meta.json", r#"{"solver": "navier_stokes"}"#),
            ("notes.txt", "x"),
        ]);
        let result = FileFormatRule::new().validate(&data);
        assert!(result.passed, "{}", result.message);
        assert_eq!(result.message, "All 4 files have valid formats");
    }

    #[test]
    fn empty_file_is_error() {
        let data = model(&[("mesh_info.txt", "")]);
        let result = FileFormatRule::new().validate(&data);
        assert!(!result.passed);
        assert_eq!(errors(&result), vec!["mesh_info.txt: Empty or unreadable file"]);
    }

    #[test]
    fn binary_file_is_error() {
        let mut data = model(&[]);
        data.add_file(FileRecord {
            relative_path: "blob.dat".into(),
            absolute_path: PathBuf::from("/models/test_model/blob.dat"),
            content: FileContent::Binary,
            size_bytes: 3,
            modified: None,
        });
        let result = FileFormatRule::new().validate(&data);
        assert_eq!(errors(&result), vec!["blob.dat: Empty or unreadable file"]);
    }

    #[test]
    fn csv_needs_commas() {
        let data = model(&[("table.csv", "a;b;c\n1;2;3\n")]);
        let result = FileFormatRule::new().validate(&data);
        assert_eq!(errors(&result), vec!["table.csv: CSV file missing comma separators"]);
    }

    #[test]
    fn invalid_json_carries_parser_message() {
        let data = model(&[("settings.json", "{\"a\": }")]);
        let result = FileFormatRule::new().validate(&data);
        let errs = errors(&result);
        assert_eq!(errs.len(), 1);
        assert!(errs[0].starts_with("settings.json: Invalid JSON format - "));
        assert!(errs[0].contains("line 1"));
    }

    #[test]
    fn single_line_deck_is_incomplete() {
        let data = model(&[("input.dat", "temperature = 300"), ("run.inp", "a\nb")]);
        let result = FileFormatRule::new().validate(&data);
        assert_eq!(
            errors(&result),
            vec!["input.dat: File appears incomplete (only 1 lines)"]
        );
        assert!(result.message.starts_with("Format issues found in 1 files"));
    }

    #[test]
    fn all_errors_aggregated() {
        let data = model(&[("a.csv", "x"), ("b.json", "nope"), ("c.txt", "")]);
        let result = FileFormatRule::new().validate(&data);
        assert_eq!(result.severity, Severity::Error);
        assert_eq!(errors(&result).len(), 3);
    }
}
