//! Plain-text summary block for terminals and logs.

use crate::types::ValidationReport;
use std::fmt::Write;

const RULE: &str = "============================================================";

impl ValidationReport {
    pub fn render_text_summary(&self) -> String {
        let s = self.summary();
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "VALIDATION SUMMARY");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Model: {}", self.model_name());
        let _ = writeln!(out, "Status: {}", if self.is_valid() { "VALID" } else { "INVALID" });
        let _ = writeln!(out, "Duration: {:.1} seconds", s.duration_seconds);
        let _ = writeln!(out, "Rules Executed: {}", s.total_rules);
        let _ = writeln!(out, "Passed: {}", s.passed);
        let _ = writeln!(out, "Failed: {}", s.failed);
        let _ = writeln!(out, "Errors: {}", s.errors);
        let _ = writeln!(out, "Warnings: {}", s.warnings);

        let errors = self.critical_errors();
        if !errors.is_empty() {
            let _ = writeln!(out, "\nCRITICAL ERRORS ({}):", errors.len());
            for r in errors {
                let _ = writeln!(out, "  [{}] {}", r.rule_id, r.message);
            }
        }

        let warnings = self.warnings();
        if !warnings.is_empty() {
            let _ = writeln!(out, "\nWARNINGS ({}):", warnings.len());
            for r in warnings {
                let _ = writeln!(out, "  [{}] {}", r.rule_id, r.message);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sv_core::{Details, Severity, ValidationResult};

    #[test]
    fn lists_errors_and_warnings() {
        let mut report = ValidationReport::new("invalid_thermal_model");
        report.add_result(ValidationResult::fail(
            "FILE_EXISTENCE",
            "Missing required files: boundary_conditions.txt",
            Severity::Error,
            Details::new(),
        ));
        report.add_result(ValidationResult::fail(
            "CROSS_FILE_CONSISTENCY",
            "Consistency issues found: Only 2 input files found - typical models have 3+ files",
            Severity::Warning,
            Details::new(),
        ));
        report.finalize();

        let text = report.render_text_summary();
        assert!(text.contains("Status: INVALID"));
        assert!(text.contains("CRITICAL ERRORS (1):"));
        assert!(text.contains("  [FILE_EXISTENCE] Missing required files: boundary_conditions.txt"));
        assert!(text.contains("WARNINGS (1):"));
    }

    #[test]
    fn clean_report_has_no_sections() {
        let mut report = ValidationReport::new("valid_fluid_model");
        report.add_result(ValidationResult::pass("FILE_FORMAT", "All 4 files have valid formats"));
        let text = report.render_text_summary();
        assert!(text.contains("Status: VALID"));
        assert!(!text.contains("CRITICAL ERRORS"));
        assert!(!text.contains("WARNINGS ("));
    }
}
