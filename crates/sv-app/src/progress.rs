//! Events emitted while a model is validated, and the listeners that
//! receive them.

use std::path::PathBuf;
use sv_core::Severity;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationEvent {
    Started {
        model_name: String,
        model_path: PathBuf,
    },
    /// A file or directory could not be stat-ed, walked or opened.
    FileSkipped { path: PathBuf, reason: String },
    /// A file was loaded but is not text; recorded as binary.
    FileDegraded { path: PathBuf },
    ModelLoaded {
        file_count: usize,
        total_size_bytes: u64,
        parameter_count: usize,
    },
    RuleFinished {
        rule_id: String,
        passed: bool,
        severity: Severity,
        message: String,
    },
    /// The rule could not evaluate; a synthetic error result was recorded.
    RuleFaulted { rule_id: String, error: String },
    Completed {
        model_name: String,
        is_valid: bool,
        duration_seconds: f64,
    },
}

/// Receives engine events. Handed to the engine at construction.
pub trait ValidationListener: Send + Sync {
    fn on_event(&self, event: &ValidationEvent);
}

impl<F> ValidationListener for F
where
    F: Fn(&ValidationEvent) + Send + Sync,
{
    fn on_event(&self, event: &ValidationEvent) {
        self(event)
    }
}

/// Forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl ValidationListener for TracingListener {
    fn on_event(&self, event: &ValidationEvent) {
        match event {
            ValidationEvent::Started {
                model_name,
                model_path,
            } => {
                tracing::info!(model = %model_name, path = %model_path.display(), "Starting validation");
            }
            ValidationEvent::FileSkipped { path, reason } => {
                tracing::warn!(path = %path.display(), %reason, "Could not read file");
            }
            ValidationEvent::FileDegraded { path } => {
                tracing::warn!(path = %path.display(), "File is not text, recorded as binary");
            }
            ValidationEvent::ModelLoaded {
                file_count,
                total_size_bytes,
                parameter_count,
            } => {
                tracing::debug!(file_count, total_size_bytes, parameter_count, "Model loaded");
            }
            ValidationEvent::RuleFinished {
                rule_id,
                passed: true,
                message,
                ..
            } => {
                tracing::info!(rule = %rule_id, "PASS - {message}");
            }
            ValidationEvent::RuleFinished {
                rule_id,
                severity,
                message,
                ..
            } => {
                tracing::info!(rule = %rule_id, %severity, "FAIL ({severity}) - {message}");
            }
            ValidationEvent::RuleFaulted { rule_id, error } => {
                tracing::error!(rule = %rule_id, %error, "Rule failed with exception");
            }
            ValidationEvent::Completed {
                model_name,
                is_valid,
                duration_seconds,
            } => {
                let status = if *is_valid { "VALID" } else { "INVALID" };
                tracing::info!(model = %model_name, duration_seconds, "Validation complete. Status: {status}");
            }
        }
    }
}

/// Drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentListener;

impl ValidationListener for SilentListener {
    fn on_event(&self, _event: &ValidationEvent) {}
}
