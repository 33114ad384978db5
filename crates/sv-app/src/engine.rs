//! Validation orchestration: load, run rules in order, report.

use crate::error::{AppError, AppResult};
use crate::loader;
use crate::progress::{TracingListener, ValidationEvent, ValidationListener};
use rayon::prelude::*;
use serde_json::json;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use sv_config::{Config, load_config};
use sv_core::{Details, ModelData, Severity, ValidationResult};
use sv_report::ValidationReport;
use sv_rules::{Rule, build_rules};

/// Configuration plus the rule set built from it.
///
/// Both are read-only after construction, so one engine can validate many
/// models, including from several threads at once.
pub struct ValidationEngine {
    config: Config,
    rules: Vec<Box<dyn Rule>>,
    listener: Arc<dyn ValidationListener>,
}

impl ValidationEngine {
    /// Engine with the rules named in `config`, logging through `tracing`.
    pub fn new(config: Config) -> Self {
        let rules = build_rules(&config);
        Self::with_rules(config, rules)
    }

    /// Resolve configuration from an optional override file, then build.
    pub fn from_config_path(config_path: Option<&Path>) -> AppResult<Self> {
        Ok(Self::new(load_config(config_path)?))
    }

    /// Engine with an explicit rule set; `config` still drives loading.
    pub fn with_rules(config: Config, rules: Vec<Box<dyn Rule>>) -> Self {
        Self {
            config,
            rules,
            listener: Arc::new(TracingListener),
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn ValidationListener>) -> Self {
        self.listener = listener;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rule_ids(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn load_model(&self, model_path: &Path) -> ModelData {
        loader::load_model(model_path, &self.config, self.listener.as_ref())
    }

    /// Validate one model directory.
    ///
    /// Never fails: unreadable files and misbehaving rules are recorded in
    /// the report. Checking that `model_path` exists is up to the caller.
    pub fn validate(&self, model_path: &Path) -> ValidationReport {
        let model_name = model_name(model_path);
        self.listener.on_event(&ValidationEvent::Started {
            model_name: model_name.clone(),
            model_path: model_path.to_path_buf(),
        });

        let mut report = ValidationReport::new(model_name);
        let model = self.load_model(model_path);

        for rule in &self.rules {
            report.add_result(self.run_rule(rule.as_ref(), &model));
        }

        report.finalize();
        self.listener.on_event(&ValidationEvent::Completed {
            model_name: report.model_name().to_string(),
            is_valid: report.is_valid(),
            duration_seconds: report.summary().duration_seconds,
        });
        report
    }

    /// Validate several models in parallel. Output order follows input order.
    pub fn validate_many(&self, model_paths: &[PathBuf]) -> Vec<ValidationReport> {
        model_paths
            .par_iter()
            .map(|path| self.validate(path))
            .collect()
    }

    fn run_rule(&self, rule: &dyn Rule, model: &ModelData) -> ValidationResult {
        let fault = match panic::catch_unwind(AssertUnwindSafe(|| rule.validate(model))) {
            Ok(result) => {
                self.listener.on_event(&ValidationEvent::RuleFinished {
                    rule_id: result.rule_id.clone(),
                    passed: result.passed,
                    severity: result.severity,
                    message: result.message.clone(),
                });
                return result;
            }
            Err(payload) => panic_message(payload.as_ref()),
        };

        self.listener.on_event(&ValidationEvent::RuleFaulted {
            rule_id: rule.id().to_string(),
            error: fault.clone(),
        });
        let mut details = Details::new();
        details.insert("exception".into(), json!(fault));
        ValidationResult::fail(
            rule.id(),
            format!("Rule execution failed: {fault}"),
            Severity::Error,
            details,
        )
    }
}

/// Resolve configuration, validate one model, return its report.
pub fn validate(model_path: &Path, config_path: Option<&Path>) -> AppResult<ValidationReport> {
    if !model_path.exists() {
        return Err(AppError::ModelNotFound(model_path.to_path_buf()));
    }
    let engine = ValidationEngine::from_config_path(config_path)?;
    Ok(engine.validate(model_path))
}

fn model_name(model_path: &Path) -> String {
    model_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| model_path.display().to_string())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "rule panicked".to_string()
    }
}
