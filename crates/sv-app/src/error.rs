//! Error types for the sv-app service layer.

use std::path::PathBuf;

/// Errors surfaced to engine callers. Rule and file-level problems never
/// appear here; they end up in the report instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] sv_config::ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] sv_report::ReportError),

    #[error("Model path does not exist: {0}")]
    ModelNotFound(PathBuf),
}

/// Result type for sv-app operations.
pub type AppResult<T> = Result<T, AppError>;
