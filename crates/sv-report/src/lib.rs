//! sv-report: report accumulation and the serializable report document.

pub mod render;
pub mod store;
pub mod types;

pub use store::{load_document, load_documents, save_document, save_documents};
pub use types::*;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report not found: {path}")]
    NotFound { path: std::path::PathBuf },
}
