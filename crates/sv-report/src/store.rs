//! Report persistence.

use crate::types::ReportDocument;
use crate::{ReportError, ReportResult};
use std::fs;
use std::path::Path;

pub fn save_document(path: &Path, document: &ReportDocument) -> ReportResult<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write several reports as one JSON array.
pub fn save_documents(path: &Path, documents: &[ReportDocument]) -> ReportResult<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(documents)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_document(path: &Path) -> ReportResult<ReportDocument> {
    let content = read(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn load_documents(path: &Path) -> ReportResult<Vec<ReportDocument>> {
    let content = read(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read(path: &Path) -> ReportResult<String> {
    if !path.exists() {
        return Err(ReportError::NotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn ensure_parent(path: &Path) -> ReportResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
