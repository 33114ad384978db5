//! In-memory representation of one model directory.

use crate::extract::{ParameterMap, extract_parameters};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Placeholder rendered for content that could not be decoded as text.
pub const BINARY_SENTINEL: &str = "[BINARY_FILE]";

/// Decoded content of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    /// Neither UTF-8 nor Latin-1 produced usable text.
    Binary,
}

impl FileContent {
    /// Decode raw bytes: UTF-8 first, then Latin-1.
    ///
    /// Latin-1 maps every byte to a char, so it is only accepted for data
    /// free of NUL bytes; anything else is recorded as binary.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => FileContent::Text(text),
            Err(err) => {
                let bytes = err.into_bytes();
                if bytes.contains(&0) {
                    FileContent::Binary
                } else {
                    FileContent::Text(bytes.iter().map(|&b| char::from(b)).collect())
                }
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Binary => None,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FileContent::Binary)
    }

    /// True for binary content and for text that is empty.
    pub fn is_empty_or_binary(&self) -> bool {
        match self {
            FileContent::Text(text) => text.is_empty(),
            FileContent::Binary => true,
        }
    }

    /// Text view, with the sentinel standing in for binary content.
    pub fn display_text(&self) -> &str {
        self.as_text().unwrap_or(BINARY_SENTINEL)
    }
}

/// One loaded input file. Immutable once built.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Path relative to the model root, `/`-separated.
    pub relative_path: String,
    pub absolute_path: PathBuf,
    pub content: FileContent,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

impl FileRecord {
    /// Extension including the leading dot, e.g. `.csv`.
    pub fn extension(&self) -> Option<String> {
        let name = self.relative_path.rsplit('/').next()?;
        let dot = name.rfind('.')?;
        if dot == 0 {
            return None;
        }
        Some(name[dot..].to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModelMetadata {
    pub root: PathBuf,
    pub file_count: usize,
    pub total_size_bytes: u64,
}

/// Files and merged parameters for one model directory.
#[derive(Debug, Clone, Default)]
pub struct ModelData {
    pub files: BTreeMap<String, FileRecord>,
    /// Lowercased name -> value. Later files overwrite earlier ones.
    pub parameters: ParameterMap,
    pub metadata: ModelMetadata,
}

impl ModelData {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            files: BTreeMap::new(),
            parameters: ParameterMap::new(),
            metadata: ModelMetadata {
                root: root.into(),
                ..Default::default()
            },
        }
    }

    /// Add a file, merge its parameters and update the counters.
    ///
    /// Callers control merge order; a parameter seen again replaces the
    /// previous value without any conflict record.
    pub fn add_file(&mut self, record: FileRecord) {
        if let Some(text) = record.content.as_text() {
            self.parameters.extend(extract_parameters(text));
        }
        self.metadata.file_count += 1;
        self.metadata.total_size_bytes += record.size_bytes;
        self.files.insert(record.relative_path.clone(), record);
    }

    pub fn file_count(&self) -> usize {
        self.metadata.file_count
    }

    pub fn relative_paths(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }
}
