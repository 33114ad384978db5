//! Model directory loading.

use crate::progress::{ValidationEvent, ValidationListener};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Component, Path, PathBuf};
use sv_config::Config;
use sv_core::{FileContent, FileRecord, ModelData};
use walkdir::WalkDir;

/// Walk `root`, load every allowed file and merge its parameters.
///
/// Candidate paths are sorted by their `/`-separated relative form before
/// anything is read, so parameter overwrites are deterministic. Files that
/// cannot be stat-ed or read are reported to `listener` and left out.
pub fn load_model(root: &Path, config: &Config, listener: &dyn ValidationListener) -> ModelData {
    let candidates = discover_files(root, config, listener);
    load_files(root, candidates, listener)
}

/// Read already-discovered `(relative, absolute)` candidates in order.
fn load_files(
    root: &Path,
    candidates: Vec<(String, PathBuf)>,
    listener: &dyn ValidationListener,
) -> ModelData {
    let mut model = ModelData::new(root);

    for (relative_path, absolute_path) in candidates {
        let Some(record) = read_record(relative_path, absolute_path, listener) else {
            continue;
        };
        if record.content.is_binary() {
            listener.on_event(&ValidationEvent::FileDegraded {
                path: record.absolute_path.clone(),
            });
        }
        model.add_file(record);
    }

    listener.on_event(&ValidationEvent::ModelLoaded {
        file_count: model.metadata.file_count,
        total_size_bytes: model.metadata.total_size_bytes,
        parameter_count: model.parameters.len(),
    });
    model
}

fn discover_files(
    root: &Path,
    config: &Config,
    listener: &dyn ValidationListener,
) -> Vec<(String, PathBuf)> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                listener.on_event(&ValidationEvent::FileSkipped {
                    path: e.path().unwrap_or(root).to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let allowed = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.allows_extension(&format!(".{ext}")));
        if !allowed {
            continue;
        }
        if let Ok(relative) = path.strip_prefix(root) {
            found.push((to_slash_path(relative), path.to_path_buf()));
        }
    }
    found.sort_by(|a, b| a.0.cmp(&b.0));
    found
}

fn read_record(
    relative_path: String,
    absolute_path: PathBuf,
    listener: &dyn ValidationListener,
) -> Option<FileRecord> {
    let loaded = fs::metadata(&absolute_path).and_then(|meta| Ok((meta, fs::read(&absolute_path)?)));
    match loaded {
        Ok((meta, bytes)) => Some(FileRecord {
            relative_path,
            content: FileContent::from_bytes(bytes),
            size_bytes: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
            absolute_path,
        }),
        Err(e) => {
            listener.on_event(&ValidationEvent::FileSkipped {
                path: absolute_path,
                reason: e.to_string(),
            });
            None
        }
    }
}

fn to_slash_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentListener;
    use std::sync::{Arc, Mutex};

    #[test]
    fn slash_paths() {
        assert_eq!(to_slash_path(Path::new("a/b/input.dat")), "a/b/input.dat");
        assert_eq!(to_slash_path(Path::new("input.dat")), "input.dat");
    }

    #[test]
    fn filters_sorts_and_merges() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("z_last.dat"), "temperature = 400\n").unwrap();
        fs::write(root.join("a_first.dat"), "temperature = 300\n").unwrap();
        fs::write(root.join("sub").join("m.csv"), "density,1.2\n").unwrap();
        fs::write(root.join("ignored.log"), "temperature = 999\n").unwrap();
        fs::write(root.join("upper.DAT"), "temperature = 999\n").unwrap();

        let model = load_model(root, &Config::default(), &SilentListener);
        assert_eq!(
            model.relative_paths(),
            vec!["a_first.dat", "sub/m.csv", "z_last.dat"]
        );
        assert_eq!(model.file_count(), 3);
        assert_eq!(model.parameter("temperature"), Some(400.0));
        let expected: u64 = ["temperature = 400\n", "temperature = 300\n", "density,1.2\n"]
            .iter()
            .map(|s| s.len() as u64)
            .sum();
        assert_eq!(model.metadata.total_size_bytes, expected);
        assert!(model.files["z_last.dat"].modified.is_some());
    }

    #[test]
    fn binary_file_degrades_and_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("blob.dat"), [0xFFu8, 0x00, 0x10, 0x80]).unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener = move |e: &ValidationEvent| sink.lock().unwrap().push(e.clone());

        let model = load_model(dir.path(), &Config::default(), &listener);
        assert!(model.files["blob.dat"].content.is_binary());
        assert_eq!(model.file_count(), 1);
        let events = seen.lock().unwrap();
        assert!(events.iter().any(|e| matches!(e, ValidationEvent::FileDegraded { .. })));
    }

    #[test]
    fn vanished_file_is_skipped_and_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.dat"), "temperature = 300\n").unwrap();
        fs::write(root.join("b.dat"), "temperature = 900\npressure = 5\n").unwrap();
        fs::write(root.join("c.txt"), "density = 1.2\n").unwrap();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener = move |e: &ValidationEvent| sink.lock().unwrap().push(e.clone());

        let candidates = discover_files(root, &Config::default(), &listener);
        assert_eq!(candidates.len(), 3);
        fs::remove_file(root.join("b.dat")).unwrap();

        let model = load_files(root, candidates, &listener);
        assert_eq!(model.relative_paths(), vec!["a.dat", "c.txt"]);
        assert_eq!(model.metadata.file_count, 2);
        assert_eq!(
            model.metadata.total_size_bytes,
            ("temperature = 300\n".len() + "density = 1.2\n".len()) as u64
        );
        assert_eq!(model.parameter("temperature"), Some(300.0));
        assert_eq!(model.parameter("pressure"), None);

        let events = seen.lock().unwrap();
        let skipped: Vec<&PathBuf> = events
            .iter()
            .filter_map(|e| match e {
                ValidationEvent::FileSkipped { path, .. } => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, vec![&root.join("b.dat")]);
        assert!(events.iter().any(|e| matches!(
            e,
            ValidationEvent::ModelLoaded { file_count: 2, .. }
        )));
    }

    #[test]
    fn unreadable_record_reports_reason() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone.dat");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener = move |e: &ValidationEvent| sink.lock().unwrap().push(e.clone());

        assert!(read_record("gone.dat".to_string(), gone.clone(), &listener).is_none());
        let events = seen.lock().unwrap();
        assert_eq!(events.len(), 1);
        match &events[0] {
            ValidationEvent::FileSkipped { path, reason } => {
                assert_eq!(path, &gone);
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn missing_root_yields_empty_model_and_skip_event() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener = move |e: &ValidationEvent| sink.lock().unwrap().push(e.clone());

        let model = load_model(
            Path::new("/nonexistent/model/dir"),
            &Config::default(),
            &listener,
        );
        assert_eq!(model.file_count(), 0);
        assert!(
            seen.lock()
                .unwrap()
                .iter()
                .any(|e| matches!(e, ValidationEvent::FileSkipped { .. }))
        );
    }
}
