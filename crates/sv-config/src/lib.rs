//! sv-config: validation configuration, built-in defaults and override loading.

pub mod defaults;
pub mod schema;

pub use schema::{Config, ConfigOverride, ParameterRange};

use std::path::{Path, PathBuf};

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid range for '{name}': {min} to {max}")]
    InvalidRange { name: String, min: f64, max: f64 },
}

/// Resolve the effective configuration.
///
/// Without a path, or with a path that does not exist, the built-in
/// defaults are returned. Otherwise the document is parsed (YAML for
/// `.yaml`/`.yml`, JSON otherwise) and merged over the defaults one
/// top-level field at a time.
pub fn load_config(path: Option<&Path>) -> ConfigResult<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    if !path.exists() {
        tracing::warn!(
            "Configuration file {} not found, using built-in defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let overrides = if is_yaml(path) {
        parse_yaml(&content)?
    } else {
        parse_json(&content)?
    };

    let config = Config::default().merged(overrides);
    config.validate()?;
    Ok(config)
}

pub fn parse_json(content: &str) -> ConfigResult<ConfigOverride> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_yaml(content: &str) -> ConfigResult<ConfigOverride> {
    Ok(serde_yaml::from_str(content)?)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}
