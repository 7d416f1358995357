//! Configuration loading for Seorank

mod schema;

pub use schema::{Config, InputDefaults, PartialInput};

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = ".seorankrc.json";

/// Errors raised while locating or reading config files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Extended config not found: {} (referenced from {})", .path.display(), .from.display())]
    ExtendsNotFound { path: PathBuf, from: PathBuf },

    #[error("Failed to read config: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config: {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Circular extends detected in config: {}", .0.display())]
    CircularExtends(PathBuf),
}

/// Find and load config file with extends resolution. Searches current directory then parents.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => load_config_with_extends(&path, &mut HashSet::new()),
        None => Ok(Config::default()),
    }
}

/// Load a config file and resolve extends chain
fn load_config_with_extends(
    config_path: &Path,
    visited: &mut HashSet<PathBuf>,
) -> Result<Config, ConfigError> {
    let canonical = config_path
        .canonicalize()
        .unwrap_or_else(|_| config_path.to_path_buf());
    if !visited.insert(canonical) {
        return Err(ConfigError::CircularExtends(config_path.to_path_buf()));
    }

    let content = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    let mut config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })?;

    if let Some(extends) = config.extends.take() {
        let base_config = resolve_extends(config_path, &extends, visited)?;
        config.merge_from(base_config);
    }

    Ok(config)
}

/// Resolve an extends reference relative to the referencing config
fn resolve_extends(
    config_path: &Path,
    extends: &str,
    visited: &mut HashSet<PathBuf>,
) -> Result<Config, ConfigError> {
    let config_dir = config_path.parent().unwrap_or(Path::new("."));

    let extends_path = if Path::new(extends).is_absolute() {
        PathBuf::from(extends)
    } else {
        config_dir.join(extends)
    };

    // Ensure it has .json extension
    let extends_path = if extends_path.extension().is_none() {
        extends_path.with_extension("json")
    } else {
        extends_path
    };

    if !extends_path.exists() {
        return Err(ConfigError::ExtendsNotFound {
            path: extends_path,
            from: config_path.to_path_buf(),
        });
    }

    load_config_with_extends(&extends_path, visited)
}

/// Search for .seorankrc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Starter config written by `seorank init`
pub fn starter_config(threshold: u8) -> String {
    let sample = crate::AnalysisInput::sample();
    let json = serde_json::json!({
        "threshold": threshold,
        "defaults": {
            "domain": sample.domain,
            "keywords": sample.keywords,
            "competitor": sample.competitor,
            "audience": sample.audience,
        }
    });
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
}
