//! Inspection and repair of the YAML config file.
//!
//! `config --check` lists fields that are absent from the file (they fall
//! back to defaults silently at load time); `config --migrate` writes those
//! defaults back so the file documents every setting.

use super::{Config, default_cache_ttl, default_header, default_max_name_chars, default_sheet};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields that carry a default and may be filled in automatically.
fn defaultable_fields() -> Vec<(&'static str, Value)> {
    vec![
        ("sheet", Value::String(default_sheet())),
        (
            "header",
            Value::Sequence(default_header().into_iter().map(Value::String).collect()),
        ),
        ("cache_ttl_secs", Value::Number(default_cache_ttl().into())),
        (
            "max_name_chars",
            Value::Number((default_max_name_chars() as u64).into()),
        ),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigurationMissing)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

    if !yaml.is_mapping() {
        return Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        )));
    }
    Ok(yaml)
}

/// Return the names of fields missing from the config file.
/// `workbook` is mandatory and reported first when absent.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let yaml = read_mapping(path)?;
    let mut missing = Vec::new();

    if let Some(map) = yaml.as_mapping() {
        if !map.contains_key("workbook") {
            missing.push("workbook".to_string());
        }
        for (key, _) in defaultable_fields() {
            if !map.contains_key(key) {
                missing.push(key.to_string());
            }
        }
    }

    Ok(missing)
}

/// Insert defaults for every missing defaultable field.
/// Returns the fields that were added; the file is only rewritten if
/// something changed.
pub fn fill_missing(path: &Path) -> AppResult<Vec<String>> {
    let mut yaml = read_mapping(path)?;
    let mut added = Vec::new();

    if let Some(map) = yaml.as_mapping_mut() {
        for (key, value) in defaultable_fields() {
            let k = Value::String(key.to_string());
            if !map.contains_key(&k) {
                map.insert(k, value);
                added.push(key.to_string());
            }
        }
    }

    if added.is_empty() {
        info("Configuration already complete.");
        return Ok(added);
    }

    // Make sure the result still loads before touching the file.
    let serialized = serde_yaml::to_string(&yaml).map_err(|e| AppError::Config(e.to_string()))?;
    serde_yaml::from_str::<Config>(&serialized)
        .map_err(|e| AppError::Config(format!("migrated config would not load: {e}")))?;

    fs::write(path, serialized)?;
    success(format!("Configuration updated: added {}", added.join(", ")));

    Ok(added)
}
