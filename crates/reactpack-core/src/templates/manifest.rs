//! package.json script merging

use crate::error::{Result, ScaffoldError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Script entries written into the project's package.json (`scripts.json` template)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntries {
    /// Development server command
    pub start: String,

    /// Production build command
    pub build: String,
}

impl ScriptEntries {
    /// Parse the rendered scripts fragment
    pub fn parse(template_name: &str, text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| ScaffoldError::TemplateRead {
            name: template_name.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Read the existing package.json, failing if it is missing
pub async fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|source| ScaffoldError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Insert or overwrite `scripts.start` and `scripts.build`
///
/// Existing keys keep their order; the result uses 2-space indentation and ends with a
/// newline.
pub fn merge_scripts(path: &Path, manifest: &str, scripts: &ScriptEntries) -> Result<String> {
    let parse_error = |reason: String| ScaffoldError::ManifestParse {
        path: path.to_path_buf(),
        reason,
    };

    let mut root: Value = serde_json::from_str(manifest).map_err(|e| parse_error(e.to_string()))?;
    let object = root
        .as_object_mut()
        .ok_or_else(|| parse_error("top-level value is not an object".to_string()))?;

    let entry = object
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !entry.is_object() {
        return Err(parse_error("\"scripts\" is not an object".to_string()));
    }
    if let Some(existing) = entry.as_object_mut() {
        existing.insert("start".to_string(), Value::String(scripts.start.clone()));
        existing.insert("build".to_string(), Value::String(scripts.build.clone()));
    }

    let mut output =
        serde_json::to_string_pretty(&root).map_err(|e| parse_error(e.to_string()))?;
    output.push('\n');
    Ok(output)
}
