//! Template loading from the bundled set or a local directory
//!
//! The bundled templates are compiled into the binary. A local directory with the same
//! file names can replace them while working on the templates themselves.

use crate::error::{Result, ScaffoldError};
use include_dir::{include_dir, Dir};
use std::path::PathBuf;
use tokio::fs;

static BUNDLED_TEMPLATES: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Template source - either the bundled set or a local directory
#[derive(Debug, Clone, Default)]
pub enum TemplateSource {
    #[default]
    Embedded,
    Local(PathBuf),
}

impl TemplateSource {
    /// Create a local template source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }

    /// Pick the local directory when one is given, the bundled set otherwise
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map(Self::Local).unwrap_or_default()
    }

    /// Load a template's raw text by file name
    pub async fn load(&self, name: &str) -> Result<String> {
        match self {
            TemplateSource::Embedded => {
                let file = BUNDLED_TEMPLATES
                    .get_file(name)
                    .ok_or_else(|| ScaffoldError::TemplateMissing(name.to_string()))?;
                file.contents_utf8()
                    .map(str::to_string)
                    .ok_or_else(|| ScaffoldError::TemplateRead {
                        name: name.to_string(),
                        reason: "file is not valid UTF-8".to_string(),
                    })
            }
            TemplateSource::Local(dir) => {
                let path = dir.join(name);
                match fs::read_to_string(&path).await {
                    Ok(content) => Ok(content),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        Err(ScaffoldError::TemplateMissing(name.to_string()))
                    }
                    Err(e) => Err(ScaffoldError::TemplateRead {
                        name: name.to_string(),
                        reason: e.to_string(),
                    }),
                }
            }
        }
    }

    /// Human-readable description for log output
    pub fn describe(&self) -> String {
        match self {
            TemplateSource::Embedded => "bundled templates".to_string(),
            TemplateSource::Local(dir) => format!("local templates from {}", dir.display()),
        }
    }
}
