//! Error types for the scaffolding pipeline

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a scaffold run.
///
/// Everything up to and including rendering fails before the filesystem is touched.
/// Write failures leave whatever was already written in place.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The terminal prompt failed for a reason other than cancellation.
    #[error("Prompt failed: {0}")]
    Prompt(#[from] io::Error),

    /// The project's package.json could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The project's package.json is not a valid JSON object.
    #[error("Failed to parse {}: {reason}", path.display())]
    ManifestParse { path: PathBuf, reason: String },

    /// A template required by the scaffold plan is not present in the template source.
    #[error("Template '{0}' not found")]
    TemplateMissing(String),

    /// A template exists but could not be loaded as UTF-8 text.
    #[error("Failed to read template '{name}': {reason}")]
    TemplateRead { name: String, reason: String },

    /// A `{{token}}` survived substitution.
    #[error("Template '{template}' contains unknown placeholder '{{{{{token}}}}}'")]
    UnknownPlaceholder { template: String, token: String },

    /// A scaffold directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A progress line for a scaffold step could not be reported.
    #[error("Failed to report scaffold progress: {0}")]
    Progress(#[source] io::Error),

    /// A rendered file could not be written.
    #[error("Failed to write file {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
