//! Template loading, rendering, and package.json merging
//!
//! This module provides:
//! - The fixed set of project templates and where each one lands
//! - Template loading from the bundled set or a local directory
//! - Placeholder substitution
//! - Script merging into the project's existing package.json

pub mod manifest;
pub mod render;
pub mod source;

use crate::error::Result;
use crate::variant::VariantConfig;
use std::path::{Path, PathBuf};

pub use manifest::{merge_scripts, read_manifest, ScriptEntries};
pub use render::Placeholders;
pub use source::TemplateSource;

/// Template holding the package.json script entries
pub const SCRIPTS_TEMPLATE: &str = "scripts.json";

/// Project manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// A template and the project-relative path it is written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Template file name within the template source
    pub source: String,

    /// Destination relative to the project root
    pub destination: PathBuf,
}

impl TemplateFile {
    fn new(source: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// File contents ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Destination relative to the project root
    pub destination: PathBuf,

    pub content: String,
}

/// The fixed, ordered set of templates for a variant
pub fn template_files(variant: &VariantConfig) -> Vec<TemplateFile> {
    let ext = variant.style_file_extension();
    vec![
        TemplateFile::new(".babelrc", ".babelrc"),
        TemplateFile::new("webpack.config.js", "webpack.config.js"),
        TemplateFile::new("index.ejs", "src/index.ejs"),
        TemplateFile::new(format!("styles.{}", ext), format!("src/styles/styles.{}", ext)),
        TemplateFile::new("index.js", "src/index.js"),
    ]
}

/// Render every project file in memory, including the updated package.json
///
/// Nothing is written here. A missing or malformed package.json fails the whole render.
pub async fn render_project(
    source: &TemplateSource,
    variant: &VariantConfig,
    project_dir: &Path,
) -> Result<Vec<RenderedFile>> {
    let placeholders = Placeholders::for_variant(variant);

    let manifest_path = project_dir.join(MANIFEST_FILE);
    let manifest = read_manifest(&manifest_path).await?;

    let scripts_raw = source.load(SCRIPTS_TEMPLATE).await?;
    let scripts_text = placeholders.render(SCRIPTS_TEMPLATE, &scripts_raw)?;
    let scripts = ScriptEntries::parse(SCRIPTS_TEMPLATE, &scripts_text)?;
    let merged_manifest = merge_scripts(&manifest_path, &manifest, &scripts)?;

    let mut rendered = Vec::new();
    for template in template_files(variant) {
        let raw = source.load(&template.source).await?;
        let content = placeholders.render(&template.source, &raw)?;
        rendered.push(RenderedFile {
            destination: template.destination,
            content,
        });
    }

    rendered.push(RenderedFile {
        destination: PathBuf::from(MANIFEST_FILE),
        content: merged_manifest,
    });

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScaffoldError;
    use crate::variant::{resolve, UserChoices};

    fn project_with_manifest(manifest: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), manifest).unwrap();
        dir
    }

    fn find<'a>(files: &'a [RenderedFile], dest: &str) -> &'a RenderedFile {
        files
            .iter()
            .find(|f| f.destination == Path::new(dest))
            .unwrap_or_else(|| panic!("{} not rendered", dest))
    }

    #[test]
    fn test_stylesheet_destination_matches_extension() {
        let scss = template_files(&resolve(UserChoices::default()));
        assert!(scss
            .iter()
            .any(|f| f.destination == Path::new("src/styles/styles.scss")));

        let styl = template_files(&resolve(UserChoices {
            use_yarn: true,
            use_stylus: true,
        }));
        assert!(styl
            .iter()
            .any(|f| f.destination == Path::new("src/styles/styles.styl")));
        assert!(!styl
            .iter()
            .any(|f| f.destination.to_string_lossy().ends_with(".scss")));
    }

    #[tokio::test]
    async fn test_render_project_with_scss() {
        let dir = project_with_manifest(r#"{"name":"x","version":"1.0.0"}"#);
        let variant = resolve(UserChoices::default());

        let files = render_project(&TemplateSource::Embedded, &variant, dir.path())
            .await
            .unwrap();

        assert_eq!(files.len(), 6);

        let webpack = find(&files, "webpack.config.js");
        assert!(webpack.content.contains(r"test: /\.scss$/"));
        assert!(webpack.content.contains(r#"loader: "sass-loader""#));

        let entry = find(&files, "src/index.js");
        assert!(entry.content.contains(r#"import "./styles/styles.scss""#));

        let styles = find(&files, "src/styles/styles.scss");
        assert!(!styles.content.contains("{{"));

        let manifest: serde_json::Value =
            serde_json::from_str(&find(&files, MANIFEST_FILE).content).unwrap();
        assert_eq!(
            manifest["scripts"]["start"],
            "NODE_ENV=development webpack-dev-server --open"
        );
        assert_eq!(manifest["scripts"]["build"], "NODE_ENV=production webpack");
    }

    #[tokio::test]
    async fn test_render_project_with_stylus() {
        let dir = project_with_manifest(r#"{"name":"x"}"#);
        let variant = resolve(UserChoices {
            use_yarn: true,
            use_stylus: true,
        });

        let files = render_project(&TemplateSource::Embedded, &variant, dir.path())
            .await
            .unwrap();

        let webpack = find(&files, "webpack.config.js");
        assert!(webpack.content.contains(r"test: /\.styl$/"));
        assert!(webpack.content.contains(r#"loader: "stylus-loader""#));
        find(&files, "src/styles/styles.styl");
    }

    #[tokio::test]
    async fn test_render_project_requires_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let variant = resolve(UserChoices::default());

        let err = render_project(&TemplateSource::Embedded, &variant, dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestRead { .. }));
    }

    #[tokio::test]
    async fn test_render_project_reports_template_drift() {
        let project = project_with_manifest("{}");
        let templates = tempfile::tempdir().unwrap();
        for name in [".babelrc", "index.ejs", "index.js", "styles.scss"] {
            std::fs::write(templates.path().join(name), "ok\n").unwrap();
        }
        std::fs::write(
            templates.path().join(SCRIPTS_TEMPLATE),
            r#"{"start": "s", "build": "b"}"#,
        )
        .unwrap();
        std::fs::write(
            templates.path().join("webpack.config.js"),
            "mode: {{buildMode}}\n",
        )
        .unwrap();

        let source = TemplateSource::local(templates.path().to_path_buf());
        let err = render_project(&source, &resolve(UserChoices::default()), project.path())
            .await
            .unwrap_err();
        assert!(
            matches!(err, ScaffoldError::UnknownPlaceholder { ref token, .. } if token == "buildMode")
        );
    }
}
