//! Writing the project directory tree and rendered files

use crate::error::{Result, ScaffoldError};
use crate::templates::RenderedFile;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directories every project gets, relative to the project root
pub const SCAFFOLD_DIRS: &[&str] = &[
    "src",
    "src/assets",
    "src/styles",
    "src/containers",
    "src/components",
];

/// Directories to create and files to write
#[derive(Debug, Clone)]
pub struct ScaffoldPlan {
    pub directories: Vec<PathBuf>,
    pub files: Vec<RenderedFile>,
}

impl ScaffoldPlan {
    /// The fixed directory set plus the given rendered files
    pub fn new(files: Vec<RenderedFile>) -> Self {
        Self {
            directories: SCAFFOLD_DIRS.iter().map(PathBuf::from).collect(),
            files,
        }
    }
}

/// Progress reported while the plan is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    DirectoryCreated(PathBuf),
    DirectoryExists(PathBuf),
    FileWritten(PathBuf),
}

/// Apply the plan under `project_dir`
///
/// Existing directories are left alone; files are overwritten. Stops at the first failure,
/// including a failure to report progress, without undoing earlier steps. Returns the
/// written file paths.
pub async fn write_scaffold<F>(
    plan: &ScaffoldPlan,
    project_dir: &Path,
    mut on_event: F,
) -> Result<Vec<PathBuf>>
where
    F: FnMut(&ScaffoldEvent) -> io::Result<()>,
{
    for dir in &plan.directories {
        let path = project_dir.join(dir);
        if fs::metadata(&path).await.is_ok_and(|m| m.is_dir()) {
            on_event(&ScaffoldEvent::DirectoryExists(path))
                .map_err(ScaffoldError::Progress)?;
            continue;
        }

        fs::create_dir_all(&path)
            .await
            .map_err(|source| ScaffoldError::CreateDir {
                path: path.clone(),
                source,
            })?;
        on_event(&ScaffoldEvent::DirectoryCreated(path))
            .map_err(ScaffoldError::Progress)?;
    }

    let mut written = Vec::new();

    for file in &plan.files {
        let target_path = project_dir.join(&file.destination);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| ScaffoldError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        fs::write(&target_path, &file.content)
            .await
            .map_err(|source| ScaffoldError::WriteFile {
                path: target_path.clone(),
                source,
            })?;
        on_event(&ScaffoldEvent::FileWritten(target_path.clone()))
            .map_err(ScaffoldError::Progress)?;

        written.push(target_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(dest: &str, content: &str) -> RenderedFile {
        RenderedFile {
            destination: PathBuf::from(dest),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_creates_directories_and_files() {
        let dir = tempfile::tempdir().unwrap();
        let plan = ScaffoldPlan::new(vec![
            file("webpack.config.js", "module.exports = {}\n"),
            file("src/styles/styles.scss", "body {}\n"),
        ]);

        let mut events = Vec::new();
        let written = write_scaffold(&plan, dir.path(), |e| {
            events.push(e.clone());
            Ok(())
        })
        .await
        .unwrap();

        for sub in SCAFFOLD_DIRS {
            assert!(dir.path().join(sub).is_dir(), "{} missing", sub);
        }
        assert_eq!(written.len(), 2);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("src/styles/styles.scss")).unwrap(),
            "body {}\n"
        );

        let created = events
            .iter()
            .filter(|e| matches!(e, ScaffoldEvent::DirectoryCreated(_)))
            .count();
        assert_eq!(created, SCAFFOLD_DIRS.len());
        assert_eq!(
            events.last(),
            Some(&ScaffoldEvent::FileWritten(
                dir.path().join("src/styles/styles.scss")
            ))
        );
    }

    #[tokio::test]
    async fn test_directory_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("src/components")).unwrap();
        std::fs::write(dir.path().join("src/components/Button.js"), "keep").unwrap();

        let plan = ScaffoldPlan::new(Vec::new());
        write_scaffold(&plan, dir.path(), |_| Ok(())).await.unwrap();

        let mut events = Vec::new();
        write_scaffold(&plan, dir.path(), |e| {
            events.push(e.clone());
            Ok(())
        })
        .await
        .unwrap();

        assert!(events
            .iter()
            .all(|e| matches!(e, ScaffoldEvent::DirectoryExists(_))));
        assert_eq!(
            std::fs::read_to_string(dir.path().join("src/components/Button.js")).unwrap(),
            "keep"
        );
    }

    #[tokio::test]
    async fn test_overwrites_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("package.json"), "{}").unwrap();

        let plan = ScaffoldPlan::new(vec![file("package.json", "{\n  \"name\": \"x\"\n}\n")]);
        write_scaffold(&plan, dir.path(), |_| Ok(())).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join("package.json")).unwrap(),
            "{\n  \"name\": \"x\"\n}\n"
        );
    }

    #[tokio::test]
    async fn test_stops_at_first_failure_without_rollback() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where a file should go makes the write fail
        std::fs::create_dir_all(dir.path().join("src/index.js")).unwrap();

        let plan = ScaffoldPlan::new(vec![
            file(".babelrc", "{}\n"),
            file("src/index.js", "x"),
            file("webpack.config.js", "y"),
        ]);
        let err = write_scaffold(&plan, dir.path(), |_| Ok(())).await.unwrap_err();

        assert!(matches!(err, ScaffoldError::WriteFile { .. }));
        assert!(dir.path().join(".babelrc").is_file());
        assert!(!dir.path().join("webpack.config.js").exists());
    }

    #[tokio::test]
    async fn test_reporting_failure_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let plan = ScaffoldPlan::new(vec![
            file(".babelrc", "{}\n"),
            file("webpack.config.js", "y"),
        ]);

        let err = write_scaffold(&plan, dir.path(), |event| match event {
            ScaffoldEvent::FileWritten(_) => {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
            }
            _ => Ok(()),
        })
        .await
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::Progress(_)));
        assert!(dir.path().join(".babelrc").is_file());
        assert!(!dir.path().join("webpack.config.js").exists());
    }
}
