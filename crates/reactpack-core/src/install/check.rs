//! Package manager detection

use crate::variant::PackageManager;
use tokio::process::Command;

/// Package manager detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether a binary answers `--version`
pub async fn check_tool(name: &'static str) -> ToolInfo {
    let output = Command::new(name).arg("--version").output().await;

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if the chosen package manager is on PATH
pub async fn check_package_manager(package_manager: PackageManager) -> ToolInfo {
    check_tool(package_manager.binary()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_tool_is_unavailable() {
        let info = check_tool("reactpack-definitely-not-installed").await;
        assert!(!info.available);
        assert!(info.version.is_none());
    }

    #[tokio::test]
    async fn test_check_package_manager_uses_binary_name() {
        let info = check_package_manager(PackageManager::Yarn).await;
        assert_eq!(info.name, "yarn");
        assert_eq!(info.available, info.version.is_some());
    }
}
