//! Dependency installation
//!
//! This module provides:
//! - Install command construction for a resolved variant
//! - Package manager detection
//! - The async runner with its progress ticker

pub mod check;
pub mod command;
pub mod runner;

pub use check::{check_package_manager, ToolInfo};
pub use command::InstallCommand;
pub use runner::{InstallReport, InstallRunner};
