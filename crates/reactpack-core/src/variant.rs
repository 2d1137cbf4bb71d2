//! Toolchain variant resolution
//!
//! The user's two yes/no answers select a package manager and a stylesheet language.
//! Each of those carries a fixed set of command fragments and file names.

use std::fmt;

/// Answers gathered from the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserChoices {
    /// Use yarn instead of npm
    pub use_yarn: bool,
    /// Use stylus instead of scss
    pub use_stylus: bool,
}

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
}

impl PackageManager {
    /// Binary name, also used for `--version` detection
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
        }
    }

    pub fn install_command_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm install",
            PackageManager::Yarn => "yarn add",
        }
    }

    /// Flag for runtime dependencies (yarn saves by default)
    pub fn save_flag(&self) -> &'static str {
        match self {
            PackageManager::Npm => "--save",
            PackageManager::Yarn => "",
        }
    }

    pub fn dev_flag(&self) -> &'static str {
        match self {
            PackageManager::Npm => "--save-dev",
            PackageManager::Yarn => "--dev",
        }
    }

    /// Command that runs a package.json script
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {}", script),
            PackageManager::Yarn => format!("yarn {}", script),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Supported stylesheet languages
///
/// Extension and loader live on the same variant so they can never be mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleLanguage {
    Scss,
    Stylus,
}

impl StyleLanguage {
    pub fn file_extension(&self) -> &'static str {
        match self {
            StyleLanguage::Scss => "scss",
            StyleLanguage::Stylus => "styl",
        }
    }

    pub fn loader_name(&self) -> &'static str {
        match self {
            StyleLanguage::Scss => "sass-loader",
            StyleLanguage::Stylus => "stylus-loader",
        }
    }

    /// Space-separated packages the style toolchain needs
    pub fn packages(&self) -> &'static str {
        match self {
            StyleLanguage::Scss => "node-sass sass-loader",
            StyleLanguage::Stylus => "stylus stylus-loader",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StyleLanguage::Scss => "SCSS",
            StyleLanguage::Stylus => "Stylus",
        }
    }
}

impl fmt::Display for StyleLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Resolved toolchain configuration for one scaffold run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantConfig {
    pub package_manager: PackageManager,
    pub style: StyleLanguage,
}

impl VariantConfig {
    pub fn install_command_prefix(&self) -> &'static str {
        self.package_manager.install_command_prefix()
    }

    pub fn save_flag(&self) -> &'static str {
        self.package_manager.save_flag()
    }

    pub fn dev_flag(&self) -> &'static str {
        self.package_manager.dev_flag()
    }

    pub fn style_packages(&self) -> &'static str {
        self.style.packages()
    }

    pub fn style_loader_name(&self) -> &'static str {
        self.style.loader_name()
    }

    pub fn style_file_extension(&self) -> &'static str {
        self.style.file_extension()
    }
}

/// Map the user's answers to a toolchain configuration
pub fn resolve(choices: UserChoices) -> VariantConfig {
    let package_manager = if choices.use_yarn {
        PackageManager::Yarn
    } else {
        PackageManager::Npm
    };

    let style = if choices.use_stylus {
        StyleLanguage::Stylus
    } else {
        StyleLanguage::Scss
    };

    VariantConfig {
        package_manager,
        style,
    }
}
