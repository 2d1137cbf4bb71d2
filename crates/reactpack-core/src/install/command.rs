//! Install command construction

use crate::variant::VariantConfig;
use std::fmt;

/// Development-only packages: bundler, dev server, loaders and the Babel toolchain.
/// The style toolchain is appended per variant.
pub const DEV_PACKAGES: &[&str] = &[
    "webpack",
    "webpack-cli",
    "webpack-dev-server",
    "html-webpack-plugin",
    "mini-css-extract-plugin",
    "optimize-css-assets-webpack-plugin",
    "copy-webpack-plugin",
    "css-loader",
    "import-glob-loader",
    "url-loader",
    "file-loader",
    "babel-loader",
    "@babel/core",
    "@babel/preset-env",
    "@babel/preset-react",
];

/// Runtime packages: UI framework and state libraries
pub const RUNTIME_PACKAGES: &[&str] = &["react", "react-dom", "redux", "react-redux"];

/// The two-step shell command that installs a project's dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    /// Dev dependency install
    pub dev: String,

    /// Runtime dependency install, run only if `dev` succeeds
    pub runtime: String,
}

impl InstallCommand {
    /// Build the install commands for a resolved variant
    pub fn for_variant(variant: &VariantConfig) -> Self {
        let prefix = variant.install_command_prefix();

        let dev_packages = DEV_PACKAGES
            .iter()
            .copied()
            .chain(variant.style_packages().split_whitespace());
        let dev = join_words(
            [prefix, variant.dev_flag()]
                .into_iter()
                .chain(dev_packages),
        );

        let runtime = join_words(
            [prefix, variant.save_flag()]
                .into_iter()
                .chain(RUNTIME_PACKAGES.iter().copied()),
        );

        Self { dev, runtime }
    }

    /// Full shell command line
    pub fn shell_line(&self) -> String {
        format!("{} && {}", self.dev, self.runtime)
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shell_line())
    }
}

/// Join non-empty words with single spaces
fn join_words<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
