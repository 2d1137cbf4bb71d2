//! reactpack core - scaffolding for React + webpack front-end projects
//!
//! The pipeline runs once per invocation, strictly forward:
//!
//! - **Collect** - two yes/no answers (package manager, stylesheet language)
//! - **Resolve** - answers become a [`VariantConfig`]
//! - **Render** - bundled templates get their placeholders filled; package.json gets its
//!   `start` and `build` scripts
//! - **Write** - the `src/` tree is created and rendered files are written
//! - **Install** - one shell command installs dev and runtime dependencies while a ticker
//!   shows progress
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use reactpack_core::{collect::AcceptDefaults, scaffold_project, Outcome, ScaffoldRequest};
//!
//! let request = ScaffoldRequest {
//!     project_dir: "my-app".into(),
//!     template_source: Default::default(),
//! };
//! if let Outcome::Scaffolded(done) = scaffold_project(&mut AcceptDefaults, &request, |_| Ok(())).await? {
//!     println!("{}", done.install);
//! }
//! ```

pub mod collect;
pub mod error;
pub mod install;
pub mod interrupt;
pub mod project;
pub mod scaffold;
pub mod templates;
pub mod variant;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use collect::{Collected, Confirm};
pub use error::ScaffoldError;
pub use install::{InstallCommand, InstallReport, InstallRunner};
pub use interrupt::{InterruptAction, PromptPhase};
pub use project::{scaffold_project, Outcome, ScaffoldRequest, Scaffolded};
pub use templates::TemplateSource;
pub use variant::{resolve, PackageManager, StyleLanguage, UserChoices, VariantConfig};

#[cfg(feature = "tui")]
pub use tui::run;
