//! The prompt → resolve → render → write pipeline
//!
//! Installation is left to the caller so a front end can decide how to present it
//! (or skip it). Everything here runs sequentially.

use crate::collect::{collect_choices, Collected, Confirm};
use crate::error::Result;
use crate::install::InstallCommand;
use crate::scaffold::{write_scaffold, ScaffoldEvent, ScaffoldPlan};
use crate::templates::{render_project, TemplateSource};
use crate::variant::{resolve, VariantConfig};
use std::path::PathBuf;

/// Where and from what to scaffold
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    /// Project root; must already contain a package.json
    pub project_dir: PathBuf,

    pub template_source: TemplateSource,
}

/// A finished scaffold, ready for dependency installation
#[derive(Debug, Clone)]
pub struct Scaffolded {
    pub variant: VariantConfig,

    /// Files written, in order
    pub written: Vec<PathBuf>,

    pub install: InstallCommand,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    /// The user cancelled; nothing was written
    Aborted,
    Scaffolded(Scaffolded),
}

/// Ask the user, then render and write the project
///
/// Rendering completes before the first write, so a bad package.json or template leaves
/// the project untouched.
pub async fn scaffold_project<P, F>(
    prompt: &mut P,
    request: &ScaffoldRequest,
    on_event: F,
) -> Result<Outcome>
where
    P: Confirm,
    F: FnMut(&ScaffoldEvent) -> std::io::Result<()>,
{
    let choices = match collect_choices(prompt)? {
        Collected::Aborted => return Ok(Outcome::Aborted),
        Collected::Choices(choices) => choices,
    };

    let variant = resolve(choices);

    let files = render_project(&request.template_source, &variant, &request.project_dir).await?;
    let plan = ScaffoldPlan::new(files);
    let written = write_scaffold(&plan, &request.project_dir, on_event).await?;

    Ok(Outcome::Scaffolded(Scaffolded {
        variant,
        written,
        install: InstallCommand::for_variant(&variant),
    }))
}
