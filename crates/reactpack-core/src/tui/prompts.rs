//! Charm-style CLI prompts using cliclack

use crate::collect::{AcceptDefaults, Confirm, GuardedPrompt};
use crate::install::{check_package_manager, InstallRunner};
use crate::interrupt::PromptPhase;
use crate::project::{scaffold_project, Outcome, ScaffoldRequest, Scaffolded};
use crate::scaffold::ScaffoldEvent;
use crate::templates::TemplateSource;
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for a scaffold run
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Local directory to use for templates instead of the bundled ones
    pub template_dir: Option<PathBuf>,

    /// Project directory (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Skip dependency installation
    pub skip_install: bool,

    /// Accept the default answers without prompting
    pub yes: bool,

    /// Shared with the Ctrl+C handler so it stays out of the way while a prompt is open
    pub prompt_phase: PromptPhase,
}

/// cliclack-backed confirm prompts
struct Cliclack;

impl Confirm for Cliclack {
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(default).interact()
    }
}

/// Run the scaffolder with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("reactpack")?;

    let project_dir = resolve_directory(&args)?;
    let template_source = TemplateSource::from_option(args.template_dir.clone());
    if matches!(template_source, TemplateSource::Local(_)) {
        cliclack::log::info(format!("Using {}", template_source.describe()))?;
    }

    let request = ScaffoldRequest {
        project_dir: project_dir.clone(),
        template_source,
    };

    let outcome = if args.yes {
        scaffold_project(&mut AcceptDefaults, &request, log_event).await
    } else {
        let mut prompt = GuardedPrompt::new(Cliclack, args.prompt_phase.clone());
        scaffold_project(&mut prompt, &request, log_event).await
    };
    let outcome = outcome.context("Failed to scaffold project")?;

    let scaffolded = match outcome {
        Outcome::Aborted => {
            cliclack::outro_cancel("Process aborted.")?;
            return Ok(());
        }
        Outcome::Scaffolded(scaffolded) => scaffolded,
    };

    cliclack::log::success(format!(
        "Created {} files in {} ({} + {})",
        scaffolded.written.len(),
        project_dir.display(),
        scaffolded.variant.package_manager,
        scaffolded.variant.style
    ))?;

    if args.skip_install {
        cliclack::log::info(format!(
            "Skipping install. Run this to install dependencies:\n{}",
            scaffolded.install
        ))?;
    } else {
        install_dependencies(&scaffolded, &project_dir).await?;
    }

    print_next_steps(&scaffolded, &project_dir)?;

    Ok(())
}

fn resolve_directory(args: &CreateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project directory does not exist: {}", path.display());
    }

    Ok(path)
}

fn log_event(event: &ScaffoldEvent) -> io::Result<()> {
    match event {
        ScaffoldEvent::DirectoryCreated(path) => {
            cliclack::log::step(format!("Created directory {}", path.display()))
        }
        ScaffoldEvent::DirectoryExists(path) => {
            cliclack::log::remark(format!("Directory exists {}", path.display()))
        }
        ScaffoldEvent::FileWritten(path) => {
            cliclack::log::step(format!("Wrote {}", path.display()))
        }
    }
}

async fn install_dependencies(scaffolded: &Scaffolded, project_dir: &Path) -> Result<()> {
    let package_manager = scaffolded.variant.package_manager;
    let tool = check_package_manager(package_manager).await;

    if tool.available {
        cliclack::log::success(format!(
            "{} installed ({})",
            tool.name,
            tool.version.as_deref().unwrap_or("unknown")
        ))?;
    } else {
        cliclack::log::warning(format!(
            "{} was not found on PATH; the install will likely fail",
            tool.name
        ))?;
    }

    cliclack::log::info("Installing dependencies. This may take a while...")?;

    let report = InstallRunner::new()
        .run(&scaffolded.install.shell_line(), project_dir)
        .await;
    report.print();

    if !report.success() {
        cliclack::log::warning(format!(
            "Dependency install did not finish. The project files are in place; retry with:\n{}",
            scaffolded.install
        ))?;
    }

    Ok(())
}

fn print_next_steps(scaffolded: &Scaffolded, project_dir: &Path) -> Result<()> {
    let package_manager = scaffolded.variant.package_manager;
    let mut steps = Vec::new();

    let current = std::env::current_dir().ok();
    if current.as_deref() != Some(project_dir) {
        steps.push(format!("cd {}", project_dir.display()));
    }
    steps.push(package_manager.run_script("start"));
    steps.push(format!("{} (production bundle)", package_manager.run_script("build")));

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
