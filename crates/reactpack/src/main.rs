//! reactpack - scaffold a React + webpack project into an existing package

use anyhow::Result;
use clap::Parser;
use reactpack_core::tui::CreateArgs;
use reactpack_core::{InterruptAction, PromptPhase};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reactpack")]
#[command(about = "Scaffold a React + webpack front-end into the current npm package")]
#[command(version)]
pub struct Args {
    /// Project directory containing package.json (defaults to the current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir", env = "REACTPACK_TEMPLATE_DIR")]
    pub template_dir: Option<PathBuf>,

    /// Write the project files but do not install dependencies
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Accept the default answers (npm, scss) without prompting
    #[arg(short, long)]
    pub yes: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            template_dir: args.template_dir,
            directory: args.directory,
            skip_install: args.skip_install,
            yes: args.yes,
            prompt_phase: PromptPhase::new(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    let create_args: CreateArgs = Args::parse().into();

    // Handle Ctrl+C gracefully; inside a prompt the prompt reports the cancel itself
    let phase = create_args.prompt_phase.clone();
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        if let InterruptAction::Exit(code) = phase.interrupt_action() {
            std::process::exit(code);
        }
    })
    .ok();

    let result = reactpack_core::run(create_args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_interactive() {
        let args: CreateArgs = Args::try_parse_from(["reactpack"]).unwrap().into();
        assert!(!args.yes);
        assert!(!args.skip_install);
        assert!(args.directory.is_none());
        assert!(!args.prompt_phase.is_active());
    }

    #[test]
    fn test_flags_map_to_create_args() {
        let args: CreateArgs = Args::try_parse_from([
            "reactpack",
            "--directory",
            "web",
            "--template-dir",
            "tpl",
            "--skip-install",
            "-y",
        ])
        .unwrap()
        .into();

        assert_eq!(args.directory, Some(PathBuf::from("web")));
        assert_eq!(args.template_dir, Some(PathBuf::from("tpl")));
        assert!(args.skip_install);
        assert!(args.yes);
    }
}
