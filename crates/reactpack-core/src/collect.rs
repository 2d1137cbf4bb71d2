//! Gathering the user's toolchain choices

use crate::interrupt::PromptPhase;
use crate::variant::UserChoices;
use std::io;

pub const YARN_PROMPT: &str = "Use yarn instead of npm?";
pub const STYLUS_PROMPT: &str = "Use stylus instead of scss?";

/// Result of asking the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collected {
    /// The user cancelled one of the prompts
    Aborted,
    Choices(UserChoices),
}

/// A source of yes/no answers
///
/// An `Interrupted` error means the user cancelled.
pub trait Confirm {
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool>;
}

/// Answers every question with its default (`--yes` mode)
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptDefaults;

impl Confirm for AcceptDefaults {
    fn confirm(&mut self, _message: &str, default: bool) -> io::Result<bool> {
        Ok(default)
    }
}

/// Marks the prompt phase active for the duration of each question
///
/// A cancelled question leaves the phase marked cancelled.
#[derive(Debug)]
pub struct GuardedPrompt<P> {
    inner: P,
    phase: PromptPhase,
}

impl<P: Confirm> GuardedPrompt<P> {
    pub fn new(inner: P, phase: PromptPhase) -> Self {
        Self { inner, phase }
    }
}

impl<P: Confirm> Confirm for GuardedPrompt<P> {
    fn confirm(&mut self, message: &str, default: bool) -> io::Result<bool> {
        let _prompting = self.phase.enter();
        let answer = self.inner.confirm(message, default);
        if matches!(&answer, Err(e) if e.kind() == io::ErrorKind::Interrupted) {
            self.phase.mark_cancelled();
        }
        answer
    }
}

/// Ask both questions in order, stopping at the first cancellation
pub fn collect_choices<P: Confirm>(prompt: &mut P) -> io::Result<Collected> {
    let use_yarn = match ask(prompt, YARN_PROMPT)? {
        Some(answer) => answer,
        None => return Ok(Collected::Aborted),
    };

    let use_stylus = match ask(prompt, STYLUS_PROMPT)? {
        Some(answer) => answer,
        None => return Ok(Collected::Aborted),
    };

    Ok(Collected::Choices(UserChoices {
        use_yarn,
        use_stylus,
    }))
}

fn ask<P: Confirm>(prompt: &mut P, message: &str) -> io::Result<Option<bool>> {
    match prompt.confirm(message, false) {
        Ok(answer) => Ok(Some(answer)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e),
    }
}
