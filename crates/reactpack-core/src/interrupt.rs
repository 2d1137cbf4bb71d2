//! Ctrl+C handling around interactive prompts
//!
//! The terminal layer raises SIGINT when it reads `^C` during a prompt, and then reports the
//! keypress as an interrupted read. While a prompt is active the signal handler must leave
//! the process alone so the prompt's cancel path can turn it into an abort. The signal
//! handler runs on its own thread and may observe the flag after the prompt has returned,
//! so a cancelled prompt stays marked for the rest of the run.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Exit code for a Ctrl+C outside of a prompt
pub const INTERRUPT_EXIT_CODE: i32 = 130;

const IDLE: u8 = 0;
const PROMPTING: u8 = 1;
const CANCELLED: u8 = 2;

/// What the signal handler should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptAction {
    /// A prompt is active or was cancelled and reports the abort itself
    Ignore,
    Exit(i32),
}

/// Shared state marking whether a prompt is on screen
#[derive(Debug, Clone, Default)]
pub struct PromptPhase {
    state: Arc<AtomicU8>,
}

impl PromptPhase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a prompt as active until the guard is dropped
    pub fn enter(&self) -> PromptGuard {
        let _ = self
            .state
            .compare_exchange(IDLE, PROMPTING, Ordering::SeqCst, Ordering::SeqCst);
        PromptGuard {
            state: Arc::clone(&self.state),
        }
    }

    /// Record that the user cancelled a prompt; sticky for the rest of the run
    pub fn mark_cancelled(&self) {
        self.state.store(CANCELLED, Ordering::SeqCst);
    }

    pub fn is_active(&self) -> bool {
        self.state.load(Ordering::SeqCst) == PROMPTING
    }

    pub fn is_cancelled(&self) -> bool {
        self.state.load(Ordering::SeqCst) == CANCELLED
    }

    /// Decide how a Ctrl+C received right now should be handled
    pub fn interrupt_action(&self) -> InterruptAction {
        match self.state.load(Ordering::SeqCst) {
            IDLE => InterruptAction::Exit(INTERRUPT_EXIT_CODE),
            _ => InterruptAction::Ignore,
        }
    }
}

/// Returns the phase to idle on drop, unless the prompt was cancelled
#[derive(Debug)]
pub struct PromptGuard {
    state: Arc<AtomicU8>,
}

impl Drop for PromptGuard {
    fn drop(&mut self) {
        let _ = self
            .state
            .compare_exchange(PROMPTING, IDLE, Ordering::SeqCst, Ordering::SeqCst);
    }
}
