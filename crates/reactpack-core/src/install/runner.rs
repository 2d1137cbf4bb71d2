//! Running the install command with a progress ticker
//!
//! The child process and the ticker are separate tasks. The install task signals
//! completion over a oneshot channel; the ticker stops when it sees that signal.

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use std::process::{ExitStatus, Output, Stdio};
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::sync::oneshot;
use tokio::time::{interval, MissedTickBehavior};

/// Interval between progress ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Outcome of an install run
#[derive(Debug, Default)]
pub struct InstallReport {
    /// Exit status, if the process launched
    pub status: Option<ExitStatus>,

    pub stdout: String,

    pub stderr: String,

    /// Error from spawning or waiting on the process
    pub launch_error: Option<String>,

    /// Number of progress ticks printed while waiting
    pub ticks: u64,
}

impl InstallReport {
    pub fn success(&self) -> bool {
        self.launch_error.is_none() && self.status.is_some_and(|s| s.success())
    }

    fn from_output(output: io::Result<Output>) -> Self {
        match output {
            Ok(out) => Self {
                status: Some(out.status),
                stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
                ..Self::default()
            },
            Err(e) => Self {
                launch_error: Some(e.to_string()),
                ..Self::default()
            },
        }
    }

    /// Print captured output, any launch error, then the final `Done.`
    pub fn print(&self) {
        let _ = self.write_to(&mut io::stdout().lock(), &mut io::stderr().lock());
    }

    /// Write the report: stdout, stderr, launch error or exit code, then `Done.`
    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        writeln!(out)?;
        if !self.stdout.trim().is_empty() {
            writeln!(out, "{}", self.stdout.trim_end())?;
        }
        if !self.stderr.trim().is_empty() {
            writeln!(err, "{}", self.stderr.trim_end().yellow())?;
        }
        if let Some(launch_error) = &self.launch_error {
            writeln!(
                err,
                "{} {}",
                "Failed to run install command:".red(),
                launch_error
            )?;
        } else if let Some(status) = self.status.filter(|s| !s.success()) {
            writeln!(
                err,
                "{} {}",
                "Install command exited with code:".red(),
                status.code().unwrap_or(-1)
            )?;
        }
        err.flush()?;
        writeln!(out, "{}", "Done.".green().bold())?;
        out.flush()
    }
}

/// Runs a shell command in a project directory while printing progress ticks
#[derive(Debug, Clone)]
pub struct InstallRunner {
    tick_interval: Duration,
    tick: &'static str,
}

impl Default for InstallRunner {
    fn default() -> Self {
        Self {
            tick_interval: TICK_INTERVAL,
            tick: ".",
        }
    }
}

impl InstallRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Run `command` through `sh -c` in `project_dir`
    ///
    /// Never fails: launch errors and non-zero exits are recorded in the report.
    pub async fn run(&self, command: &str, project_dir: &Path) -> InstallReport {
        println!("{} {}", "Running:".dimmed(), command.yellow());

        let (done_tx, done_rx) = oneshot::channel::<()>();
        let ticker = tokio::spawn(tick_until_done(self.tick_interval, self.tick, done_rx));

        let output = TokioCommand::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        let _ = done_tx.send(());
        let ticks = ticker.await.unwrap_or(0);

        InstallReport {
            ticks,
            ..InstallReport::from_output(output)
        }
    }
}

/// Print one tick per interval until the completion signal arrives
async fn tick_until_done(
    period: Duration,
    tick: &'static str,
    mut done: oneshot::Receiver<()>,
) -> u64 {
    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately
    timer.tick().await;

    let mut count = 0;
    loop {
        tokio::select! {
            _ = &mut done => break,
            _ = timer.tick() => {
                print!("{}", tick);
                let _ = io::stdout().flush();
                count += 1;
            }
        }
    }
    count
}
