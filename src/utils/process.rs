//! External tool invocation.
//!
//! Compression and delivery shell out to `gzip` and `scp`. Both go through the
//! [`ProcessRunner`] trait so tests can record invocations instead of running
//! them.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    /// Program name, looked up on `PATH`
    pub program: String,
    /// Arguments in order
    pub args: Vec<OsString>,
}

impl ToolCommand {
    /// A command with no arguments yet.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Outcome of a finished tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Whether the tool exited with status zero
    pub success: bool,
    /// Exit code, `None` if the tool was killed by a signal
    pub code: Option<i32>,
    /// stdout followed by stderr
    pub combined_output: String,
}

impl ToolOutput {
    /// Human-readable exit status.
    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit status: {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external tools to completion.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Runs `command` and waits for it to exit.
    ///
    /// Returns `Err` only if the process could not be started; a non-zero exit
    /// is reported through [`ToolOutput::success`].
    async fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput>;
}

/// Runs tools as child processes of this one.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(&self, command: &ToolCommand) -> io::Result<ToolOutput> {
        debug!("Running {command}");
        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .await?;

        let mut combined_output = String::from_utf8_lossy(&output.stdout).into_owned();
        combined_output.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ToolOutput {
            success: output.status.success(),
            code: output.status.code(),
            combined_output,
        })
    }
}

/// Failure of a single tool run, ready to be wrapped by the calling stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFailure {
    /// Exit status or spawn error
    pub reason: String,
    /// Combined tool output, empty if it never started
    pub output: String,
}

/// Runs `command` and turns spawn errors and non-zero exits into [`ToolFailure`].
pub async fn run_tool(
    runner: &dyn ProcessRunner,
    command: &ToolCommand,
) -> Result<(), ToolFailure> {
    match runner.run(command).await {
        Ok(output) if output.success => Ok(()),
        Ok(output) => Err(ToolFailure {
            reason: output.status_description(),
            output: output.combined_output,
        }),
        Err(e) => Err(ToolFailure {
            reason: format!("could not run {}: {e}", command.program),
            output: String::new(),
        }),
    }
}
