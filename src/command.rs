//! Control tool invocation

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// Captured result of one tool run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// `false` on non-zero exit, spawn failure or timeout
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// stdout followed by stderr, for logs and error messages
    pub fn combined(&self) -> String {
        match (self.stdout.trim(), self.stderr.trim()) {
            (out, "") => out.to_string(),
            ("", err) => err.to_string(),
            (out, err) => format!("{}\n{}", out, err),
        }
    }
}

/// Runs external commands
///
/// A failing command is reported through [`CommandOutput::success`], never as a
/// panic or error, so one bad invocation cannot take a caller down.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> CommandOutput;
}

/// Runner backed by real processes
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat commands running longer than `timeout` as failed
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &str, args: &[String]) -> CommandOutput {
        let mut command = Command::new(program);
        command.args(args).kill_on_drop(true);

        let output = match self.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, command.output()).await {
                Ok(output) => output,
                Err(_) => {
                    tracing::error!("{} {} timed out after {:?}", program, args.join(" "), timeout);
                    return CommandOutput::failed(format!("timed out after {:?}", timeout));
                }
            },
            None => command.output().await,
        };

        match output {
            Ok(output) => CommandOutput {
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                success: output.status.success(),
            },
            Err(e) => {
                tracing::error!("Failed to run {}: {}", program, e);
                CommandOutput::failed(e.to_string())
            }
        }
    }
}
