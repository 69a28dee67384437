//! Async executor for external command-line tools
//!
//! Both maintenance tools are thin wrappers over external executables
//! (VBoxManage, pip). This module provides the one shared primitive: run a
//! program with a literal argument vector, either streaming its output to the
//! console or capturing stdout, and fail with the exit code and captured
//! stderr on a nonzero status.
//!
//! Execution goes through the [`CommandRunner`] trait so tests can substitute
//! a recording fake (see [`crate::testing`]).

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, error};

/// Errors that can occur when executing an external command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program is not installed or not in PATH
    #[error("{program} not found - ensure it is installed and in PATH")]
    NotFound {
        /// Program that could not be located
        program: String,
    },

    /// Failed to spawn or wait on the child process
    #[error("failed to spawn process: {0}")]
    Spawn(#[from] std::io::Error),

    /// The command exited with a nonzero status
    #[error("{program} failed (exit code {code}){}", stderr_suffix(.stderr))]
    Failed {
        /// Program that was invoked
        program: String,
        /// Exit code from the process (-1 if terminated by signal)
        code: i32,
        /// Captured standard error, when the invocation captured output
        stderr: Option<String>,
    },
}

fn stderr_suffix(stderr: &Option<String>) -> String {
    match stderr {
        Some(text) if !text.trim().is_empty() => format!(": {}", text.trim()),
        _ => String::new(),
    }
}

/// Result type alias for command execution
pub type CommandResult<T> = Result<T, CommandError>;

/// Abstract execution of external programs
///
/// Arguments are always passed as a literal vector; nothing is ever
/// interpreted by a shell. Capture and no-capture are distinct operations
/// with distinct return types rather than a flag selecting between them.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command with the child's stdout/stderr inherited from this
    /// process, so the tool's own output streams to the console.
    ///
    /// # Errors
    ///
    /// Fails if the process cannot be spawned or exits nonzero. Because
    /// stderr is not captured, the error carries no stderr text.
    async fn run(&self, program: &Path, args: &[String]) -> CommandResult<()>;

    /// Run a command capturing stdout.
    ///
    /// Returns stdout decoded as UTF-8 with `\r\n` line endings normalized
    /// to `\n`. On a nonzero exit the captured stderr is attached to the
    /// error.
    async fn run_capturing(&self, program: &Path, args: &[String]) -> CommandResult<String>;

    /// Run a command without treating a nonzero exit as failure.
    ///
    /// Used for commands whose exit status is informational (e.g. the `py`
    /// launcher's `-0` version listing). Returns the exit code.
    async fn run_unchecked(&self, program: &Path, args: &[String]) -> CommandResult<i32>;
}

/// Production runner backed by `tokio::process::Command`
#[derive(Debug, Default, Clone)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

fn spawn_error(program: &Path, err: std::io::Error) -> CommandError {
    if err.kind() == std::io::ErrorKind::NotFound {
        CommandError::NotFound {
            program: program.display().to_string(),
        }
    } else {
        CommandError::Spawn(err)
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, program: &Path, args: &[String]) -> CommandResult<()> {
        debug!("executing: {} {}", program.display(), args.join(" "));

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| spawn_error(program, e))?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            error!(code, program = %program.display(), "command failed");
            return Err(CommandError::Failed {
                program: program.display().to_string(),
                code,
                stderr: None,
            });
        }

        Ok(())
    }

    async fn run_capturing(&self, program: &Path, args: &[String]) -> CommandResult<String> {
        debug!("executing (captured): {} {}", program.display(), args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| spawn_error(program, e))?
            .wait_with_output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            let code = output.status.code().unwrap_or(-1);
            error!(code, program = %program.display(), stderr = %stderr, "command failed");
            return Err(CommandError::Failed {
                program: program.display().to_string(),
                code,
                stderr: Some(stderr),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).replace("\r\n", "\n"))
    }

    async fn run_unchecked(&self, program: &Path, args: &[String]) -> CommandResult<i32> {
        debug!("executing (unchecked): {} {}", program.display(), args.join(" "));

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|e| spawn_error(program, e))?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Convenience for building an owned argument vector from string literals
pub fn args<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}
