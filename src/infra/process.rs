//! External process execution
//!
//! Runs a complete command line through `sh -c` and captures its output.
//! The [`CommandRunner`] trait is the seam between building a command line
//! and executing it; [`ShellRunner`] is the only implementation that
//! touches the system.

use std::process::{Command, Stdio};

use crate::config::defaults::ZYPPER_LOCALE;
use crate::error::ConnectError;

/// Captured result of one command invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Exit status; `-1` when the process was killed by a signal
    pub exit_code: i32,
}

impl CommandOutput {
    /// Successful output with the given stdout
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    /// Failed output with the given exit status and stderr
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            exit_code,
        }
    }
}

/// Synchronous "capture output" primitive
pub trait CommandRunner {
    /// Run `command_line` to completion, capturing stdout, stderr and status
    ///
    /// Returns `ConnectError::ToolInvocation` when the command cannot be run
    /// at all. A non-zero exit status is not an error at this level.
    fn capture(&self, command_line: &str) -> Result<CommandOutput, ConnectError>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn capture(&self, command_line: &str) -> Result<CommandOutput, ConnectError> {
        (**self).capture(command_line)
    }
}

/// `sh` exit status for a command that was found but is not executable
const SHELL_EXIT_NOT_EXECUTABLE: i32 = 126;

/// `sh` exit status for a command that was not found
const SHELL_EXIT_NOT_FOUND: i32 = 127;

/// Runs command lines with `/bin/sh`
#[derive(Debug, Clone)]
pub struct ShellRunner {
    /// Shell used to interpret the command line
    shell: String,
    /// Program that must be on `PATH` before anything is spawned
    program: Option<String>,
}

impl ShellRunner {
    /// Create a runner using `/bin/sh`
    pub fn new() -> Self {
        Self::with_shell("/bin/sh")
    }

    /// Create a runner using a specific shell
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            program: None,
        }
    }

    /// Require `program` to resolve on `PATH` before every invocation
    #[must_use]
    pub fn requiring(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    fn ensure_program(&self, command_line: &str) -> Result<(), ConnectError> {
        let Some(program) = self.program.as_deref() else {
            return Ok(());
        };
        match which::which(program) {
            Ok(path) => {
                tracing::trace!("Resolved {program} to {}", path.display());
                Ok(())
            }
            Err(e) => Err(ConnectError::ToolInvocation {
                command: command_line.to_string(),
                error: format!("{program}: {e}"),
            }),
        }
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ShellRunner {
    fn capture(&self, command_line: &str) -> Result<CommandOutput, ConnectError> {
        self.ensure_program(command_line)?;
        tracing::debug!("Executing: {command_line}");

        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command_line)
            .env("LC_ALL", ZYPPER_LOCALE)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ConnectError::ToolInvocation {
                command: command_line.to_string(),
                error: e.to_string(),
            })?;

        let exit_code = output.status.code().unwrap_or(-1);
        tracing::debug!("Exit status {exit_code}: {command_line}");

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if matches!(exit_code, SHELL_EXIT_NOT_EXECUTABLE | SHELL_EXIT_NOT_FOUND) {
            return Err(ConnectError::ToolInvocation {
                command: command_line.to_string(),
                error: stderr.trim().to_string(),
            });
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
            exit_code,
        })
    }
}
