//! Blocking child-process execution with captured output.

use std::fmt;
use std::io;
use std::process::Command;
use tracing::debug;

/// Captured text from a child that exited successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationOutput {
    pub stdout: String,
    pub stderr: String,
}

#[derive(Debug)]
pub enum InvocationError {
    /// The program could not be started at all.
    Spawn { command: String, source: io::Error },
    /// The program ran and exited unsuccessfully; `code` is `None` on signal.
    Status {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl InvocationError {
    /// Text suitable for the "Error running command ..." diagnostics.
    pub fn detail(&self) -> String {
        match self {
            InvocationError::Spawn { source, .. } => source.to_string(),
            InvocationError::Status { stderr, code, .. } => {
                let trimmed = stderr.trim();
                if !trimmed.is_empty() {
                    trimmed.to_string()
                } else {
                    match code {
                        Some(code) => format!("exited with status {code}"),
                        None => "terminated by signal".to_string(),
                    }
                }
            }
        }
    }
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvocationError::Spawn { command, source } => {
                write!(f, "failed to execute `{command}`: {source}")
            }
            InvocationError::Status { command, .. } => {
                write!(f, "`{command}` failed: {}", self.detail())
            }
        }
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InvocationError::Spawn { source, .. } => Some(source),
            InvocationError::Status { .. } => None,
        }
    }
}

/// Human-readable command line for logs and error messages.
pub fn describe_command(program: &str, args: &[String]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}

/// Run `program` with `args`, wait for it, and capture stdout/stderr.
///
/// Arguments are handed to the OS directly; no shell is involved.
pub fn run_captured(program: &str, args: &[String]) -> Result<InvocationOutput, InvocationError> {
    let command = describe_command(program, args);
    debug!(%command, "invoking");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| InvocationError::Spawn {
            command: command.clone(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(InvocationError::Status {
            command,
            code: output.status.code(),
            stderr,
        });
    }

    Ok(InvocationOutput { stdout, stderr })
}
