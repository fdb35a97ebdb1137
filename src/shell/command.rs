//! External command execution.
//!
//! Every scaffold stage is a single blocking process invocation with a
//! fixed argv, so commands run directly (no shell interpolation).

use crate::error::{MkpyError, Result};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing an external command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// First non-empty line of stderr, falling back to stdout.
    ///
    /// Used for compact failure reporting next to a spinner.
    pub fn failure_detail(&self) -> Option<&str> {
        self.stderr
            .lines()
            .chain(self.stdout.lines())
            .find(|l| !l.trim().is_empty())
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<std::path::PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

/// Render a program + args as a single display string.
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

/// Execute an external command.
///
/// Returns `Ok` with the captured result even when the command exits
/// non-zero; only a failure to spawn is an `Err`.
pub fn execute(program: &str, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    if options.capture_stdout {
        cmd.stdout(Stdio::piped());
    } else {
        cmd.stdout(Stdio::inherit());
    }

    if options.capture_stderr {
        cmd.stderr(Stdio::piped());
    } else {
        cmd.stderr(Stdio::inherit());
    }

    cmd.stdin(Stdio::null());

    let output = cmd.output().map_err(|_| MkpyError::CommandFailed {
        command: display_command(program, args),
        code: None,
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}

/// Execute a command with all output captured.
pub fn execute_quiet(program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandResult> {
    let options = CommandOptions {
        cwd: cwd.map(|p| p.to_path_buf()),
        capture_stdout: true,
        capture_stderr: true,
    };
    execute(program, args, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute_quiet("echo", &["hello"], None).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute_quiet("false", &[], None).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn execute_missing_program_is_err() {
        let result = execute_quiet("this-command-does-not-exist-12345", &[], None);
        assert!(result.is_err());
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = execute_quiet("pwd", &[], Some(temp.path())).unwrap();
        assert!(result.success);
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute_quiet("echo", &["fast"], None).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }

    #[test]
    fn display_command_formats() {
        assert_eq!(display_command("git", &["init"]), "git init");
        assert_eq!(display_command("pwd", &[]), "pwd");
    }

    #[test]
    fn failure_detail_prefers_stderr() {
        let result = CommandResult {
            exit_code: Some(1),
            stdout: "out line\n".to_string(),
            stderr: "\nerr line\n".to_string(),
            duration: Duration::from_millis(1),
            success: false,
        };
        assert_eq!(result.failure_detail(), Some("err line"));
    }

    #[test]
    fn failure_detail_falls_back_to_stdout() {
        let result = CommandResult {
            exit_code: Some(1),
            stdout: "out line\n".to_string(),
            stderr: String::new(),
            duration: Duration::from_millis(1),
            success: false,
        };
        assert_eq!(result.failure_detail(), Some("out line"));
    }
}
