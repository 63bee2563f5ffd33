//! External command execution.
//!
//! Resolution shells out to `kubectl` and `gcloud`. The [`CommandRunner`]
//! trait puts that behind a seam so tests can substitute canned output
//! instead of invoking real tools.

use std::collections::HashMap;
use std::fmt;
use std::process::Command;
use std::sync::Mutex;

use crate::{Error, Result};

/// A program and its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExternalCommand {
    /// Program to execute, looked up on `PATH`.
    pub program: &'static str,
    /// Arguments passed verbatim (no shell involved).
    pub args: &'static [&'static str],
}

impl ExternalCommand {
    /// Creates a command description.
    #[must_use]
    pub const fn new(program: &'static str, args: &'static [&'static str]) -> Self {
        Self { program, args }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Reads the active kubeconfig context.
pub const CURRENT_CONTEXT: ExternalCommand =
    ExternalCommand::new("kubectl", &["config", "current-context"]);

/// Lists GKE clusters as `NAME LOCATION` rows.
pub const CLUSTER_LIST: ExternalCommand = ExternalCommand::new(
    "gcloud",
    &[
        "container",
        "clusters",
        "list",
        "--format=value(NAME,LOCATION)",
    ],
);

/// Trait for running external commands.
///
/// Implementations block until the command finishes and return its
/// standard output.
pub trait CommandRunner {
    /// Runs `command` and returns its standard output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandSpawn`] if the program cannot be started and
    /// [`Error::CommandFailed`] if it exits unsuccessfully.
    fn run(&self, command: &ExternalCommand) -> Result<String>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &ExternalCommand) -> Result<String> {
        (**self).run(command)
    }
}

/// Production runner using [`std::process::Command`].
///
/// No timeout is applied: a hung command hangs the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &ExternalCommand) -> Result<String> {
        log::debug!("Running `{command}`");

        let output = Command::new(command.program)
            .args(command.args)
            .output()
            .map_err(|source| Error::CommandSpawn {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Canned outcome for one command in a [`ScriptedCommandRunner`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum Scripted {
    Output(String),
    Failure { status: Option<i32>, stderr: String },
}

/// Test runner that replays canned output.
///
/// Commands without a script fail as if the program were missing. Every
/// invocation is recorded so tests can check what ran.
///
/// # Examples
///
/// ```
/// use e2e_env::runner::{CommandRunner, ScriptedCommandRunner, CURRENT_CONTEXT};
///
/// let runner = ScriptedCommandRunner::new()
///     .with_output(CURRENT_CONTEXT, "gke_project_us-central1_my-cluster\n");
///
/// let out = runner.run(&CURRENT_CONTEXT).unwrap();
/// assert_eq!(out, "gke_project_us-central1_my-cluster\n");
/// assert_eq!(runner.invocations(), vec![CURRENT_CONTEXT]);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedCommandRunner {
    scripts: HashMap<ExternalCommand, Scripted>,
    invocations: Mutex<Vec<ExternalCommand>>,
}

impl ScriptedCommandRunner {
    /// Creates a runner with no scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `command` succeed with `stdout`.
    #[must_use]
    pub fn with_output(mut self, command: ExternalCommand, stdout: impl Into<String>) -> Self {
        self.scripts.insert(command, Scripted::Output(stdout.into()));
        self
    }

    /// Makes `command` exit with `status` and `stderr`.
    #[must_use]
    pub fn with_failure(
        mut self,
        command: ExternalCommand,
        status: i32,
        stderr: impl Into<String>,
    ) -> Self {
        self.scripts.insert(
            command,
            Scripted::Failure {
                status: Some(status),
                stderr: stderr.into(),
            },
        );
        self
    }

    /// Commands run so far, in order.
    #[must_use]
    pub fn invocations(&self) -> Vec<ExternalCommand> {
        self.invocations
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// How many times `command` ran.
    #[must_use]
    pub fn count(&self, command: &ExternalCommand) -> usize {
        self.invocations().iter().filter(|c| *c == command).count()
    }
}

impl CommandRunner for ScriptedCommandRunner {
    fn run(&self, command: &ExternalCommand) -> Result<String> {
        if let Ok(mut calls) = self.invocations.lock() {
            calls.push(*command);
        }

        match self.scripts.get(command) {
            Some(Scripted::Output(stdout)) => Ok(stdout.clone()),
            Some(Scripted::Failure { status, stderr }) => Err(Error::CommandFailed {
                command: command.to_string(),
                status: *status,
                stderr: stderr.clone(),
            }),
            None => Err(Error::CommandSpawn {
                command: command.to_string(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "no scripted output for command",
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        assert_eq!(
            CURRENT_CONTEXT.to_string(),
            "kubectl config current-context"
        );
        assert_eq!(
            CLUSTER_LIST.to_string(),
            "gcloud container clusters list --format=value(NAME,LOCATION)"
        );
    }

    #[test]
    fn test_scripted_output_and_recording() {
        let runner = ScriptedCommandRunner::new().with_output(CLUSTER_LIST, "a us-east1\n");

        assert_eq!(runner.run(&CLUSTER_LIST).unwrap(), "a us-east1\n");
        assert_eq!(runner.run(&CLUSTER_LIST).unwrap(), "a us-east1\n");
        assert_eq!(runner.count(&CLUSTER_LIST), 2);
        assert_eq!(runner.count(&CURRENT_CONTEXT), 0);
    }

    #[test]
    fn test_scripted_failure() {
        let runner = ScriptedCommandRunner::new().with_failure(CURRENT_CONTEXT, 1, "no context");

        let err = runner.run(&CURRENT_CONTEXT).unwrap_err();
        match err {
            Error::CommandFailed {
                command,
                status,
                stderr,
            } => {
                assert_eq!(command, "kubectl config current-context");
                assert_eq!(status, Some(1));
                assert_eq!(stderr, "no context");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unscripted_command_fails_to_spawn() {
        let runner = ScriptedCommandRunner::new();
        let err = runner.run(&CURRENT_CONTEXT).unwrap_err();
        assert!(matches!(err, Error::CommandSpawn { .. }));
        assert_eq!(runner.invocations(), vec![CURRENT_CONTEXT]);
    }

    #[test]
    fn test_runner_by_reference() {
        let runner = ScriptedCommandRunner::new().with_output(CURRENT_CONTEXT, "x_y");
        let by_ref = &runner;
        assert_eq!(by_ref.run(&CURRENT_CONTEXT).unwrap(), "x_y");
    }

    #[test]
    fn test_system_runner_missing_program() {
        let missing = ExternalCommand::new("e2e-env-no-such-program", &[]);
        let err = SystemCommandRunner.run(&missing).unwrap_err();
        assert!(matches!(err, Error::CommandSpawn { .. }));
        assert!(err.is_fatal());
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_captures_stdout() {
        let echo = ExternalCommand::new("sh", &["-c", "echo gke_p_r_c"]);
        assert_eq!(SystemCommandRunner.run(&echo).unwrap(), "gke_p_r_c\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_code() {
        let failing = ExternalCommand::new("sh", &["-c", "echo oops >&2; exit 3"]);
        let err = SystemCommandRunner.run(&failing).unwrap_err();
        match err {
            Error::CommandFailed { status, stderr, .. } => {
                assert_eq!(status, Some(3));
                assert_eq!(stderr, "oops");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
