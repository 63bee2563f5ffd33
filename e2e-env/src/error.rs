//! Error types for the e2e-env library.
//!
//! Every failure the resolver can hit is surfaced as a variant of [`Error`]
//! instead of terminating the process. The caller (usually a bootstrap
//! routine or the CLI) decides whether to exit.

use thiserror::Error;

/// Result type alias for operations that may fail with an e2e-env error.
///
/// # Examples
///
/// ```
/// use e2e_env::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("my-cluster".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the e2e-env library.
#[derive(Debug, Error)]
pub enum Error {
    /// An external command could not be started at all.
    #[error("failed to run `{command}`: {source}")]
    CommandSpawn {
        /// The command line that was attempted.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// An external command exited unsuccessfully.
    #[error("`{command}` failed ({}): {stderr}", describe_status(*status))]
    CommandFailed {
        /// The command line that failed.
        command: String,
        /// Exit code, if the process exited normally.
        status: Option<i32>,
        /// Trimmed standard error of the process.
        stderr: String,
    },

    /// The kubectl context did not follow the `<prefix>_<cluster>` convention.
    #[error("there should be at least 1 underscore in kubectl context '{context}'")]
    MalformedContext {
        /// The context string as returned by kubectl.
        context: String,
    },

    /// Command-line flags could not be parsed.
    #[error("invalid flags: {0}")]
    InvalidFlags(#[from] clap::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Returns true for errors that mean the environment could not be
    /// resolved and the run should not continue.
    ///
    /// # Examples
    ///
    /// ```
    /// use e2e_env::Error;
    ///
    /// let err = Error::MalformedContext { context: "minikube".into() };
    /// assert!(err.is_fatal());
    /// ```
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::CommandSpawn { .. }
                | Self::CommandFailed { .. }
                | Self::MalformedContext { .. }
                | Self::InvalidFlags(_)
        )
    }
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
