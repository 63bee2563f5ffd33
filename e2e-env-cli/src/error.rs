//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps every failure to the exit
//! code the process terminates with.

use e2e_env::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// Writing command output failed.
    Io(std::io::Error),

    /// Semantic failure (e.g., validation failed) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (validation failed, language filtered out)
    /// - 2: External command could not be run or failed
    /// - 3: Malformed external command output
    /// - 4: Invalid arguments
    /// - 5: Output could not be written
    /// - 6: Other library error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::Validation { .. } => 1,
                LibError::CommandSpawn { .. } | LibError::CommandFailed { .. } => 2,
                LibError::MalformedContext { .. } => 3,
                LibError::InvalidFlags(_) => 4,
                _ => 6,
            },
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let spawn = CliError::from(LibError::CommandSpawn {
            command: "kubectl config current-context".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        });
        assert_eq!(spawn.exit_code(), 2);

        let failed = CliError::from(LibError::CommandFailed {
            command: "gcloud".into(),
            status: Some(1),
            stderr: String::new(),
        });
        assert_eq!(failed.exit_code(), 2);

        let malformed = CliError::from(LibError::MalformedContext {
            context: "minikube".into(),
        });
        assert_eq!(malformed.exit_code(), 3);

        let validation = CliError::from(LibError::Validation {
            field: "tag".into(),
            message: "Cannot be empty".into(),
        });
        assert_eq!(validation.exit_code(), 1);

        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(CliError::SemanticFailure("x".into()).exit_code(), 1);
        assert_eq!(CliError::from(std::io::Error::other("x")).exit_code(), 5);
    }

    #[test]
    fn test_display_passes_library_message_through() {
        let err = CliError::from(LibError::MalformedContext {
            context: "minikube".into(),
        });
        assert_eq!(
            err.to_string(),
            "there should be at least 1 underscore in kubectl context 'minikube'"
        );
    }
}
