//! Shell detection and export formatting.

use std::env;

use crate::{Error, Result};

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var("ZSH_VERSION").is_ok() {
            return Self::Zsh;
        }
        if env::var("FISH_VERSION").is_ok() {
            return Self::Fish;
        }
        if env::var("PSModulePath").is_ok() {
            return Self::PowerShell;
        }

        if let Ok(shell_path) = env::var("SHELL") {
            if shell_path.contains("zsh") {
                return Self::Zsh;
            } else if shell_path.contains("fish") {
                return Self::Fish;
            } else if shell_path.contains("pwsh") || shell_path.contains("powershell") {
                return Self::PowerShell;
            }
        }

        Self::Bash
    }

    /// Parse a shell type from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - Shell name (case-insensitive): "bash", "zsh", "fish", "powershell", "pwsh"
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// Values that are empty or contain characters a shell would interpret
    /// are single-quoted.
    ///
    /// # Examples
    ///
    /// ```
    /// use e2e_env::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("E2E_TAG", "latest"), "export E2E_TAG=latest");
    /// assert_eq!(ShellType::Bash.format_export("E2E_CLUSTER", ""), "export E2E_CLUSTER=''");
    /// assert_eq!(ShellType::Fish.format_export("E2E_TAG", "v1"), "set -x E2E_TAG v1");
    /// assert_eq!(ShellType::PowerShell.format_export("E2E_TAG", "v1"), "$env:E2E_TAG=\"v1\"");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={}", quote_posix(value)),
            Self::Fish => format!("set -x {var} {}", quote_posix(value)),
            Self::PowerShell => format!("$env:{var}=\"{}\"", value.replace('"', "`\"")),
        }
    }
}

fn quote_posix(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._-/:,@+=".contains(c));

    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(ShellType::from_string("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("BASH").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("sh").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("zsh").unwrap(), ShellType::Zsh);
        assert_eq!(ShellType::from_string("fish").unwrap(), ShellType::Fish);
        assert_eq!(
            ShellType::from_string("pwsh").unwrap(),
            ShellType::PowerShell
        );
        assert!(ShellType::from_string("csh").is_err());
    }

    #[test]
    fn test_format_export_plain_values() {
        assert_eq!(
            ShellType::Bash.format_export("KO_DOCKER_REPO", "gcr.io/knative-tests"),
            "export KO_DOCKER_REPO=gcr.io/knative-tests"
        );
        assert_eq!(
            ShellType::Zsh.format_export("E2E_LANGUAGES", "go,java"),
            "export E2E_LANGUAGES=go,java"
        );
    }

    #[test]
    fn test_format_export_quotes_when_needed() {
        assert_eq!(
            ShellType::Bash.format_export("E2E_CLUSTER", "a b"),
            "export E2E_CLUSTER='a b'"
        );
        assert_eq!(
            ShellType::Bash.format_export("E2E_CLUSTER", "it's"),
            r"export E2E_CLUSTER='it'\''s'"
        );
        assert_eq!(
            ShellType::Fish.format_export("E2E_CLUSTER_REGION", ""),
            "set -x E2E_CLUSTER_REGION ''"
        );
    }

    #[test]
    fn test_format_export_powershell() {
        assert_eq!(
            ShellType::PowerShell.format_export("E2E_TAG", "latest"),
            "$env:E2E_TAG=\"latest\""
        );
    }

    #[test]
    fn test_detect_returns_a_shell() {
        let detected = ShellType::detect();
        assert!(matches!(
            detected,
            ShellType::Bash | ShellType::Zsh | ShellType::Fish | ShellType::PowerShell
        ));
    }
}
