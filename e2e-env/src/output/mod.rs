//! Output formatting for resolved environments.
//!
//! Shell test drivers consume the resolved values as export statements or
//! dotenv lines; tooling can read JSON or YAML.

mod formatters;
mod shell;

use crate::resolve::ResolvedEnvironment;
use crate::Result;

pub use formatters::{
    DotenvFormatter, ExportFormatter, HumanFormatter, JsonFormatter, YamlFormatter,
};
pub use shell::ShellType;

/// Trait for formatting a resolved environment.
pub trait OutputFormatter {
    /// Format `env` into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, env: &ResolvedEnvironment) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell-specific export statements.
    Export(ShellType),
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Dotenv (.env file) format.
    Dotenv,
    /// Human-readable format.
    Human,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Dotenv => Box::new(DotenvFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnvironmentFlags;

    #[test]
    fn test_create_formatter_for_every_format() {
        let env = ResolvedEnvironment::from_flags(
            &EnvironmentFlags::builder()
                .cluster("prow")
                .docker_repo("gcr.io/tests")
                .build(),
        );

        let formats = [
            OutputFormat::Export(ShellType::Bash),
            OutputFormat::Json,
            OutputFormat::Yaml,
            OutputFormat::Dotenv,
            OutputFormat::Human,
        ];

        for format in formats {
            let output = format.create_formatter().format(&env).unwrap();
            assert!(output.contains("prow"), "{format:?}: {output}");
        }
    }
}
