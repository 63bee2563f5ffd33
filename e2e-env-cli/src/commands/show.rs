//! Command to show the resolved environment.

use crate::error::CliError;
use crate::utils::{environment, print_lines, GlobalOptions};
use clap::{Args, ValueEnum};
use e2e_env::output::{OutputFormat, ShellType};
use e2e_env::ResolvedEnvironment;

/// Show the resolved environment.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormatArg,

    /// Shell type for export format (auto-detect if not specified)
    #[arg(long)]
    pub shell: Option<String>,

    /// Print flag values only, without running kubectl or gcloud
    #[arg(long)]
    pub raw: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormatArg {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Dotenv (.env file) format
    Dotenv,
    /// Shell-specific export statements
    Export,
}

impl OutputFormatArg {
    /// Convert to `OutputFormat`, detecting shell type if needed.
    pub fn to_output_format(self, shell_arg: Option<&str>) -> Result<OutputFormat, CliError> {
        match self {
            Self::Export => {
                let shell = match shell_arg {
                    Some(shell_str) => ShellType::from_string(shell_str)?,
                    None => ShellType::detect(),
                };
                Ok(OutputFormat::Export(shell))
            }
            Self::Json => Ok(OutputFormat::Json),
            Self::Yaml => Ok(OutputFormat::Yaml),
            Self::Dotenv => Ok(OutputFormat::Dotenv),
            Self::Human => Ok(OutputFormat::Human),
        }
    }
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Resolve the format first so a bad --shell fails before any command runs
        let output_format = self.format.to_output_format(self.shell.as_deref())?;

        let resolved = if self.raw {
            ResolvedEnvironment::from_flags(&global.flags)
        } else {
            environment(global).resolve()?
        };

        let formatted = output_format.create_formatter().format(&resolved)?;
        print_lines([formatted])
    }
}
