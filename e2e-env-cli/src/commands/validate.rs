//! Command to validate the flag values.

use crate::error::CliError;
use crate::utils::{print_lines, GlobalOptions};
use clap::Args;
use e2e_env::FlagValidator;

/// Validate the flag values.
#[derive(Args)]
pub struct ValidateCommand {}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        match FlagValidator::validate(&global.flags) {
            Ok(()) => {
                if global.quiet {
                    return Ok(());
                }
                print_lines(["Flags are valid"])
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Flag validation failed".to_string(),
                ))
            }
        }
    }
}
