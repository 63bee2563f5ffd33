//! Command to print or check the language allow-list.

use crate::error::CliError;
use crate::utils::{note, print_lines, GlobalOptions};
use clap::Args;

/// Print the language allow-list, one language per line.
#[derive(Args)]
pub struct LanguagesCommand {
    /// Exit with status 1 unless tests for this language should run
    #[arg(long, value_name = "LANGUAGE")]
    pub check: Option<String>,
}

impl LanguagesCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let allow_list = global.flags.language_allow_list();

        if let Some(language) = self.check {
            if allow_list.allows(&language) {
                return Ok(());
            }
            return Err(CliError::SemanticFailure(format!(
                "Language '{language}' is not in the allow-list ({allow_list})"
            )));
        }

        if allow_list.is_empty() {
            note(global, "No language filter; all languages are allowed");
            return Ok(());
        }

        print_lines(allow_list.iter())
    }
}
