//! Command to print image references.

use crate::error::CliError;
use crate::utils::{environment, print_lines, GlobalOptions};
use clap::Args;

/// Print `{dockerrepo}/{name}:{tag}` for each image name.
#[derive(Args)]
pub struct ImagePathCommand {
    /// Image names
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}

impl ImagePathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.names.iter().any(|name| name.trim().is_empty()) {
            return Err(CliError::InvalidArguments(
                "image names must not be empty".to_string(),
            ));
        }

        let env = environment(global);
        print_lines(self.names.iter().map(|name| env.image_path(name)))
    }
}
