//! Command to print the cluster the tests run against.

use crate::error::CliError;
use crate::utils::{environment, print_lines, GlobalOptions};
use clap::Args;

/// Print the cluster from `-cluster`, or from the current kubeconfig context.
#[derive(Args)]
pub struct ClusterNameCommand {}

impl ClusterNameCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let cluster = environment(global).cluster_name()?;
        print_lines([cluster])
    }
}
