//! Command to print the region of the cluster.

use crate::error::CliError;
use crate::utils::{environment, note, print_lines, GlobalOptions};
use clap::Args;

/// Print the region from `-clusterregion`, or the one gcloud lists.
#[derive(Args)]
pub struct ClusterRegionCommand {}

impl ClusterRegionCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let region = environment(global).cluster_region()?;

        // Unlisted clusters resolve to an empty region
        if region.is_empty() {
            note(global, "Cluster not found in gcloud listing; region unknown");
        }
        print_lines([region])
    }
}
