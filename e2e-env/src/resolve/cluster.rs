//! Parsing of `kubectl` and `gcloud` output.

use crate::{Error, Result};

/// Extracts the cluster name from a kubeconfig context.
///
/// GKE contexts look like `gke_<project>_<location>_<cluster>`; the cluster
/// is everything after the last underscore. Trailing spaces and line breaks
/// are ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedContext`] if the context has no underscore.
///
/// # Examples
///
/// ```
/// use e2e_env::resolve::cluster_from_context;
///
/// let name = cluster_from_context("gke_myproject_us-central1_my-cluster\n").unwrap();
/// assert_eq!(name, "my-cluster");
/// assert!(cluster_from_context("minikube").is_err());
/// ```
pub fn cluster_from_context(output: &str) -> Result<String> {
    let context = output.trim_end_matches(&[' ', '\n', '\r'][..]);

    context
        .rfind('_')
        .map(|idx| context[idx + 1..].to_string())
        .ok_or_else(|| Error::MalformedContext {
            context: context.to_string(),
        })
}

/// Finds the location of `cluster` in `gcloud container clusters list` output.
///
/// Each line is split on whitespace; the first line with at least two
/// fields whose first field equals `cluster` wins.
///
/// # Examples
///
/// ```
/// use e2e_env::resolve::find_cluster_location;
///
/// let listing = "other europe-west1\nmy-cluster us-central1\n";
/// assert_eq!(find_cluster_location(listing, "my-cluster"), Some("us-central1"));
/// assert_eq!(find_cluster_location(listing, "missing"), None);
/// ```
#[must_use]
pub fn find_cluster_location<'a>(listing: &'a str, cluster: &str) -> Option<&'a str> {
    listing.lines().find_map(|line| {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(name), Some(location)) if name == cluster => Some(location),
            _ => None,
        }
    })
}
