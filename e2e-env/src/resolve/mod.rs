//! Derivation of values the flags do not supply directly.
//!
//! [`Environment`] owns the parsed [`EnvironmentFlags`] and a
//! [`CommandRunner`]. Cluster name and region fall back to asking
//! `kubectl` and `gcloud` when not given on the command line.

mod cluster;
mod languages;
mod snapshot;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use cluster::{cluster_from_context, find_cluster_location};
pub use languages::LanguageAllowList;
pub use snapshot::ResolvedEnvironment;

use crate::config::EnvironmentFlags;
use crate::runner::{CommandRunner, SystemCommandRunner, CLUSTER_LIST, CURRENT_CONTEXT};
use crate::Result;

/// Resolver for the e2e test environment.
///
/// # Examples
///
/// ```
/// use e2e_env::runner::{ScriptedCommandRunner, CURRENT_CONTEXT};
/// use e2e_env::{Environment, EnvironmentFlags};
///
/// let flags = EnvironmentFlags::builder().docker_repo("gcr.io/tests").build();
/// let runner = ScriptedCommandRunner::new()
///     .with_output(CURRENT_CONTEXT, "gke_proj_us-central1_prow\n");
/// let env = Environment::with_runner(flags, runner);
///
/// assert_eq!(env.cluster_name().unwrap(), "prow");
/// assert_eq!(env.image_path("helloworld"), "gcr.io/tests/helloworld:latest");
/// ```
#[derive(Debug)]
pub struct Environment<R = SystemCommandRunner> {
    flags: EnvironmentFlags,
    runner: R,
}

impl Environment<SystemCommandRunner> {
    /// Creates a resolver that runs the real `kubectl` and `gcloud`.
    #[must_use]
    pub const fn new(flags: EnvironmentFlags) -> Self {
        Self {
            flags,
            runner: SystemCommandRunner,
        }
    }
}

impl<R: CommandRunner> Environment<R> {
    /// Creates a resolver with a custom command runner.
    #[must_use]
    pub const fn with_runner(flags: EnvironmentFlags, runner: R) -> Self {
        Self { flags, runner }
    }

    /// The flags this resolver was built from.
    #[must_use]
    pub const fn flags(&self) -> &EnvironmentFlags {
        &self.flags
    }

    /// The command runner in use.
    #[must_use]
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Builds `{docker_repo}/{name}:{tag}`.
    #[must_use]
    pub fn image_path(&self, name: &str) -> String {
        self.flags.image_path(name)
    }

    /// Returns the cluster from `-cluster`, or from the current kubeconfig context.
    ///
    /// # Errors
    ///
    /// Returns an error if `kubectl` fails or its context has no underscore.
    pub fn cluster_name(&self) -> Result<String> {
        if let Some(cluster) = self.flags.cluster() {
            return Ok(cluster.to_string());
        }

        let output = self.runner.run(&CURRENT_CONTEXT)?;
        let cluster = cluster_from_context(&output)?;
        log::debug!("Derived cluster name '{cluster}' from kubectl context");
        Ok(cluster)
    }

    /// Returns the region from `-clusterregion`, or the location gcloud
    /// lists for [`cluster_name`](Self::cluster_name).
    ///
    /// When gcloud lists no matching cluster the result is an empty string,
    /// not an error. The cluster name is only derived if some listing row
    /// carries a location.
    ///
    /// # Errors
    ///
    /// Returns an error if `gcloud` fails, or if the listing has a row with
    /// a location and the cluster name cannot be resolved.
    pub fn cluster_region(&self) -> Result<String> {
        self.region_for(|| self.cluster_name())
    }

    fn region_for<F>(&self, cluster_name: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        if let Some(region) = self.flags.cluster_region() {
            return Ok(region.to_string());
        }

        let listing = self.runner.run(&CLUSTER_LIST)?;
        if !has_located_rows(&listing) {
            log::debug!("gcloud listed no cluster with a location");
            return Ok(String::new());
        }

        let cluster = cluster_name()?;
        match find_cluster_location(&listing, &cluster) {
            Some(region) => {
                log::debug!("Derived region '{region}' for cluster '{cluster}'");
                Ok(region.to_string())
            }
            None => {
                log::debug!("Cluster '{cluster}' not found in gcloud listing");
                Ok(String::new())
            }
        }
    }

    /// Returns the language allow-list. Empty means every language.
    #[must_use]
    pub fn languages(&self) -> LanguageAllowList {
        self.flags.language_allow_list()
    }

    /// Resolves every derived value at once.
    ///
    /// The cluster name is derived once and reused for the region lookup,
    /// so both values describe the same cluster.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`cluster_name`](Self::cluster_name) and
    /// [`cluster_region`](Self::cluster_region).
    pub fn resolve(&self) -> Result<ResolvedEnvironment> {
        let cluster = self.cluster_name()?;
        let cluster_region = self.region_for(|| Ok(cluster.clone()))?;

        Ok(ResolvedEnvironment {
            cluster,
            cluster_region,
            docker_repo: self.flags.docker_repo().to_string(),
            tag: self.flags.tag().to_string(),
            languages: self.languages(),
            log_verbose: self.flags.log_verbose(),
            emit_metrics: self.flags.emit_metrics(),
        })
    }
}

fn has_located_rows(listing: &str) -> bool {
    listing
        .lines()
        .any(|line| line.split_whitespace().nth(1).is_some())
}
