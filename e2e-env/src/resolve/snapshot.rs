//! A fully resolved view of the environment.

use serde::Serialize;

use super::LanguageAllowList;
use crate::config::EnvironmentFlags;

/// Every value the e2e tests derive from their flags, resolved at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEnvironment {
    /// Cluster the tests run against.
    pub cluster: String,
    /// Region of that cluster; empty when gcloud does not list it.
    pub cluster_region: String,
    /// Docker repository prefix for test images.
    pub docker_repo: String,
    /// Image tag.
    pub tag: String,
    /// Language filter; empty means all languages.
    pub languages: LanguageAllowList,
    /// Verbose logging requested.
    pub log_verbose: bool,
    /// Metric emission requested.
    pub emit_metrics: bool,
}

impl ResolvedEnvironment {
    /// Takes values straight from the flags without running any command.
    ///
    /// Cluster and region are empty unless given explicitly.
    #[must_use]
    pub fn from_flags(flags: &EnvironmentFlags) -> Self {
        Self {
            cluster: flags.cluster().unwrap_or_default().to_string(),
            cluster_region: flags.cluster_region().unwrap_or_default().to_string(),
            docker_repo: flags.docker_repo().to_string(),
            tag: flags.tag().to_string(),
            languages: flags.language_allow_list(),
            log_verbose: flags.log_verbose(),
            emit_metrics: flags.emit_metrics(),
        }
    }

    /// The values as environment variable assignments, in a fixed order.
    ///
    /// The docker repo is exported as `KO_DOCKER_REPO` so a later run
    /// picks it up as its default.
    #[must_use]
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        vec![
            ("E2E_CLUSTER", self.cluster.clone()),
            ("E2E_CLUSTER_REGION", self.cluster_region.clone()),
            ("KO_DOCKER_REPO", self.docker_repo.clone()),
            ("E2E_TAG", self.tag.clone()),
            ("E2E_LANGUAGES", self.languages.to_string()),
            ("E2E_LOG_VERBOSE", self.log_verbose.to_string()),
            ("E2E_EMIT_METRICS", self.emit_metrics.to_string()),
        ]
    }
}
