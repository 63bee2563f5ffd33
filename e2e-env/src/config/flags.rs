//! The end-to-end test flag set.
//!
//! [`EnvironmentFlags`] is parsed once at startup and then only read. It
//! is a plain value: pass it (or an [`Environment`](crate::Environment)
//! built from it) to whatever needs the settings.

use std::ffi::OsString;

use clap::{ArgAction, Args, Parser};
use serde::Serialize;

use crate::config::args::{normalize_args, parse_bool};
use crate::resolve::LanguageAllowList;
use crate::Result;

/// Environment variable supplying the default docker repository.
pub const DOCKER_REPO_ENV: &str = "KO_DOCKER_REPO";

/// Image tag used when `-tag` is not given.
pub const DEFAULT_TAG: &str = "latest";

/// Long names of every flag in [`EnvironmentFlags`].
pub const FLAG_NAMES: &[&str] = &[
    "cluster",
    "clusterregion",
    "logverbose",
    "emitmetrics",
    "dockerrepo",
    "tag",
    "languages",
];

/// Flags needed to run the e2e tests, with defaults from the user's environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Args)]
pub struct EnvironmentFlags {
    /// Cluster to test against (defaults to the current cluster in kubeconfig)
    #[arg(long = "cluster", value_name = "NAME", global = true)]
    cluster: Option<String>,

    /// GCP region of the cluster (defaults to the region gcloud reports for it)
    #[arg(long = "clusterregion", value_name = "REGION", global = true)]
    cluster_region: Option<String>,

    /// Enable verbose logging
    #[arg(
        long = "logverbose",
        value_name = "BOOL",
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    log_verbose: bool,

    /// Docker repo the test images were uploaded to
    #[arg(
        long = "dockerrepo",
        value_name = "URI",
        global = true,
        env = "KO_DOCKER_REPO",
        default_value = ""
    )]
    docker_repo: String,

    /// Emit metrics such as the latency of resources being realized
    #[arg(
        long = "emitmetrics",
        value_name = "BOOL",
        global = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_bool
    )]
    emit_metrics: bool,

    /// Version tag of the test images
    #[arg(long = "tag", value_name = "TAG", global = true, default_value = DEFAULT_TAG)]
    tag: String,

    /// Comma separated languages to run e2e tests on (empty means all)
    #[arg(long = "languages", value_name = "LIST", global = true, default_value = "")]
    languages: String,
}

#[derive(Parser)]
#[command(name = "e2e", about = "End-to-end test environment flags")]
struct FlagParser {
    #[command(flatten)]
    flags: EnvironmentFlags,
}

impl EnvironmentFlags {
    /// Parses the flags from the process arguments.
    ///
    /// Call this once at startup and hand the result to everything that
    /// needs it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlags`](crate::Error::InvalidFlags) if the
    /// arguments cannot be parsed (this includes `--help`).
    pub fn initialize() -> Result<Self> {
        Self::try_parse_from(std::env::args_os())
    }

    /// Parses the flags from an explicit argument list.
    ///
    /// The first item is the program name. Single-dash long flags
    /// (`-cluster=foo`) are accepted alongside `--cluster foo`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFlags`](crate::Error::InvalidFlags) if the
    /// arguments cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use e2e_env::EnvironmentFlags;
    ///
    /// let flags = EnvironmentFlags::try_parse_from([
    ///     "e2e", "-cluster=prow", "-dockerrepo=gcr.io/test", "-tag=v1",
    /// ]).unwrap();
    /// assert_eq!(flags.cluster(), Some("prow"));
    /// assert_eq!(flags.image_path("helloworld"), "gcr.io/test/helloworld:v1");
    /// ```
    pub fn try_parse_from<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = normalize_args(args, FLAG_NAMES);
        let parsed = FlagParser::try_parse_from(args)?;
        log::debug!("Parsed e2e flags: {:?}", parsed.flags);
        Ok(parsed.flags)
    }

    /// Starts building flags in code, without argument parsing or
    /// environment lookups.
    #[must_use]
    pub fn builder() -> EnvironmentFlagsBuilder {
        EnvironmentFlagsBuilder::new()
    }

    /// Explicit cluster override, if one was given.
    ///
    /// An empty `-cluster=` counts as not given.
    #[must_use]
    pub fn cluster(&self) -> Option<&str> {
        self.cluster.as_deref().filter(|c| !c.is_empty())
    }

    /// Explicit region override, if one was given.
    #[must_use]
    pub fn cluster_region(&self) -> Option<&str> {
        self.cluster_region.as_deref().filter(|r| !r.is_empty())
    }

    /// Whether verbose logging was requested.
    #[must_use]
    pub const fn log_verbose(&self) -> bool {
        self.log_verbose
    }

    /// Docker repository prefix for test images.
    #[must_use]
    pub fn docker_repo(&self) -> &str {
        &self.docker_repo
    }

    /// Whether tests should emit metrics.
    #[must_use]
    pub const fn emit_metrics(&self) -> bool {
        self.emit_metrics
    }

    /// Image tag for test images.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The raw comma-separated language filter.
    #[must_use]
    pub fn languages(&self) -> &str {
        &self.languages
    }

    /// Prefixes an image name with the docker repo and suffixes it with the tag.
    ///
    /// No validation is done; whatever the repo and tag hold ends up in the
    /// reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use e2e_env::EnvironmentFlags;
    ///
    /// let flags = EnvironmentFlags::builder().docker_repo("ko.local").build();
    /// assert_eq!(flags.image_path("autoscale"), "ko.local/autoscale:latest");
    /// ```
    #[must_use]
    pub fn image_path(&self, name: &str) -> String {
        format!("{}/{}:{}", self.docker_repo, name, self.tag)
    }

    /// Parses the language filter into an allow-list.
    #[must_use]
    pub fn language_allow_list(&self) -> LanguageAllowList {
        LanguageAllowList::parse(&self.languages)
    }
}

impl Default for EnvironmentFlags {
    /// Flag defaults, except that the docker repo is left empty rather than
    /// read from the environment.
    fn default() -> Self {
        Self {
            cluster: None,
            cluster_region: None,
            log_verbose: false,
            docker_repo: String::new(),
            emit_metrics: false,
            tag: DEFAULT_TAG.to_string(),
            languages: String::new(),
        }
    }
}

/// Builder for [`EnvironmentFlags`].
///
/// # Examples
///
/// ```
/// use e2e_env::EnvironmentFlags;
///
/// let flags = EnvironmentFlags::builder()
///     .cluster("my-cluster")
///     .docker_repo("gcr.io/knative-tests")
///     .languages("go,java")
///     .build();
///
/// assert_eq!(flags.cluster(), Some("my-cluster"));
/// assert_eq!(flags.tag(), "latest");
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvironmentFlagsBuilder {
    flags: EnvironmentFlags,
}

impl EnvironmentFlagsBuilder {
    /// Creates a builder holding the default flag values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the cluster override.
    #[must_use]
    pub fn cluster(mut self, cluster: impl Into<String>) -> Self {
        self.flags.cluster = Some(cluster.into());
        self
    }

    /// Sets the region override.
    #[must_use]
    pub fn cluster_region(mut self, region: impl Into<String>) -> Self {
        self.flags.cluster_region = Some(region.into());
        self
    }

    /// Sets verbose logging.
    #[must_use]
    pub const fn log_verbose(mut self, enabled: bool) -> Self {
        self.flags.log_verbose = enabled;
        self
    }

    /// Sets the docker repository.
    #[must_use]
    pub fn docker_repo(mut self, repo: impl Into<String>) -> Self {
        self.flags.docker_repo = repo.into();
        self
    }

    /// Sets metric emission.
    #[must_use]
    pub const fn emit_metrics(mut self, enabled: bool) -> Self {
        self.flags.emit_metrics = enabled;
        self
    }

    /// Sets the image tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.flags.tag = tag.into();
        self
    }

    /// Sets the comma-separated language filter.
    #[must_use]
    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.flags.languages = languages.into();
        self
    }

    /// Finishes building.
    #[must_use]
    pub fn build(self) -> EnvironmentFlags {
        self.flags
    }
}
