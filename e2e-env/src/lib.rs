#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # e2e-env
//!
//! Settings for end-to-end test runs: command-line flags, the cluster and
//! region the tests target, and container image references.
//!
//! ## Core Types
//!
//! - [`EnvironmentFlags`]: the parsed flag set, built once at startup
//! - [`Environment`]: derives cluster name, region and language filter
//! - [`CommandRunner`]: seam for the `kubectl`/`gcloud` invocations
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use e2e_env::runner::{ScriptedCommandRunner, CLUSTER_LIST, CURRENT_CONTEXT};
//! use e2e_env::{Environment, EnvironmentFlags};
//!
//! let flags = EnvironmentFlags::try_parse_from([
//!     "e2e", "-dockerrepo=gcr.io/knative-tests", "-languages=go,java",
//! ]).unwrap();
//!
//! let runner = ScriptedCommandRunner::new()
//!     .with_output(CURRENT_CONTEXT, "gke_myproject_us-central1_my-cluster\n")
//!     .with_output(CLUSTER_LIST, "my-cluster us-central1\n");
//! let env = Environment::with_runner(flags, runner);
//!
//! assert_eq!(env.image_path("helloworld"), "gcr.io/knative-tests/helloworld:latest");
//! assert_eq!(env.cluster_name().unwrap(), "my-cluster");
//! assert_eq!(env.cluster_region().unwrap(), "us-central1");
//! assert!(env.languages().allows("go"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod resolve;
pub mod runner;

// Re-export key types at crate root for convenience
pub use config::{EnvironmentFlags, EnvironmentFlagsBuilder, FlagValidator};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use resolve::{Environment, LanguageAllowList, ResolvedEnvironment};
pub use runner::{CommandRunner, ExternalCommand, ScriptedCommandRunner, SystemCommandRunner};
