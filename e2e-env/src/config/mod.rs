//! Flag parsing and validation.
//!
//! Flags come from the command line, with `KO_DOCKER_REPO` supplying the
//! docker repository when `-dockerrepo` is absent:
//!
//! 1. Command-line flags (highest priority)
//! 2. `KO_DOCKER_REPO` (docker repo only)
//! 3. Built-in defaults (lowest priority)
//!
//! # Examples
//!
//! ```
//! use e2e_env::config::{EnvironmentFlags, FlagValidator};
//!
//! let flags = EnvironmentFlags::try_parse_from([
//!     "e2e", "-dockerrepo=gcr.io/tests", "-languages=go",
//! ]).unwrap();
//! FlagValidator::validate(&flags).unwrap();
//! ```

mod args;
mod flags;
mod validator;

pub use args::{normalize_args, parse_bool};
pub use flags::{
    EnvironmentFlags, EnvironmentFlagsBuilder, DEFAULT_TAG, DOCKER_REPO_ENV, FLAG_NAMES,
};
pub use validator::FlagValidator;
