//! Flag validation.
//!
//! Resolution never validates: bad values flow straight into image
//! references. [`FlagValidator`] is the opt-in check a harness can run
//! before starting the tests.

use crate::config::EnvironmentFlags;
use crate::error::{Error, Result};

/// Validates flag values that would break image references or filters.
///
/// # Examples
///
/// ```
/// use e2e_env::config::{EnvironmentFlags, FlagValidator};
///
/// let flags = EnvironmentFlags::builder().docker_repo("gcr.io/tests").build();
/// FlagValidator::validate(&flags).unwrap();
///
/// let missing_repo = EnvironmentFlags::default();
/// assert!(FlagValidator::validate(&missing_repo).is_err());
/// ```
pub struct FlagValidator;

impl FlagValidator {
    /// Validate a complete flag set, returning the first problem found.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending flag.
    pub fn validate(flags: &EnvironmentFlags) -> Result<()> {
        Self::validate_docker_repo(flags.docker_repo())?;
        Self::validate_tag(flags.tag())?;
        Self::validate_languages(flags.languages())?;

        if let Some(cluster) = flags.cluster() {
            Self::validate_no_whitespace("cluster", cluster)?;
        }
        if let Some(region) = flags.cluster_region() {
            Self::validate_no_whitespace("clusterregion", region)?;
        }

        Ok(())
    }

    fn validate_docker_repo(repo: &str) -> Result<()> {
        if repo.is_empty() {
            return Err(Error::Validation {
                field: "dockerrepo".into(),
                message: "Must be set via -dockerrepo or $KO_DOCKER_REPO".into(),
            });
        }

        if repo.ends_with('/') {
            return Err(Error::Validation {
                field: "dockerrepo".into(),
                message: format!("'{repo}' must not end with '/'"),
            });
        }

        Self::validate_no_whitespace("dockerrepo", repo)
    }

    fn validate_tag(tag: &str) -> Result<()> {
        if tag.is_empty() {
            return Err(Error::Validation {
                field: "tag".into(),
                message: "Cannot be empty".into(),
            });
        }

        if tag.contains(&[':', '/'][..]) {
            return Err(Error::Validation {
                field: "tag".into(),
                message: format!("'{tag}' cannot contain ':' or '/'"),
            });
        }

        Self::validate_no_whitespace("tag", tag)
    }

    fn validate_languages(languages: &str) -> Result<()> {
        if languages.is_empty() {
            return Ok(());
        }

        if languages.split(',').any(|l| l.trim().is_empty()) {
            return Err(Error::Validation {
                field: "languages".into(),
                message: format!("'{languages}' contains an empty entry"),
            });
        }

        Ok(())
    }

    fn validate_no_whitespace(field: &str, value: &str) -> Result<()> {
        if value.chars().any(char::is_whitespace) {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{value}' cannot contain whitespace"),
            });
        }
        Ok(())
    }
}
