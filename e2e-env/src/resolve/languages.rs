//! Language allow-list parsing.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// The set of languages e2e tests should run for.
///
/// An empty list means no filter was given, so every language is allowed.
/// Use [`allows`](Self::allows) rather than [`contains`](Self::contains)
/// when deciding whether to run a test.
///
/// # Examples
///
/// ```
/// use e2e_env::LanguageAllowList;
///
/// let list = LanguageAllowList::parse("go,java");
/// assert!(list.allows("go"));
/// assert!(!list.allows("ruby"));
///
/// let all = LanguageAllowList::parse("");
/// assert!(all.is_empty());
/// assert!(all.allows("ruby"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageAllowList {
    languages: BTreeSet<String>,
}

impl LanguageAllowList {
    /// Splits a comma-separated filter into a set.
    ///
    /// Entries are trimmed and empty entries dropped, so `"go, java,"`
    /// yields `{go, java}`. A plain comma split would keep `" java"` and
    /// `""` as entries; here they can never match a language name, so they
    /// are normalized away.
    #[must_use]
    pub fn parse(filter: &str) -> Self {
        let languages = filter
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect();
        Self { languages }
    }

    /// True when no filter was given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Number of languages in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Raw set membership. An empty list contains nothing.
    #[must_use]
    pub fn contains(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    /// Whether tests for `language` should run.
    #[must_use]
    pub fn allows(&self, language: &str) -> bool {
        self.is_empty() || self.contains(language)
    }

    /// The underlying set, sorted.
    #[must_use]
    pub const fn as_set(&self) -> &BTreeSet<String> {
        &self.languages
    }

    /// Iterates languages in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }
}

impl fmt::Display for LanguageAllowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.iter().collect();
        write!(f, "{}", joined.join(","))
    }
}
