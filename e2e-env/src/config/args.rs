//! Single-dash long flag support.
//!
//! Test harnesses commonly pass flags the way Go's `flag` package accepts
//! them (`-cluster=foo`, `-logverbose`). clap only recognizes long flags
//! with two dashes, so arguments are rewritten before parsing.

use std::ffi::OsString;

/// Parses a boolean flag value.
///
/// Accepts `true/false`, `t/f`, `1/0`, `yes/no`, `on/off` (case-insensitive).
///
/// # Errors
///
/// Returns a message describing the accepted values when `s` is not one of them.
///
/// # Examples
///
/// ```
/// use e2e_env::config::parse_bool;
///
/// assert_eq!(parse_bool("T"), Ok(true));
/// assert_eq!(parse_bool("off"), Ok(false));
/// assert!(parse_bool("maybe").is_err());
/// ```
pub fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "on" => Ok(true),
        "false" | "f" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!(
            "invalid boolean value: '{s}' (expected true/false/t/f/1/0/yes/no/on/off)"
        )),
    }
}

/// Rewrites single-dash long flags to their double-dash form.
///
/// Only flags named in `known` are rewritten, so short flags such as `-h`
/// and `-V` pass through untouched. Everything after a bare `--` is left
/// as-is, as are non-UTF-8 arguments.
///
/// # Examples
///
/// ```
/// use e2e_env::config::normalize_args;
///
/// let args = normalize_args(["e2e", "-cluster=foo", "-V"], &["cluster"]);
/// assert_eq!(args, vec!["e2e", "--cluster=foo", "-V"]);
/// ```
pub fn normalize_args<I, T>(args: I, known: &[&str]) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;
    let mut normalized = Vec::new();

    for arg in args {
        let arg: OsString = arg.into();

        if passthrough {
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                passthrough = true;
                None
            }
            Some(s) => rewrite_single_dash(s, known),
            None => None,
        };

        normalized.push(rewritten.map_or(arg, OsString::from));
    }

    normalized
}

fn rewrite_single_dash(arg: &str, known: &[&str]) -> Option<String> {
    let body = arg.strip_prefix('-')?;
    if body.starts_with('-') {
        return None;
    }

    let name = body.split_once('=').map_or(body, |(name, _)| name);
    known.contains(&name).then(|| format!("-{arg}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN: &[&str] = &["cluster", "logverbose", "tag"];

    #[test]
    fn test_parse_bool_accepts_go_forms() {
        for value in ["1", "t", "T", "true", "TRUE", "True", "yes", "on"] {
            assert_eq!(parse_bool(value), Ok(true), "{value}");
        }
        for value in ["0", "f", "F", "false", "FALSE", "False", "no", "off"] {
            assert_eq!(parse_bool(value), Ok(false), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_unknown() {
        assert!(parse_bool("").is_err());
        assert!(parse_bool("2").is_err());
        assert!(parse_bool("enabled").is_err());
    }

    #[test]
    fn test_single_dash_with_value() {
        let args = normalize_args(["bin", "-cluster=foo"], KNOWN);
        assert_eq!(args, vec!["bin", "--cluster=foo"]);
    }

    #[test]
    fn test_single_dash_separate_value() {
        let args = normalize_args(["bin", "-tag", "v1"], KNOWN);
        assert_eq!(args, vec!["bin", "--tag", "v1"]);
    }

    #[test]
    fn test_double_dash_untouched() {
        let args = normalize_args(["bin", "--cluster", "foo"], KNOWN);
        assert_eq!(args, vec!["bin", "--cluster", "foo"]);
    }

    #[test]
    fn test_unknown_and_short_flags_untouched() {
        let args = normalize_args(["bin", "-h", "-V", "-unknown=1", "-"], KNOWN);
        assert_eq!(args, vec!["bin", "-h", "-V", "-unknown=1", "-"]);
    }

    #[test]
    fn test_values_are_not_rewritten_after_separator() {
        let args = normalize_args(["bin", "-logverbose", "--", "-cluster=x"], KNOWN);
        assert_eq!(args, vec!["bin", "--logverbose", "--", "-cluster=x"]);
    }
}
