//! Utility functions for CLI operations.
//!
//! This module provides the state shared by every command and small
//! helpers for building the resolver and printing results.

use crate::error::CliError;
use e2e_env::{Environment, EnvironmentFlags};
use std::io::{self, Write};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Suppress non-essential output.
    pub quiet: bool,

    /// The e2e flags, parsed once in `main`.
    pub flags: EnvironmentFlags,
}

/// Build a resolver that shells out to the real `kubectl` and `gcloud`.
pub fn environment(global: &GlobalOptions) -> Environment {
    Environment::new(global.flags.clone())
}

/// Write `lines` to stdout, one per line.
///
/// Unlike `println!`, a closed or failing stdout is reported as
/// [`CliError::Io`] instead of panicking.
pub fn print_lines<I, S>(lines: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_lines(&mut out, lines)
}

/// Write `lines` to `out`, one per line, then flush.
pub fn write_lines<W, I, S>(out: &mut W, lines: I) -> Result<(), CliError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        writeln!(out, "{}", line.as_ref())?;
    }
    out.flush()?;
    Ok(())
}

/// Print a note to stderr unless `--quiet` was given.
pub fn note(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        eprintln!("{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_uses_global_flags() {
        let global = GlobalOptions {
            quiet: true,
            flags: EnvironmentFlags::builder()
                .docker_repo("gcr.io/tests")
                .tag("v1")
                .build(),
        };
        let env = environment(&global);
        assert_eq!(env.image_path("hello"), "gcr.io/tests/hello:v1");
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        write_lines(&mut out, ["go", "java"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "go\njava\n");
    }

    /// Writer whose reader went away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_maps_to_io_exit_code() {
        let err = write_lines(&mut ClosedPipe, ["my-cluster"]).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 5);
    }
}
