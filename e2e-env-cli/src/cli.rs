//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! The e2e flags are global, so they may appear before or after the
//! subcommand and in Go style (`-cluster=foo`).

use crate::commands::{
    ClusterNameCommand, ClusterRegionCommand, CompletionsCommand, ImagePathCommand,
    LanguagesCommand, ShowCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use e2e_env::config::{normalize_args, FLAG_NAMES};
use e2e_env::EnvironmentFlags;
use std::ffi::OsString;

/// Command-line tool for resolving end-to-end test environment settings.
#[derive(Parser)]
#[command(name = "e2e-env")]
#[command(version, about = "Resolve end-to-end test environment settings", long_about = None)]
pub struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub flags: EnvironmentFlags,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments, accepting single-dash long flags.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown flags or bad values, and for
    /// `--help`/`--version`, which clap reports as errors.
    pub fn try_parse_normalized<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut known = FLAG_NAMES.to_vec();
        known.push("quiet");
        Self::try_parse_from(normalize_args(args, &known))
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the resolved environment
    Show(ShowCommand),

    /// Print image references for the given image names
    ImagePath(ImagePathCommand),

    /// Print the cluster the tests run against
    ClusterName(ClusterNameCommand),

    /// Print the region of that cluster
    ClusterRegion(ClusterRegionCommand),

    /// Print or check the language allow-list
    Languages(LanguagesCommand),

    /// Validate the flag values
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
