//! Main entry point for the e2e-env CLI.
//!
//! Resolves the settings an end-to-end test run needs:
//! - `show`: Print every resolved value (human, JSON, YAML, dotenv, export)
//! - `image-path`: Build image references from the docker repo and tag
//! - `cluster-name` / `cluster-region`: Derive the target cluster from kubectl and gcloud
//! - `languages`: Print or check the language allow-list
//! - `validate`: Check the flag values

mod cli;
mod commands;
mod error;
mod utils;

use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments (Go-style single-dash flags are accepted)
    let cli = match Cli::try_parse_normalized(std::env::args_os()) {
        Ok(cli) => cli,
        // Help and version output
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            let error = CliError::from(e2e_env::Error::InvalidFlags(e));
            std::process::exit(error.exit_code());
        }
    };

    // Initialize logging based on verbosity
    let logger = e2e_env::init_logger(cli.flags.log_verbose(), cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("Logger already installed: {e}"));
    }

    let global = GlobalOptions {
        quiet: cli.quiet,
        flags: cli.flags,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::ImagePath(cmd) => cmd.execute(&global),
        cli::Command::ClusterName(cmd) => cmd.execute(&global),
        cli::Command::ClusterRegion(cmd) => cmd.execute(&global),
        cli::Command::Languages(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Resolution failures are unrecoverable: report and exit
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
