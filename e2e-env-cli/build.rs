//! Build script for e2e-env-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// A boolean e2e flag taking an optional `=value`.
fn bool_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .global(true)
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .action(ArgAction::Set)
}

/// A string e2e flag.
fn value_flag(name: &'static str, value_name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name(value_name)
        .global(true)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs and the
/// flag definitions in the e2e-env library.
fn build_cli() -> Command {
    Command::new("e2e-env")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve end-to-end test environment settings")
        .long_about(
            "Resolve the cluster, region, image references and language filter for e2e test runs",
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(value_flag(
            "cluster",
            "NAME",
            "Cluster to test against (defaults to the current cluster in kubeconfig)",
        ))
        .arg(value_flag(
            "clusterregion",
            "REGION",
            "GCP region of the cluster (defaults to the region gcloud reports for it)",
        ))
        .arg(bool_flag("logverbose", "Enable verbose logging"))
        .arg(
            value_flag(
                "dockerrepo",
                "URI",
                "Docker repo the test images were uploaded to",
            )
            .env("KO_DOCKER_REPO"),
        )
        .arg(bool_flag(
            "emitmetrics",
            "Emit metrics such as the latency of resources being realized",
        ))
        .arg(
            value_flag("tag", "TAG", "Version tag of the test images").default_value("latest"),
        )
        .arg(value_flag(
            "languages",
            "LIST",
            "Comma separated languages to run e2e tests on (empty means all)",
        ))
        .subcommands([
            Command::new("show")
                .about("Show the resolved environment")
                .long_about("Print every resolved value as human, JSON, YAML, dotenv or export"),
            Command::new("image-path")
                .about("Print image references for the given image names")
                .long_about("Print {dockerrepo}/{name}:{tag} for each image name"),
            Command::new("cluster-name")
                .about("Print the cluster the tests run against")
                .long_about("Use -cluster, or the text after the last '_' of the kubectl context"),
            Command::new("cluster-region")
                .about("Print the region of that cluster")
                .long_about("Use -clusterregion, or the location gcloud lists for the cluster"),
            Command::new("languages")
                .about("Print or check the language allow-list")
                .long_about("An empty allow-list means tests run for every language"),
            Command::new("validate")
                .about("Validate the flag values")
                .long_about("Check the docker repo, tag, languages and cluster flags for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("e2e-env.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
